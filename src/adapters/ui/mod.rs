pub mod banner;
pub mod html;
pub mod terminal;
pub mod tui;

/// Prints the welcome banner and applies the gold theme for all subsequent inquire prompts.
/// Call once at startup (after tracing init).
pub fn init_ui() {
    banner::print_welcome();
    tui::apply_theme();
}
