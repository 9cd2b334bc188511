//! Terminal output: result cards, chat lines, confetti.
//!
//! Draws view models with crossterm colours. Formatting decisions stay in the domain.

use crate::domain::confetti::{Burst, CONFETTI_COLORS};
use crate::domain::{ChatMessage, ConfettiPlan, ResultView, Sender, format_chat_message};
use chrono::{DateTime, Local};
use crossterm::ExecutableCommand;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use rand::Rng;
use std::io::{Write, stdout};

/// Gold (#d4af37).
const GOLD: (u8, u8, u8) = (0xd4, 0xaf, 0x37);
/// Approval green.
const GREEN: (u8, u8, u8) = (0x2f, 0xb3, 0x6d);
/// Rejection red.
const RED: (u8, u8, u8) = (0xe0, 0x4b, 0x4b);
const GRAY: (u8, u8, u8) = (0x9a, 0xa5, 0xb1);

const SPARKLES: [char; 4] = ['*', '✦', '•', '+'];

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}

/// `#rrggbb` -> colour; anything else falls back to gold.
fn hex_color(hex: &str) -> Color {
    let parsed = hex
        .strip_prefix('#')
        .filter(|h| h.len() == 6)
        .and_then(|h| {
            let r = u8::from_str_radix(&h[0..2], 16).ok()?;
            let g = u8::from_str_radix(&h[2..4], 16).ok()?;
            let b = u8::from_str_radix(&h[4..6], 16).ok()?;
            Some((r, g, b))
        });
    rgb(parsed.unwrap_or(GOLD))
}

fn colored(out: &mut impl Write, color: (u8, u8, u8), text: &str) {
    let _ = out.execute(SetForegroundColor(rgb(color)));
    let _ = out.execute(Print(text));
    let _ = out.execute(ResetColor);
}

/// Convert formatter markup to terminal text. With `styled`, bold/italic become SGR attributes.
///
/// Only the tags `format_chat_message` emits are removed; any other `<`/`>` is reply text.
pub fn markup_to_terminal(markup: &str, styled: bool) -> String {
    let (bold_on, bold_off, em_on, em_off) = if styled {
        (
            SetAttribute(Attribute::Bold).to_string(),
            SetAttribute(Attribute::NormalIntensity).to_string(),
            SetAttribute(Attribute::Italic).to_string(),
            SetAttribute(Attribute::NoItalic).to_string(),
        )
    } else {
        Default::default()
    };

    markup
        .replace("</p><p>", "\n\n")
        .replace("<p>", "")
        .replace("</p>", "")
        .replace("<br>", "\n")
        .replace(r#"<div class="chat-list-item">"#, "  ")
        .replace(r#"<div class="chat-bullet">"#, "  ")
        .replace("</div>", "")
        .replace("<strong>", &bold_on)
        .replace("</strong>", &bold_off)
        .replace("<em>", &em_on)
        .replace("</em>", &em_off)
}

/// Print a result card.
pub fn print_result(view: &ResultView) {
    let mut out = stdout();
    let accent = if view.is_approved() { GREEN } else { RED };

    let _ = out.execute(Print("\r\n"));
    colored(&mut out, accent, &format!("  {}  {}\r\n", view.icon, view.title));
    colored(&mut out, GOLD, &format!("  {}\r\n", view.probability_text));
    colored(&mut out, GRAY, &format!("  {}\r\n\r\n", view.band.message()));

    let width = view
        .details
        .iter()
        .map(|d| d.label.chars().count())
        .max()
        .unwrap_or(0);
    for row in &view.details {
        let _ = out.execute(Print(format!(
            "  {:<width$}  {}\r\n",
            row.label,
            row.value,
            width = width
        )));
    }

    let _ = out.execute(Print("\r\n"));
    if view.risk_factors.is_empty() {
        colored(&mut out, GREEN, "  ✓ No Major Risk Factors Identified\r\n");
    } else {
        colored(&mut out, RED, "  Risk Factors\r\n");
        for risk in &view.risk_factors {
            let _ = out.execute(Print(format!("    - {}\r\n", risk)));
        }
    }
    let _ = out.execute(Print("\r\n"));
    let _ = out.flush();
}

/// Print one transcript line, prefixed with its local time.
pub fn print_chat_message(message: &ChatMessage, at: DateTime<Local>) {
    let mut out = stdout();
    let (who, color) = match message.sender {
        Sender::User => ("You", GOLD),
        Sender::Bot => ("Advisor", GREEN),
    };
    colored(&mut out, GRAY, &format!("[{}] ", at.format("%H:%M")));
    colored(&mut out, color, &format!("{}:", who));

    let body = markup_to_terminal(&format_chat_message(&message.text), true);
    for line in body.lines() {
        let _ = out.execute(Print(format!("\r\n  {}", line)));
    }
    let _ = out.execute(Print("\r\n"));
    let _ = out.flush();
}

pub fn print_alert(message: &str) {
    let mut out = stdout();
    colored(&mut out, RED, &format!("\r\n  ! {}\r\n\r\n", message));
    let _ = out.flush();
}

pub fn print_notice(message: &str) {
    let mut out = stdout();
    colored(&mut out, GRAY, &format!("  {}\r\n", message));
    let _ = out.flush();
}

/// Sparkle row for one tick: each burst scatters particles around its origin column.
fn sparkle_row(frame: &[Burst], width: usize, rng: &mut impl Rng) -> Vec<(usize, char, Color)> {
    let mut cells = Vec::new();
    if width == 0 {
        return cells;
    }
    for burst in frame {
        let centre = (burst.origin_x * width as f64) as isize;
        let spread = (width / 6).max(1) as i64;
        let count = (burst.particle_count / 5.0).ceil() as usize;
        for _ in 0..count {
            let offset = rng.random_range(-spread..=spread) as isize;
            let col = (centre + offset).clamp(0, width as isize - 1);
            let ch = SPARKLES[rng.random_range(0..SPARKLES.len())];
            let color = hex_color(CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())]);
            cells.push((col as usize, ch, color));
        }
    }
    cells.sort_by_key(|c| c.0);
    cells.dedup_by_key(|c| c.0);
    cells
}

/// Play a confetti plan: one sparkle row per tick.
pub async fn play_confetti(plan: &ConfettiPlan) {
    let width = crossterm::terminal::size()
        .map(|(w, _)| w as usize)
        .unwrap_or(80);

    for frame in plan.frames() {
        tokio::time::sleep(plan.tick).await;
        let cells = sparkle_row(frame, width, &mut rand::rng());

        let mut out = stdout();
        let mut col = 0usize;
        for (pos, ch, color) in cells {
            let _ = out.execute(Print(" ".repeat(pos - col)));
            let _ = out.execute(SetForegroundColor(color));
            let _ = out.execute(Print(ch));
            let _ = out.execute(ResetColor);
            col = pos + 1;
        }
        let _ = out.execute(Print("\r\n"));
        let _ = out.flush();
    }
}
