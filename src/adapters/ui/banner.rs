//! Navy-to-gold ASCII banner (LOANVISTA).

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Deep navy (#1e3a5f), lifted from the brand navy so it reads on dark terminals.
const NAVY: (u8, u8, u8) = (0x1e, 0x3a, 0x5f);
/// Gold (#d4af37).
const GOLD: (u8, u8, u8) = (0xd4, 0xaf, 0x37);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints "LOANVISTA" in the standard figlet font with a navy-to-gold gradient,
/// then the version. Falls back to plain text if the font cannot render.
pub fn print_welcome() {
    let mut out = stdout();
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("LOANVISTA").map(|f| f.to_string()))
        .unwrap_or_else(|| "LOANVISTA".to_string());
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(NAVY, GOLD, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: GOLD.0,
        g: GOLD.1,
        b: GOLD.2,
    }));
    let _ = out.execute(Print(format!("v{}  ·  loan eligibility advisor\r\n", version)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
