//! ASCII welcome banner with a scarf-red to star-yellow gradient (FANPOST).

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::ExecutableCommand;
use figlet_rs::FIGfont;
use std::io::{stdout, Write};

/// Scarf red (#da251d).
const SCARF_RED: (u8, u8, u8) = (0xda, 0x25, 0x1d);
/// Star yellow (#ffcd00).
const STAR_YELLOW: (u8, u8, u8) = (0xff, 0xcd, 0x00);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the welcome banner: "FANPOST" in figlet with a red-to-yellow
/// gradient, then version and tagline.
pub fn print_welcome() {
    let mut out = stdout();
    // The figure borrows the font, so the font must outlive the conversion.
    let font = FIGfont::standard().ok();
    let Some(figure) = font.as_ref().and_then(|f| f.convert("FANPOST")) else {
        let _ = out.execute(Print("FANPOST\r\n"));
        return;
    };
    let art = figure.to_string();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(SCARF_RED, STAR_YELLOW, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: STAR_YELLOW.0,
        g: STAR_YELLOW.1,
        b: STAR_YELLOW.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print("Viết bài đăng fanpage Liên đội\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_font_renders_the_banner_text() {
        // The figure borrows the font; this mirrors print_welcome's bindings.
        let font = FIGfont::standard().ok();
        let figure = font.as_ref().and_then(|f| f.convert("FANPOST"));
        assert!(figure.is_some());
    }

    #[test]
    fn gradient_endpoints_are_exact() {
        assert_eq!(lerp_rgb(SCARF_RED, STAR_YELLOW, 0.0), SCARF_RED);
        assert_eq!(lerp_rgb(SCARF_RED, STAR_YELLOW, 1.0), STAR_YELLOW);
    }
}
