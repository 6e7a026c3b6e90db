//! Terminal UI adapter. Banner, prompt theme, inquire-driven flows.

pub mod banner;
pub mod tui;

use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};

pub use tui::TuiInputPort;

/// Prints the welcome banner and applies the scarf-red/star-yellow theme for
/// all subsequent inquire prompts. Call once at startup.
pub fn init_ui() {
    banner::print_welcome();
    apply_theme();
}

/// Global render config for inquire prompts.
fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("★").with_fg(Color::LightRed))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightYellow))
        .with_selected_option(Some(StyleSheet::new().with_fg(Color::LightYellow)))
        .with_answer(StyleSheet::new().with_fg(Color::LightYellow));
    inquire::set_global_render_config(config);
}
