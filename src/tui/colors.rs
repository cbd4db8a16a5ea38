//! Color constants for the terminal user interface.

use ratatui::style::{Color, Modifier, Style};

use crate::fields::Priority;

/// Danger: high priority
pub const DANGER: Color = Color::Rgb(220, 53, 69);
/// Warning: medium priority
pub const WARNING: Color = Color::Rgb(255, 193, 7);
/// Success: low priority
pub const SUCCESS: Color = Color::Rgb(25, 135, 84);
/// Primary accent for headers and the add affordance
pub const PRIMARY: Color = Color::Rgb(13, 110, 253);
/// Form panel background
pub const LIGHT_PANEL: Color = Color::Rgb(40, 44, 52);

/// Text style for a priority label.
pub fn priority_style(p: Priority) -> Style {
    let fg = match p {
        Priority::High => DANGER,
        Priority::Medium => WARNING,
        Priority::Low => SUCCESS,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priorities_map_to_alert_levels() {
        assert_eq!(priority_style(Priority::High).fg, Some(DANGER));
        assert_eq!(priority_style(Priority::Medium).fg, Some(WARNING));
        assert_eq!(priority_style(Priority::Low).fg, Some(SUCCESS));
    }
}
