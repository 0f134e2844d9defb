use ratatui::style::{Color, Modifier, Style};

/// Styles used by the renderer. The selection is the single highlight pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub prompt: Style,
	pub rule: Style,
	pub row: Style,
	pub selected: Style,
	pub muted: Style,
}

pub const DEFAULT: Theme = Theme {
	prompt: Style::new().add_modifier(Modifier::BOLD),
	rule: Style::new(),
	row: Style::new(),
	selected: Style::new().fg(Color::Black).bg(Color::White),
	muted: Style::new().fg(Color::DarkGray),
};

impl Default for Theme {
	fn default() -> Self {
		DEFAULT
	}
}
