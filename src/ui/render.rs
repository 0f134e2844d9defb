use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Layout, Rect},
	text::{Line, Span},
	widgets::{Block, Borders, Paragraph},
};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthChar;

use super::App;
use super::state::ViewState;
use super::theme::Theme;

/// Label in front of the query on the header line.
pub const HEADER_PREFIX: &str = "Search: ";
/// Header plus separator rule.
const CHROME_ROWS: u16 = 2;

/// Result rows that fit in a viewport of `height` rows, never less than one.
pub fn visible_rows(height: u16) -> usize {
	usize::from(height.saturating_sub(CHROME_ROWS)).max(1)
}

impl App {
	/// Draw the current state and report how many result rows fit.
	pub(crate) fn draw(&mut self, frame: &mut Frame) -> usize {
		let spinner = self.is_scanning().then_some(&self.throbber_state);
		render(frame, &self.view, &self.theme, spinner);
		visible_rows(frame.area().height)
	}
}

/// Draw `view` into the whole frame without touching any shared state.
///
/// Row 0 shows the literal query, row 1 a rule, and the remaining rows the
/// window of results starting at `scroll_top`. A spinner is drawn at the end
/// of the header while `spinner` is set.
pub fn render(frame: &mut Frame, view: &ViewState, theme: &Theme, spinner: Option<&ThrobberState>) {
	let area = frame.area();
	if area.width == 0 || area.height == 0 {
		return;
	}

	let [header, rule, list] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Min(0),
	])
	.areas(area);

	render_header(frame, header, view.query(), theme, spinner);
	frame.render_widget(Block::new().borders(Borders::TOP).border_style(theme.rule), rule);
	render_results(frame, list, view, theme);
}

fn render_header(
	frame: &mut Frame,
	area: Rect,
	query: &str,
	theme: &Theme,
	spinner: Option<&ThrobberState>,
) {
	let line = Line::from(vec![
		Span::styled(HEADER_PREFIX, theme.prompt),
		Span::raw(query),
	]);
	let text_width = line.width();
	frame.render_widget(Paragraph::new(line), area);

	let Some(state) = spinner else {
		return;
	};
	let symbol = Throbber::default()
		.throbber_style(theme.muted)
		.to_symbol_span(state);
	// Keep a gap of two columns after the query.
	if text_width + symbol.width() + 2 > usize::from(area.width) {
		return;
	}
	frame.render_widget(
		Paragraph::new(Line::from(symbol)).alignment(Alignment::Right),
		area,
	);
}

fn render_results(frame: &mut Frame, area: Rect, view: &ViewState, theme: &Theme) {
	if area.height == 0 {
		return;
	}
	let width = usize::from(area.width);
	let lines: Vec<Line> = view
		.results()
		.iter()
		.enumerate()
		.skip(view.scroll_top())
		.take(usize::from(area.height))
		.map(|(index, entry)| {
			let text = format!("{} {}", entry.kind.marker(), entry.path.display());
			let style = if index == view.selected() {
				theme.selected
			} else {
				theme.row
			};
			Line::styled(truncate_to_width(&text, width), style)
		})
		.collect();
	frame.render_widget(Paragraph::new(lines), area);
}

/// Cut `text` to at most `max_width` terminal columns.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
	let mut width = 0;
	let mut truncated = String::new();
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if width + ch_width > max_width {
			break;
		}
		width += ch_width;
		truncated.push(ch);
	}
	truncated
}
