//! Layout rendering (search bar, status line)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::ViewState;

const PLACEHOLDER: &str = "Title, Artist, or Album...";

pub fn render_search_bar(frame: &mut Frame, area: Rect, view: &ViewState) {
    let (text, style) = if view.query_text.is_empty() {
        (PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        (view.query_text.as_str(), Style::default().fg(Color::Green))
    };

    let search = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(search, area);
}

pub fn render_status_line(frame: &mut Frame, area: Rect, view: &ViewState) {
    let status = if view.is_loading {
        Span::styled(" Loading...", Style::default().fg(Color::Yellow))
    } else if view.shows_no_results() {
        Span::styled(
            " No results found",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else if view.can_load_more {
        Span::styled(
            format!(" {} results · PgDn to load more", view.results.len()),
            Style::default().fg(Color::Cyan),
        )
    } else {
        Span::raw("")
    };

    let hint = Span::styled("  F1 help · Ctrl+Q quit", Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(vec![status, hint])), area);
}
