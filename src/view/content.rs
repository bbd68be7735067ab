//! Result list rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

use crate::model::{UiState, ViewState};
use super::utils::{calculate_num_width, cover_marker, describe_track, truncate_string};

const ADDED_MARKER: &str = " ✓ added";

pub fn render_results(frame: &mut Frame, area: Rect, view: &ViewState, ui_state: &UiState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .padding(Padding::horizontal(1));

    if view.results.is_empty() {
        let message = if view.is_loading {
            "Loading..."
        } else if view.shows_no_results() {
            "No results found"
        } else {
            "Start typing to search the catalog"
        };
        let content = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let selected = ui_state.result_selected.min(view.results.len() - 1);
    let num_width = calculate_num_width(view.results.len());
    let content_width = area.width.saturating_sub(4) as usize;
    let text_width = content_width.saturating_sub(num_width + 4 + ADDED_MARKER.chars().count());

    let items: Vec<ListItem> = view
        .results
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let is_selected = i == selected;
            let is_added = view.is_highlighted(track);

            let style = if is_added {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };

            let mut spans = vec![
                Span::raw(format!("{} ", cover_marker(track))),
                Span::styled(format!("{:>width$}. ", i + 1, width = num_width), Style::default().fg(Color::DarkGray)),
                Span::raw(truncate_string(&describe_track(track), text_width)),
            ];
            if is_added {
                spans.push(Span::raw(ADDED_MARKER));
            }

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    frame.render_stateful_widget(list, area, &mut list_state);
}
