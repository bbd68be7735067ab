//! Utility functions for rendering UI components

use crate::model::SearchResult;

/// Calculate width needed for index column (log10(n) + padding)
pub fn calculate_num_width(item_count: usize) -> usize {
    if item_count == 0 {
        2
    } else {
        let digits = (item_count as f64).log10().floor() as usize + 1;
        digits + 1
    }
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// "Title by Artist from the album Album", skipping empty tags
pub fn describe_track(track: &SearchResult) -> String {
    let title = if track.title.is_empty() { "Unknown title" } else { &track.title };
    let mut text = title.to_string();
    if !track.artist.is_empty() {
        text.push_str(&format!(" by {}", track.artist));
    }
    if !track.album.is_empty() {
        text.push_str(&format!(" from the album {}", track.album));
    }
    text
}

/// Marker column for cover art; a hollow box stands in for missing art.
pub fn cover_marker(track: &SearchResult) -> &'static str {
    if track.has_cover_art() { "▣" } else { "□" }
}
