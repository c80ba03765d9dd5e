//! Scrub bar rendering.
//!
//! Draws the range input as a track with a thumb, filled up to the thumb.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::view::RangeView;
use crate::tui::theme::Theme;

/// Thumb glyph.
pub const THUMB: char = '●';
/// Unfilled track glyph.
pub const TRACK: char = '─';
/// Filled track glyph.
pub const FILLED: char = '━';

/// Build the scrub bar character array.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `range` - The range input being drawn
///
/// # Returns
/// A tuple of (bar_chars, thumb_index). Cells before the thumb are filled.
pub fn build_scrub_bar_chars(bar_width: usize, range: &RangeView) -> (Vec<char>, usize) {
    if bar_width == 0 {
        return (Vec::new(), 0);
    }

    let thumb = ((bar_width - 1) as f64 * range.fraction()).round() as usize;
    let thumb = thumb.min(bar_width - 1);

    let bar = (0..bar_width)
        .map(|i| match i.cmp(&thumb) {
            std::cmp::Ordering::Less => FILLED,
            std::cmp::Ordering::Equal => THUMB,
            std::cmp::Ordering::Greater => TRACK,
        })
        .collect();

    (bar, thumb)
}

/// Fraction along a bar of `bar_width` cells for a click on cell `cell`.
pub fn fraction_for_cell(cell: usize, bar_width: usize) -> f64 {
    if bar_width <= 1 {
        return 0.0;
    }
    (cell.min(bar_width - 1) as f64) / (bar_width - 1) as f64
}

/// Styled line for the scrub bar.
pub fn scrub_bar_line(bar_width: usize, range: &RangeView, theme: &Theme) -> Line<'static> {
    let (bar, thumb) = build_scrub_bar_chars(bar_width, range);
    if bar.is_empty() {
        return Line::default();
    }

    let filled: String = bar[..thumb].iter().collect();
    let rest: String = bar[thumb + 1..].iter().collect();

    Line::from(vec![
        Span::styled(filled, Style::default().fg(theme.accent)),
        Span::styled(bar[thumb].to_string(), Style::default().fg(theme.text_primary)),
        Span::styled(rest, Style::default().fg(theme.text_secondary)),
    ])
}
