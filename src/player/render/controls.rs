//! Terminal layout and drawing of the player.
//!
//! Layout is computed separately from drawing so the input layer can hit
//! test pointer events against the same rectangles that were drawn.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::progress::{fraction_for_cell, scrub_bar_line};
use super::view::{ControlTarget, PlayerView};
use crate::tui::theme::Theme;
use crate::tui::ui::centered_rect;

/// Key hints shown under the windowed player.
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("space", "play"),
    ("←/→", "seek"),
    ("m", "mute"),
    ("f", "fullscreen"),
    ("q", "quit"),
];

const BUTTON_WIDTH: u16 = 3;

/// Rectangles of the control bar elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRects {
    pub bar: Rect,
    pub play: Rect,
    pub scrubber: Rect,
    pub remaining: Rect,
    pub sound: Rect,
    pub fullscreen: Rect,
}

/// Where each part of the player sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlLayout {
    /// The player container, border included
    pub player: Rect,
    /// The media surface
    pub surface: Rect,
    /// The control bar, absent while hidden
    pub controls: Option<ControlRects>,
    /// Key hint row under the player, when there is room
    pub footer: Option<Rect>,
}

fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

impl ControlLayout {
    /// Compute the layout of `view` inside `area`.
    ///
    /// Windowed players sit in a centred bordered box with a key hint row
    /// beneath; fullscreen players take the whole area.
    pub fn compute(area: Rect, view: &PlayerView) -> Self {
        let (player, inner, footer) = if view.fullscreen {
            (area, area, None)
        } else {
            let player = centered_rect(80, 80, area);
            let inner = Block::default().borders(Borders::ALL).inner(player);
            let footer_row = player.y.saturating_add(player.height);
            let footer = (footer_row < area.y.saturating_add(area.height))
                .then(|| Rect::new(area.x, footer_row, area.width, 1));
            (player, inner, footer)
        };

        if view.controls_hidden || inner.height < 2 {
            return Self {
                player,
                surface: inner,
                controls: None,
                footer,
            };
        }

        let surface = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);
        let bar = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        let label_width = view.remaining_label.chars().count() as u16;

        let cells = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(label_width),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(bar);

        Self {
            player,
            surface,
            controls: Some(ControlRects {
                bar,
                play: cells[0],
                scrubber: cells[2],
                remaining: cells[4],
                sound: cells[6],
                fullscreen: cells[8],
            }),
            footer,
        }
    }

    /// Whether a pointer at (`col`, `row`) is over the player.
    pub fn is_over_player(&self, col: u16, row: u16) -> bool {
        contains(self.player, col, row)
    }

    /// The element under (`col`, `row`), if any.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<ControlTarget> {
        if let Some(controls) = &self.controls {
            let targets = [
                (controls.play, ControlTarget::PlayToggle),
                (controls.scrubber, ControlTarget::Scrubber),
                (controls.remaining, ControlTarget::RemainingTime),
                (controls.sound, ControlTarget::Sound),
                (controls.fullscreen, ControlTarget::Fullscreen),
                (controls.bar, ControlTarget::Controls),
            ];
            if let Some((_, target)) = targets
                .iter()
                .find(|(rect, _)| contains(*rect, col, row))
            {
                return Some(*target);
            }
        }
        contains(self.surface, col, row).then_some(ControlTarget::Surface)
    }

    /// Scrub value for a click in column `col` of the scrub bar.
    pub fn scrub_value_at(&self, col: u16, view: &PlayerView) -> Option<f64> {
        let scrubber = self.controls?.scrubber;
        if scrubber.width == 0 || col < scrubber.x {
            return None;
        }
        let cell = (col - scrubber.x) as usize;
        Some(view.range.value_at(fraction_for_cell(cell, scrubber.width as usize)))
    }
}

/// Draw the player and return the layout used.
pub fn render_player(frame: &mut Frame, view: &PlayerView, theme: &Theme) -> ControlLayout {
    let layout = ControlLayout::compute(frame.area(), view);

    if !view.fullscreen {
        let title = view
            .sources
            .first()
            .map(|source| format!(" {} ", source.url))
            .unwrap_or_default();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.text_secondary_style())
            .title(Span::styled(title, theme.text_style()));
        frame.render_widget(block, layout.player);
    }

    frame.render_widget(surface_paragraph(view, layout.surface, theme), layout.surface);

    if let Some(controls) = layout.controls {
        render_control_bar(frame, &controls, view, theme);
    }

    if let Some(footer) = layout.footer {
        let hints = Paragraph::new(Line::from(footer_spans(KEY_HINTS, theme)))
            .alignment(Alignment::Center);
        frame.render_widget(hints, footer);
    }

    layout
}

fn surface_paragraph(view: &PlayerView, area: Rect, theme: &Theme) -> Paragraph<'static> {
    let mut lines = Vec::new();
    let top_padding = area.height.saturating_sub(3) / 2;
    for _ in 0..top_padding {
        lines.push(Line::default());
    }

    let status = match view.play_icon {
        super::view::Icon::Pause => "playing",
        _ => "paused",
    };
    lines.push(Line::from(Span::styled(
        format!("{}  {}", view.play_icon.glyph(), status),
        theme.accent_bold_style(),
    )));
    if let Some(source) = view.sources.first() {
        lines.push(Line::from(Span::styled(
            source.to_string(),
            theme.text_style(),
        )));
    }
    lines.push(Line::from(Span::styled(
        view.root_classes(),
        theme.text_secondary_style(),
    )));

    Paragraph::new(lines).alignment(Alignment::Center)
}

fn render_control_bar(frame: &mut Frame, controls: &ControlRects, view: &PlayerView, theme: &Theme) {
    let button = |icon: &str| {
        Paragraph::new(format!(" {} ", icon))
            .style(theme.accent_style())
            .alignment(Alignment::Center)
    };

    frame.render_widget(button(view.play_icon.glyph()), controls.play);
    frame.render_widget(
        Paragraph::new(scrub_bar_line(
            controls.scrubber.width as usize,
            &view.range,
            theme,
        )),
        controls.scrubber,
    );
    frame.render_widget(
        Paragraph::new(view.remaining_label.clone()).style(theme.text_style()),
        controls.remaining,
    );
    frame.render_widget(button(view.sound_icon.glyph()), controls.sound);
    frame.render_widget(button(view.fullscreen_icon.glyph()), controls.fullscreen);
}

/// Build styled spans for keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
fn footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(theme.accent)));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}
