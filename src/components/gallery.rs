//! Gallery component - Main application screen
//!
//! Renders the header fact region, the card grid with its placeholder
//! states, the status line, and the key hint bar. Owns grid navigation
//! state and the card hit boxes used for mouse activation.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_main_layout;
use crate::model::{DomainState, GalleryEntry, GalleryState, Media};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Card geometry in terminal cells.
const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 7;

// ═══════════════════════════════════════════════════════════════════════════════
// Gallery Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Gallery component for the main application view.
/// Owns grid navigation state and handles card interactions.
pub struct GalleryComponent {
    /// Index of the selected card in feed order
    pub selected: usize,

    /// First visible grid row
    row_offset: usize,

    /// Column count from the last render
    columns: usize,

    /// Card hit boxes from the last render, for mouse activation
    card_areas: Vec<(Rect, usize)>,

    /// Thumbnail source preference from config
    pub hd_thumbnails: bool,
}

impl Default for GalleryComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryComponent {
    pub fn new() -> Self {
        Self {
            selected: 0,
            row_offset: 0,
            columns: 1,
            card_areas: Vec::new(),
            hd_thumbnails: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Select the next card, wrapping past the end.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// Select the previous card, wrapping past the start.
    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
    }

    /// Move one grid row down, clamping to the last card.
    pub fn next_row(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let candidate = self.selected + self.columns;
        self.selected = candidate.min(len - 1);
    }

    /// Move one grid row up.
    pub fn previous_row(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = self.selected.saturating_sub(self.columns);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.row_offset = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        if len > 0 {
            self.selected = len - 1;
        }
    }

    /// Find the card under a screen position from the last render.
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        self.card_areas
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(column, row)))
            .map(|(_, index)| *index)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for GalleryComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevCard),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextCard),
            KeyCode::Home => Some(Action::FirstCard),
            KeyCode::End => Some(Action::LastCard),

            // Feed
            KeyCode::Char('g') => Some(Action::FetchFeed),

            // Overlay
            KeyCode::Enter => Some(Action::OpenEntry),

            // Dialogs
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        // Navigation is driven by App, which knows the entry count
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_main_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the main screen
pub struct MainRenderContext<'a> {
    pub domain: &'a DomainState,
    pub fact: &'a str,
    pub status_message: Option<&'a str>,
}

/// Draw the main screen
pub fn draw_main_screen(
    frame: &mut Frame,
    area: Rect,
    gallery: &mut GalleryComponent,
    ctx: &MainRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area);

    render_header(frame, layout.header, ctx.fact);
    render_gallery(frame, layout.gallery, gallery, ctx.domain);
    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help);

    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect, fact: &str) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "apod-tui ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "— Astronomy Picture of the Day",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("✦ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                truncate_to_width(fact, area.width.saturating_sub(3) as usize),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(paragraph, area);
}

fn render_gallery(
    frame: &mut Frame,
    area: Rect,
    gallery: &mut GalleryComponent,
    domain: &DomainState,
) {
    gallery.card_areas.clear();

    match domain.gallery {
        GalleryState::Idle => {
            render_placeholder(frame, area, "🔭", "Press  g  to get images");
        }
        GalleryState::Loading => {
            render_placeholder(frame, area, "🔄", "Loading space photos…");
        }
        GalleryState::Empty => {
            render_placeholder(frame, area, "", "No images found.");
        }
        GalleryState::Error => {
            render_placeholder(frame, area, "", "Failed to load images. Please try again later.");
        }
        GalleryState::Loaded => {
            render_cards(frame, area, gallery, domain);
        }
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, icon: &str, text: &str) {
    let mut lines = vec![Line::from(""); (area.height / 2).saturating_sub(1) as usize];
    if !icon.is_empty() {
        lines.push(Line::from(Span::styled(
            icon.to_string(),
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_cards(
    frame: &mut Frame,
    area: Rect,
    gallery: &mut GalleryComponent,
    domain: &DomainState,
) {
    let entries = &domain.entries;
    if entries.is_empty() {
        return;
    }

    let columns = (area.width / CARD_WIDTH).max(1) as usize;
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    gallery.columns = columns;

    // Keep the selected card's row on screen
    gallery.selected = gallery.selected.min(entries.len() - 1);
    let selected_row = gallery.selected / columns;
    if selected_row < gallery.row_offset {
        gallery.row_offset = selected_row;
    } else if selected_row >= gallery.row_offset + visible_rows {
        gallery.row_offset = selected_row + 1 - visible_rows;
    }

    for (index, entry) in entries.iter().enumerate() {
        let row = index / columns;
        let col = index % columns;
        if row < gallery.row_offset || row >= gallery.row_offset + visible_rows {
            continue;
        }

        // Clip to the gallery pane so short terminals never render past it
        let card_area = Rect::new(
            area.x + (col as u16) * CARD_WIDTH,
            area.y + ((row - gallery.row_offset) as u16) * CARD_HEIGHT,
            CARD_WIDTH,
            CARD_HEIGHT,
        )
        .intersection(area);
        if card_area.height == 0 || card_area.width == 0 {
            continue;
        }

        render_card(
            frame,
            card_area,
            entry,
            index == gallery.selected,
            gallery.hd_thumbnails,
        );
        gallery.card_areas.push((card_area, index));
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    entry: &GalleryEntry,
    selected: bool,
    hd_thumbnails: bool,
) {
    let border_style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let mut lines = Vec::new();

    // Thumbnail region; unrecognized media types get title/date only
    match entry.media() {
        Media::Image { .. } => {
            lines.push(Line::from(Span::styled(
                format!("{} ", entry.icon()),
                Style::default().fg(Color::Blue),
            )));
            lines.push(caption_line(entry.card_source(hd_thumbnails), inner_width));
        }
        Media::Video { .. } => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", entry.icon()),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(
                    "▶",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(caption_line(entry.card_source(hd_thumbnails), inner_width));
        }
        Media::Other { .. } => {
            lines.push(Line::from(""));
            lines.push(Line::from(""));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        truncate_to_width(&entry.title, inner_width),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        entry.formatted_date(),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}

/// Dim caption showing the tail of the thumbnail source, or a hint that
/// none was provided.
fn caption_line(source: Option<String>, width: usize) -> Line<'static> {
    match source {
        Some(src) => {
            let tail = src.rsplit('/').next().unwrap_or(&src).to_string();
            Line::from(Span::styled(
                truncate_to_width(&tail, width),
                Style::default().fg(Color::DarkGray),
            ))
        }
        None => Line::from(Span::styled(
            "no thumbnail",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &MainRenderContext) {
    if let Some(message) = ctx.status_message {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Green),
        )));
        frame.render_widget(paragraph, area);
    }
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let hint = |key: &str, label: &str| {
        vec![
            Span::styled(
                format!(" {} ", key),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{}  ", label)),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(hint("g", "Get images"));
    spans.extend(hint("↑↓←→", "Navigate"));
    spans.extend(hint("Enter", "Open"));
    spans.extend(hint("Esc", "Close"));
    spans.extend(hint("?", "Help"));
    spans.extend(hint("q", "Quit"));

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Truncate a string to a display width, appending an ellipsis when
/// anything was cut.
fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max.saturating_sub(1) {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_wrap_around() {
        let mut gallery = GalleryComponent::new();

        gallery.next(3);
        gallery.next(3);
        assert_eq!(gallery.selected, 2);

        gallery.next(3);
        assert_eq!(gallery.selected, 0);

        gallery.previous(3);
        assert_eq!(gallery.selected, 2);
    }

    #[test]
    fn row_navigation_clamps_to_the_last_card() {
        let mut gallery = GalleryComponent::new();
        gallery.columns = 3;

        gallery.next_row(8);
        assert_eq!(gallery.selected, 3);

        gallery.next_row(8);
        assert_eq!(gallery.selected, 6);

        gallery.next_row(8);
        assert_eq!(gallery.selected, 7);

        gallery.previous_row(8);
        assert_eq!(gallery.selected, 4);
    }

    #[test]
    fn navigation_on_an_empty_gallery_is_a_no_op() {
        let mut gallery = GalleryComponent::new();
        gallery.next(0);
        gallery.previous(0);
        gallery.next_row(0);
        gallery.select_last(0);
        assert_eq!(gallery.selected, 0);
    }

    #[test]
    fn card_at_maps_positions_to_card_indices() {
        let mut gallery = GalleryComponent::new();
        gallery.card_areas.push((Rect::new(0, 0, 30, 7), 0));
        gallery.card_areas.push((Rect::new(30, 0, 30, 7), 1));

        assert_eq!(gallery.card_at(5, 3), Some(0));
        assert_eq!(gallery.card_at(35, 3), Some(1));
        assert_eq!(gallery.card_at(70, 3), None);
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a very long title", 8), "a very …");
    }
}
