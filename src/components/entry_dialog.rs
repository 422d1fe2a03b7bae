//! Entry detail dialog component
//!
//! Renders the overlay model: backdrop, content pane with close control,
//! media slot, title, date, and the scrollable explanation text.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::{MediaSlot, Overlay};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// What part of the screen a mouse press landed on while the dialog is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogHit {
    /// The ✕ close control
    CloseControl,
    /// Inside the content pane
    Content,
    /// The dimmed backdrop around the pane
    Backdrop,
}

/// Full-size entry detail dialog
#[derive(Default)]
pub struct EntryDialog {
    /// Content pane from the last render, for backdrop hit-testing
    content_area: Option<Rect>,
    /// Close control from the last render
    close_area: Option<Rect>,
}

impl Component for EntryDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // This needs the overlay model, so we use draw_with
        Ok(())
    }
}

impl EntryDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a mouse position against the last render.
    pub fn hit_test(&self, column: u16, row: u16) -> DialogHit {
        let position = Position::new(column, row);

        if let Some(close) = self.close_area {
            if close.contains(position) {
                return DialogHit::CloseControl;
            }
        }
        if let Some(content) = self.content_area {
            if content.contains(position) {
                return DialogHit::Content;
            }
        }
        DialogHit::Backdrop
    }

    pub fn draw_with(&mut self, frame: &mut Frame, area: Rect, overlay: &Overlay) -> Result<()> {
        // Dim the whole screen as the backdrop
        frame.render_widget(Clear, area);
        let backdrop = Block::default().style(Style::default().bg(Color::Reset));
        frame.render_widget(backdrop, area);

        let width = (area.width * 4 / 5).clamp(24, 100);
        let height = (area.height * 4 / 5).max(12).min(area.height);
        let popup = centered_popup(area, width, height);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        // Close control on the top border
        let close_area = Rect::new(popup.right().saturating_sub(5), popup.y, 3, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                " ✕ ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            close_area,
        );

        let media_height = match overlay.media {
            MediaSlot::Empty => 0,
            _ => 3,
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(media_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        render_media_slot(frame, chunks[0], &overlay.media);

        frame.render_widget(
            Paragraph::new(Span::styled(
                overlay.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            chunks[1],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                overlay.date.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            chunks[2],
        );

        let explanation = Paragraph::new(overlay.explanation.clone())
            .wrap(Wrap { trim: false })
            .scroll((overlay.scroll.min(u16::MAX as usize) as u16, 0))
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(explanation, chunks[4]);

        self.content_area = Some(popup);
        self.close_area = Some(close_area);
        Ok(())
    }
}

fn render_media_slot(frame: &mut Frame, area: Rect, media: &MediaSlot) {
    if area.height == 0 {
        return;
    }

    let lines = match media {
        MediaSlot::Image { src } => vec![
            Line::from(Span::styled(
                "🖼 Image",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                src.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            )),
        ],
        MediaSlot::Video(video) => {
            let playback = if video.playing {
                Span::styled(
                    "▶ playing",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled("■ stopped", Style::default().fg(Color::DarkGray))
            };
            vec![
                Line::from(vec![
                    Span::styled(
                        "🎬 Video  ",
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
                    playback,
                ]),
                Line::from(Span::styled(
                    video.src.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                )),
            ]
        }
        MediaSlot::Link { url } => vec![
            Line::from(Span::styled(
                "🔗 Open media in a new window:",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(Span::styled(
                url.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            )),
        ],
        MediaSlot::Empty => return,
    };

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_distinguishes_close_content_and_backdrop() {
        let dialog = EntryDialog {
            content_area: Some(Rect::new(10, 5, 60, 20)),
            close_area: Some(Rect::new(65, 5, 3, 1)),
        };

        assert_eq!(dialog.hit_test(66, 5), DialogHit::CloseControl);
        assert_eq!(dialog.hit_test(30, 10), DialogHit::Content);
        assert_eq!(dialog.hit_test(2, 2), DialogHit::Backdrop);
    }

    #[test]
    fn hit_test_before_any_render_is_backdrop() {
        let dialog = EntryDialog::new();
        assert_eq!(dialog.hit_test(0, 0), DialogHit::Backdrop);
    }
}
