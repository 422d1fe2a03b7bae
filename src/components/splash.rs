//! Splash screen component
//!
//! Displays a brief starfield banner before transitioning to the gallery.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Splash screen component
pub struct SplashComponent {
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashComponent {
    pub fn new() -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1200),
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    fn get_banner() -> Vec<&'static str> {
        vec![
            r"          .  *        .      +       .       *     ",
            r"   *            .        ____        .             ",
            r"        +          .--'      '--.        *    .    ",
            r"  .          *   /    o    .     \     .           ",
            r"       .        |   .     ( )   . |        +       ",
            r"   +             \     *      .  /    .        *   ",
            r"          .       '--.______.--'         .         ",
            r"    *        .        /    \       *          .    ",
            r"        .           _/      \_         .           ",
            r"  .        +       .    *        .          *      ",
        ]
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // True black background for consistent appearance across themes
        let bg_black = Color::Rgb(0, 0, 0);

        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(bg_black)), area);

        let banner_lines = Self::get_banner();
        let banner_height = banner_lines.len() as u16;
        let banner_width = banner_lines.first().map(|l| l.len()).unwrap_or(0) as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(banner_height + 5)) / 2),
                Constraint::Length(banner_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let banner: Vec<Line> = banner_lines
            .iter()
            .map(|line| {
                let spans: Vec<Span> = line
                    .chars()
                    .map(|c| {
                        let style = match c {
                            '*' | '+' | '.' => Style::default().fg(Color::Yellow).bg(bg_black),
                            'o' => Style::default().fg(Color::Red).bg(bg_black),
                            _ => Style::default().fg(Color::Cyan).bg(bg_black),
                        };
                        Span::styled(c.to_string(), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let centered_x = (area.width.saturating_sub(banner_width)) / 2;
        let banner_rect = Rect::new(centered_x, chunks[1].y, banner_width, banner_height);
        frame.render_widget(Paragraph::new(banner), banner_rect);

        let title = Line::from(vec![
            Span::styled(
                "apod",
                Style::default()
                    .fg(Color::Cyan)
                    .bg(bg_black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "-tui",
                Style::default()
                    .fg(Color::White)
                    .bg(bg_black)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let title_width = 8; // "apod-tui"
        let title_x = (area.width.saturating_sub(title_width)) / 2;
        let title_rect = Rect::new(title_x, chunks[3].y, title_width, 1);
        frame.render_widget(Paragraph::new(title), title_rect);

        let subtitle = Line::from(Span::styled(
            "An astronomy picture-of-the-day gallery",
            Style::default().fg(Color::DarkGray).bg(bg_black),
        ));

        let subtitle_width = 39;
        let subtitle_x = (area.width.saturating_sub(subtitle_width)) / 2;
        let subtitle_rect = Rect::new(subtitle_x, chunks[4].y, subtitle_width, 1);
        frame.render_widget(Paragraph::new(subtitle), subtitle_rect);

        Ok(())
    }
}
