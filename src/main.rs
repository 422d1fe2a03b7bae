//! apod-tui - A terminal gallery for the astronomy picture of the day
//!
//! This is the main entry point for the apod-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::fs;
use std::time::Duration;

fn main() -> Result<()> {
    init_logging();
    log::info!("apod-tui starting up");

    // Write a default config on first launch so the feed URL is editable
    if Config::load().is_none() {
        if let Err(e) = Config::default().save() {
            log::warn!("could not write default config: {}", e);
        }
    }

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Create app state
    let mut app = App::new();
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize the logger - set RUST_LOG=debug for verbose output.
///
/// Diagnostics go to a file under the config directory; stderr belongs to
/// the alternate screen while the TUI runs.
fn init_logging() {
    let builder_env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(builder_env);
    builder.format_timestamp_millis();

    if let Some(dir) = Config::config_dir() {
        let log_file = fs::create_dir_all(&dir)
            .ok()
            .and_then(|_| fs::File::create(dir.join("apod-tui.log")).ok());
        if let Some(file) = log_file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }

    builder.init();
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                log::error!("draw error: {}", e);
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Process the action
            if let Some(action) = action {
                // Action might produce a follow-up action
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
