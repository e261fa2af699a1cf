//! Smart Form - Terminal Sign-up Form
//!
//! Real-time validation of name, email and password with a strength meter.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

mod app;
mod form;
mod input;
mod logging;
mod ui;
mod validate;

use app::{App, AppConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1).map(PathBuf::from) {
        Some(path) => AppConfig::load_from(&path)?,
        None => AppConfig::load()?,
    };
    info!(?config, "starting");

    let (mut terminal, guard) = ui::setup_terminal()?;
    let mut app = App::new(config);

    let result = run_app(&mut terminal, &mut app);

    drop(guard);
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key(key, Instant::now()) {
                        break;
                    }
                }
                Event::Paste(text) => app.handle_paste(&text, Instant::now()),
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    info!("exiting");
    Ok(())
}
