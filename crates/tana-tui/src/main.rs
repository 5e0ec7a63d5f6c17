//! tana terminal client entry point

mod app;
mod client;
mod config;
mod error;
mod input;
mod ui;

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
  event, execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::app::App;
use crate::client::ApiClient;
use crate::error::TuiError;

#[derive(Parser)]
#[command(name = "tana")]
#[command(about = "Terminal client for the tana item catalog", long_about = None)]
struct Cli {
  /// API base URL (defaults to http://127.0.0.1:3000/api, overridable
  /// with TANA_BASE_URL)
  #[arg(long)]
  base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  let base_url = config::resolve_base_url(cli.base_url);
  let client = ApiClient::new(base_url);

  // Setup terminal
  enable_raw_mode()?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend)?;

  // Create the app and fire the startup requests
  let mut app = App::new(client);
  app.start();

  // Run event loop
  let result = run_loop(&mut terminal, &mut app).await;

  // Restore terminal
  disable_raw_mode()?;
  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
  terminal.show_cursor()?;

  result?;
  Ok(())
}

async fn run_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<(), TuiError> {
  loop {
    terminal.draw(|f| ui::render(f, app))?;

    // Poll for events with a timeout so in-flight responses get checked
    if event::poll(Duration::from_millis(50))? {
      let event = event::read()?;
      input::handle_event(app, event);
    }

    app.poll();

    if app.should_quit {
      break;
    }
  }

  Ok(())
}
