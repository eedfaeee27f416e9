//! alltz, a terminal timezone viewer
//!
//! Entry point: dispatches the one-shot subcommands, or sets up the
//! terminal and runs the interactive dashboard loop.

mod app;
mod cli;
mod config;
mod error;
mod logging;
mod models;
mod services;
mod ui;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::App;
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::services::time_provider::{SystemTimeProvider, TimeProvider};
use crate::services::timezone_service::TimezoneService;

/// Event poll timeout; doubles as the live-clock tick interval
const TICK_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::List) => {
            logging::init_cli_logging();
            cmd_list();
            Ok(())
        }
        Some(Command::Time { city }) => {
            logging::init_cli_logging();
            cmd_time(&Command::city_query(&city))
        }
        Some(Command::Zone { city }) => {
            logging::init_cli_logging();
            cmd_zone(&Command::city_query(&city))
        }
        None => run_dashboard(),
    }
}

fn cmd_list() {
    let registry = TimezoneService::new();
    let now = SystemTimeProvider::new().now_utc();

    for city in registry.all_cities() {
        let zone = crate::models::zone::Zone::from_city(city);
        println!(
            "{:<18} {:<22} {:<28} {}",
            city.name,
            city.country,
            city.tz_name(),
            zone.offset_string(now)
        );
    }
}

fn cmd_time(query: &str) -> anyhow::Result<()> {
    let registry = TimezoneService::new();
    let zone = registry.resolve(query)?;
    let now = SystemTimeProvider::new().now_utc();

    let local = zone.convert(now);
    let dst_note = if zone.is_dst(now) { ", DST in effect" } else { "" };
    println!(
        "{}: {} ({}{})",
        zone.label,
        local.format("%H:%M:%S %Z %a %d %b %Y"),
        zone.offset_string(now),
        dst_note
    );
    Ok(())
}

fn cmd_zone(query: &str) -> anyhow::Result<()> {
    let registry = TimezoneService::new();
    let zone = registry.resolve(query)?;
    let now = SystemTimeProvider::new().now_utc();
    let info = registry.zone_info(&zone, now);

    println!("{}", zone.full_name());
    println!("  abbreviation:  {}", info.abbreviation);
    println!("  utc offset:    {}", info.offset_string);
    println!(
        "  observes dst:  {}{}",
        if info.observes_dst { "yes" } else { "no" },
        if info.is_dst { " (currently active)" } else { "" }
    );
    match info.next_transition {
        Some((at, kind)) => println!(
            "  next change:   {} ({})",
            at.format("%Y-%m-%d %H:%M UTC"),
            kind.description()
        ),
        None => println!("  next change:   none within a year"),
    }
    Ok(())
}

fn run_dashboard() -> anyhow::Result<()> {
    let config_path = Config::default_path().context("resolving config path")?;
    let config = Config::load(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    logging::init_tui_logging(config_path.parent().map(|p| p.to_path_buf()));

    let provider: Arc<dyn TimeProvider> = Arc::new(SystemTimeProvider::new());
    let mut app = App::new(config, config_path, provider).context("initializing dashboard")?;

    let mut terminal = setup_terminal().context("entering raw mode")?;
    install_panic_hook();

    let result = run_event_loop(&mut terminal, &mut app);

    restore_terminal().context("restoring terminal")?;
    app.save_if_dirty().context("saving config")?;
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        app.tick();
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                // Ratatui re-measures on the next draw; nothing to do.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Restore the terminal before the default panic output so a crash does
/// not leave the shell in raw mode.
fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original(info);
    }));
}
