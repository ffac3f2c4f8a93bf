// ABOUTME: Main entry point for botdesk with TUI and CLI support
//
// Binary: botdesk
// Usage: botdesk [COMMAND]
// - No command: launches TUI
// - onboard: TUI on the onboarding wizard
// - dashboard: TUI on the analytics dashboard
// - quote: price a monthly message volume
// - usage: print usage totals for a time range

#![allow(missing_docs)]

use anyhow::Result;
use botdesk::app::{App, EventHandler};
use botdesk::cli::{self, Commands};
use botdesk::components::LayoutComponent;
use botdesk::config::{AppConfig, StartView};
use botdesk::pricing::group_thousands;
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let interactive = args.launches_tui();

    // Print-only commands leave no log file and no terminal escape codes behind
    if interactive {
        setup_logging();
        setup_panic_handler();
    }

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    let result = match args.command {
        // CLI commands
        Some(Commands::Quote(quote_args)) => cli::quote::execute(&quote_args, args.format, &config),
        Some(Commands::Usage(usage_args)) => cli::usage::execute(&usage_args, args.format, &config),

        // TUI mode (explicit or default)
        Some(Commands::Onboard) => {
            let mut config = config;
            config.ui_preferences.start_view = StartView::Onboarding;
            launch(config)
        }
        Some(Commands::Dashboard(dashboard_args)) => {
            let mut config = config;
            config.ui_preferences.start_view = StartView::Dashboard;
            if let Some(range) = dashboard_args.range {
                config.dashboard.default_range = range;
            }
            launch(config)
        }
        Some(Commands::Tui) | None => launch(config),
    };

    // Ensure terminal is cleaned up on any error
    if interactive && result.is_err() {
        cleanup_terminal();
    }

    result
}

fn launch(config: AppConfig) -> Result<()> {
    let mut layout = LayoutComponent::new(config.integration.api_base_url.clone());
    let mut app = App::new(config);

    run_tui(&mut app, &mut layout)?;

    if let Some(summary) = &app.state.completed {
        println!(
            "Signed up via {:?}: {} messages/month at ${}/month ({} requests/minute)",
            summary.method,
            group_thousands(summary.messages),
            group_thousands(summary.price),
            summary.rate_limit_per_minute
        );
    }
    Ok(())
}

fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    // Check if we have a proper TTY
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try `botdesk quote` or `botdesk usage` for non-interactive output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Ensure terminal cleanup happens even if there's an error
    let result = run_tui_loop(app, layout, &mut terminal);

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

fn run_tui_loop(
    app: &mut App,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    tracing::info!(view = ?app.state.current_view, "TUI started");

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let app_event = match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    EventHandler::handle_key_event(key_event, &app.state)
                }
                Event::Paste(text) => EventHandler::handle_paste(text, &app.state),
                _ => None,
            };

            if let Some(app_event) = app_event {
                tracing::debug!(event = ?app_event, "Processing event");
                EventHandler::process_event(app_event, &mut app.state);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.state.should_quit {
            break;
        }
    }

    tracing::info!("TUI exited");
    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    // Logs go to a file; the TUI owns stdout
    let Ok(log_dir) = AppConfig::base_dir().map(|base| base.join("logs")) else {
        return;
    };
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    // Create JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "botdesk-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "botdesk=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
