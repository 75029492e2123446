//! keycalc: button- and keyboard-driven calculator
//!
//! ## Usage
//!
//! ```bash
//! keycalc run                    # Interactive terminal calculator
//! keycalc eval 12+30 Enter       # Replay key presses, print the display
//! keycalc eval 2*3= --json       # Same, as a JSON snapshot
//! keycalc config                 # Print the effective configuration
//! ```

use std::io;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keycalc::cli::{run_config, run_eval, Cli, Commands};
use keycalc::telemetry::{init_file_tracing, init_stderr_tracing};
use keycalc::tui::{keypad_area, render, CalculatorApp};
use keycalc::{CalcConfig, CalcResult};
use ratatui::layout::Rect;
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CalcResult<()> {
    let cli = Cli::parse();
    let verbosity = cli.verbosity();

    // The terminal UI owns stderr, so it only logs to a file
    match (&cli.log_file, &cli.command) {
        (Some(path), _) => init_file_tracing(verbosity, path)?,
        (None, Commands::Run) => {}
        (None, _) => {
            if !init_stderr_tracing(verbosity) {
                debug!("tracing subscriber already installed");
            }
        }
    }

    let config = CalcConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Run => run_terminal(&config),
        Commands::Eval(args) => {
            println!("{}", run_eval(&config, &args)?);
            Ok(())
        }
        Commands::Config => {
            print!("{}", run_config(&config)?);
            Ok(())
        }
    }
}

fn run_terminal(config: &CalcConfig) -> CalcResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    info!("terminal calculator started");
    let result = run_app(&mut terminal, config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    info!("terminal calculator stopped");

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, config: &CalcConfig) -> CalcResult<()> {
    let mut app = CalculatorApp::new(config);
    let tick_rate = config.tick_rate();

    while !app.should_quit() {
        terminal.draw(|f| render(&app, f))?;

        if event::poll(tick_rate)? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key, now),
                Event::Mouse(mouse) => {
                    let area = keypad_area(screen_area(terminal)?);
                    app.handle_mouse(mouse, area, now);
                }
                _ => {}
            }
        }
        app.tick(Instant::now());
    }

    Ok(())
}

/// Full-screen rectangle of the terminal, origin at the top-left cell
fn screen_area<B: Backend>(terminal: &Terminal<B>) -> CalcResult<Rect> {
    let size = terminal.size()?;
    Ok(Rect::new(0, 0, size.width, size.height))
}
