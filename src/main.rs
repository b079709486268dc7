use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;

use hovertip::app::App;
use hovertip::cli::{Cli, Command};
use hovertip::config::{self, Config};
use hovertip::geometry;

/// Poll interval; also the tick rate driving the hide debounce and fade
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Place(args)) => {
            let request = args.request(&Config::default().geometry);
            println!("{}", geometry::place(&request));
            Ok(())
        }
        Some(Command::Demo { config }) => run_demo(load_demo_config(config.as_deref())?),
        None => run_demo(load_demo_config(None)?),
    }
}

/// Explicit path must load; otherwise the user config if one exists,
/// falling back to terminal-cell defaults
fn load_demo_config(path: Option<&std::path::Path>) -> Result<Config> {
    if let Some(path) = path {
        return Ok(config::load_config_from_path(path)?);
    }

    let exists = config::config_path().is_some_and(|p| p.exists());
    if exists {
        let result = config::load_config();
        match result.warning {
            Some(warning) => {
                eprintln!("hovertip: {}", warning);
                Ok(Config::terminal())
            }
            None => Ok(result.config),
        }
    } else {
        Ok(Config::terminal())
    }
}

fn run_demo(config: Config) -> Result<()> {
    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, &config);

    // Restore terminal (automatic cleanup)
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, config: &Config) -> Result<()> {
    let mut app = App::new(config);

    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(FRAME_INTERVAL)? {
            app.handle_event(event::read()?, Instant::now());
        }
        app.tick(Instant::now());
    }

    Ok(())
}

/// Debug builds log to the cache dir; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::fs::{self, OpenOptions};
    use std::io::Write;

    let Some(dir) = dirs::cache_dir().map(|d| d.join("hovertip")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("hovertip.log"))
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
