//! Marquee Console Entry Point
//!
//! Usage:
//!   marquee-console [OPTIONS]
//!
//! Options:
//!   --config <FILE>      Configuration file (default: ~/.config/marquee-console/config.toml)
//!   --text <TEXT>        Initial marquee text
//!   --speed <MS>         Initial scroll speed in milliseconds per step
//!   --data-dir <DIR>     Directory holding `frames/` and `glyphs/`
//!   --ascii-art          Start with the ASCII-art banner
//!   --log-file <FILE>    Write logs here (the screen is owned by the UI)

use std::fs::File;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_core::{load_config_from_path, ConfigOverrides, MarqueeConfig};
use marquee_tui::App;

/// Marquee Console - scrolling banner, frame animation and a command prompt
#[derive(Parser, Debug)]
#[command(name = "marquee-console")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, env = "MARQUEE_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initial marquee text
    #[arg(short = 't', long, value_name = "TEXT")]
    text: Option<String>,

    /// Scroll speed in milliseconds per step
    #[arg(short = 's', long, value_name = "MS")]
    speed: Option<u64>,

    /// Data directory containing frames/ and glyphs/
    #[arg(short = 'd', long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Start with the ASCII-art banner
    #[arg(short = 'a', long)]
    ascii_art: bool,

    /// Log file path
    #[arg(short = 'l', long, env = "MARQUEE_LOG_FILE", value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::new();
        if let Some(text) = &self.text {
            overrides = overrides.with_text(text.clone());
        }
        if let Some(ms) = self.speed {
            overrides = overrides.with_speed_ms(ms);
        }
        if let Some(dir) = &self.data_dir {
            overrides = overrides.with_data_dir(dir.clone());
        }
        if self.ascii_art {
            overrides = overrides.with_ascii_art(true);
        }
        overrides
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.log_file.as_ref())?;

    let config = match load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };
    tracing::info!(source = %config.source(), "Configuration loaded");

    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: marquee-console requires a terminal (TTY)");
        eprintln!();
        eprintln!("Run it interactively, or over SSH with the -t flag.");
        std::process::exit(1);
    }

    // Restore the terminal before the panic message is printed
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn load(args: &Args) -> anyhow::Result<MarqueeConfig> {
    let mut config = load_config_from_path(args.config.clone())?;
    args.overrides().apply(&mut config)?;
    Ok(config)
}

/// Logs go to a file or nowhere; stderr would tear the alternate screen
fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let writer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::sink),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &MarqueeConfig,
) -> anyhow::Result<()> {
    let size = terminal.size()?;
    let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
    let mut app = App::new(config, area);
    app.run(terminal).await?;
    tracing::info!("Console closed");
    Ok(())
}
