//! paneterm - terminal pane layout engine, headless driver
//!
//! Reads one command per line from stdin and prints the layout after each
//! change. Tab lifecycle notifications are echoed where a real front end
//! would spawn or kill shells.

mod driver;

use anyhow::{bail, Context, Result};
use driver::{Driver, Outcome};
use once_cell::sync::Lazy;
use pane_layout::{SessionId, Tab, TabId};
use paneterm_workspace::TerminalTransport;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info};

/// Application startup time for performance monitoring
static STARTUP_TIME: Lazy<Instant> = Lazy::new(Instant::now);

/// Transport that prints each tab it is told about.
struct EchoTransport;

impl TerminalTransport for EchoTransport {
    fn open_tab(&mut self, _session: SessionId, tab: &Tab) {
        println!(
            "+ tab {} \"{}\" ({})",
            tab.id.short(),
            tab.name,
            tab.shell.as_str()
        );
    }

    fn close_tab(&mut self, _session: SessionId, tab: TabId) {
        println!("- tab {}", tab.short());
    }
}

/// Command-line flags. Only `--config-dir <path>` is understood.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>> {
    let mut config_dir = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config-dir" => {
                let dir = args.next().context("--config-dir needs a path")?;
                config_dir = Some(PathBuf::from(dir));
            }
            "--version" | "-V" => {
                println!("paneterm {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            other => bail!("unknown argument {other:?}"),
        }
    }
    Ok(config_dir)
}

/// Initialize the config directory, honouring an explicit override.
fn init_paths(config_dir: Option<PathBuf>) -> Result<()> {
    if let Some(dir) = config_dir {
        if !paneterm_paths::set_config_dir(dir) {
            debug!("Config directory already resolved, ignoring --config-dir");
        }
    }
    let config_dir = paneterm_paths::config_dir();
    std::fs::create_dir_all(config_dir)
        .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;

    debug!("Initialized paths - config: {:?}", config_dir);
    Ok(())
}

/// Check if debug mode is enabled via environment variable.
fn is_debug_mode() -> bool {
    std::env::var("PANETERM_DEBUG").is_ok()
}

/// Initialize the logging system. Logs go to stderr; stdout carries the
/// driver's output.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_filter = if is_debug_mode() {
        "paneterm=trace,paneterm_workspace=trace,pane_layout=trace,info"
    } else {
        "paneterm=info,warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();

    if is_debug_mode() {
        info!(
            "paneterm v{} starting up (DEBUG MODE ENABLED)",
            env!("CARGO_PKG_VERSION")
        );
        info!("Set RUST_LOG for custom log levels, e.g. RUST_LOG=pane_layout=trace");
    } else {
        info!("paneterm v{} starting up", env!("CARGO_PKG_VERSION"));
    }
}

fn run() -> Result<()> {
    let config_dir = parse_args(std::env::args().skip(1))?;
    if let Err(e) = init_paths(config_dir) {
        error!("Failed to initialize paths: {:#}", e);
    }

    settings::ensure_config_file();
    let config = settings::load_config();
    let mut driver = Driver::new(&config, Box::new(EchoTransport));
    info!("Ready in {:?}", STARTUP_TIME.elapsed());

    let mut out = std::io::stdout();
    driver.show(&mut out)?;

    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        match driver.run_line(&line, &mut out) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Continue) => {}
            Err(e) => writeln!(out, "error: {:#}", e)?,
        }
        out.flush()?;
    }

    if let Ok(tree) = driver.workspace().tree(driver.session()) {
        debug!("Final layout:\n{}", tree);
    }
    info!("Session ended after {:?}", STARTUP_TIME.elapsed());
    Ok(())
}

fn main() {
    let _ = *STARTUP_TIME;

    init_logging();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
