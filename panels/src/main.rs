//! Panels - sidebar, menu and modal toggles in the terminal
//!
//! Keys: s = sidebar, m = menu (j/k/enter inside), ? = help, q = quit

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use slice_dispatch::{EventKind, EventPoller};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::prelude::*;

use panels::app::PanelUi;
use panels::containers::Containers;
use panels::store::{configure_store, PanelConfig};

/// Sidebar, menu and modal panels over a slice-dispatch store
#[derive(Parser, Debug)]
#[command(name = "panels")]
struct Args {
    /// Initial sidebar visibility
    #[arg(long)]
    sidebar: Option<bool>,

    /// Initial menu visibility
    #[arg(long)]
    menu: Option<bool>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log every action before dispatch as well as after
    #[arg(long)]
    verbose_log: bool,

    /// Milliseconds between event poll cycles
    #[arg(long, default_value = "16")]
    tick_rate_ms: u64,
}

impl Args {
    fn config(&self) -> PanelConfig {
        PanelConfig {
            sidebar: self.sidebar,
            menu: self.menu,
            verbose_log: self.verbose_log,
        }
    }
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "panels=debug,slice_dispatch_core=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Configuration errors surface before the terminal is taken over
    let store = configure_store(&args.config())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, store, Duration::from_millis(args.tick_rate_ms)).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut store: panels::store::PanelStore,
    tick_rate: Duration,
) -> io::Result<()> {
    let containers = Containers::connect(&mut store);
    let mut ui = PanelUi::new();

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<EventKind>();
    let cancel_token = CancellationToken::new();
    let poller = EventPoller::new(tick_rate).spawn(event_tx, cancel_token.clone());

    info!("Panels started");
    let mut force_render = true;

    loop {
        if containers.take_changed() || force_render {
            terminal.draw(|frame| ui.render(frame, &containers))?;
            force_render = false;
        }

        let Some(event) = event_rx.recv().await else {
            break;
        };
        // Menu highlight lives in the component, not the store
        if matches!(event, EventKind::Key(_) | EventKind::Resize(..)) {
            force_render = true;
        }
        if ui.process(&event, &containers, &mut store).is_break() {
            break;
        }
    }

    cancel_token.cancel();
    let _ = poller.await;
    containers.disconnect(&mut store);
    let stats = store.middleware().inner();
    info!(
        dispatched = stats.dispatched(),
        changed = stats.changed(),
        "Panels stopped"
    );
    Ok(())
}
