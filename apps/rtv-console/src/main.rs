//! # rtv-console
//!
//! Terminal remote control for the RetroVision goal television.
//!
//! Seeds the stock channel lineup, wires up the auto-tuner from the
//! environment (`RTV_API_KEY`), and drops into a readline loop:
//! `power`, `up`/`down`, `sel <id>`, `ch <n>`, `vol <n>`, `mute`,
//! `view <guide|channel|create>`, `tick <delta>`, `add <text>`, `guide`.
//!
//! Cues go to the log by default; `--cue-dir` renders each one as a WAV
//! file instead.

mod repl;
mod screen;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rtv_goal::GoalStore;
use rtv_session::{ConsoleSink, Session, SharedSession, SoundSink};
use rtv_tuner::TunerClient;

/// RetroVision — track goals on a wood-panel television.
#[derive(Parser)]
#[command(name = "rtv", version, about)]
struct Cli {
    /// Render cues as WAV files into this directory instead of logging them.
    #[arg(long)]
    cue_dir: Option<PathBuf>,

    /// Start with the power already on.
    #[arg(long)]
    on: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let sink: Arc<dyn SoundSink> = match &cli.cue_dir {
        Some(dir) => Arc::new(rtv_audio::WavSink::new(dir)?),
        None => Arc::new(ConsoleSink),
    };

    let tuner = TunerClient::from_env()?;
    if tuner.is_configured() {
        tracing::info!("auto-tuner online");
    } else {
        tracing::info!("auto-tuner offline — new goals will file as documentaries");
    }

    let mut session = Session::new(GoalStore::seed_lineup(), sink);
    if cli.on {
        session.toggle_power();
    }
    let session: SharedSession = Arc::new(tokio::sync::Mutex::new(session));

    repl::run(&session, &tuner).await
}
