//! `endless`: the Endless text game and the Alice in Antioch demo.

mod config;
mod console;
mod menu;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use antioch_sim::Simulation;
use clap::{Parser, Subcommand};
use dialogue_core::Transcript;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::EndlessConfig;
use crate::console::StdioConsole;

#[derive(Debug, Parser)]
#[command(
    name = "endless",
    about = "A minimal, single-player take on Waving Hands, played through a familiar.",
    disable_help_subcommand = true
)]
struct Cli {
    /// Path to an endless.toml file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the transcript of played games to this file as JSON.
    #[arg(long)]
    transcript: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Title screen and main menu (the default).
    Menu,
    /// Skip the menu and start a game.
    Play,
    /// Print what Endless is.
    Help,
    /// Watch Alice plan her way to Antioch.
    Alice {
        #[arg(long)]
        steps: Option<usize>,

        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = EndlessConfig::load(cli.config.as_deref()).context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();
    info!(command = ?cli.command, "endless starting");

    let mut console = StdioConsole;
    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let transcripts =
                menu::main_menu(&mut console, &config.game).context("running the main menu")?;
            if let Some(path) = &cli.transcript {
                write_transcripts(path, &transcripts)?;
            }
        }
        Command::Play => {
            let (_, transcript) =
                menu::play_game(&mut console, &config.game).context("playing the game")?;
            if let Some(path) = &cli.transcript {
                write_transcripts(path, &[transcript])?;
            }
        }
        Command::Help => menu::show_help(&mut console),
        Command::Alice { steps, seed } => {
            let mut search = config.alice.clone();
            if let Some(seed) = seed {
                search.seed = seed;
            }
            let steps = steps.unwrap_or(search.steps);

            let mut sim = Simulation::alice_in_antioch(search)
                .context("setting up Alice in Antioch")?;
            for _ in 0..steps {
                for line in sim.tick().context("simulating a tick")? {
                    println!("{}", line);
                }
            }
        }
    }
    Ok(())
}

/// The `--transcript` file body: a JSON array with one object per game.
fn transcripts_json(transcripts: &[Transcript]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(transcripts)
}

fn write_transcripts(path: &Path, transcripts: &[Transcript]) -> Result<()> {
    let json = transcripts_json(transcripts).context("serializing transcript")?;
    std::fs::write(path, json)
        .with_context(|| format!("writing transcript to {}", path.display()))?;
    info!(path = %path.display(), games = transcripts.len(), "transcript written");
    Ok(())
}
