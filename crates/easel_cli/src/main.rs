//! Easel CLI
//!
//! Replay recorded native event traces through a headless area and inspect
//! how native input is decoded.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod echo;

use config::EaselConfig;
use easel_area::{decode, keycode, AreaRegistry, NativeHandle};
use easel_platform::MouseButton;
use easel_platform_headless::{headless_area, parse_trace, replay};

#[derive(Parser)]
#[command(name = "easel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Easel area input and layout tooling", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON-lines native event trace and print delivered events
    Replay {
        /// Trace file
        trace: PathBuf,

        /// Configuration file
        #[arg(short, long, default_value = "easel.toml")]
        config: PathBuf,

        /// Save the final area contents as a PNG
        #[arg(long)]
        png: Option<PathBuf>,
    },

    /// List the keycode tables
    Keys,

    /// Decode a native pressed-buttons mask
    Buttons {
        /// Bitmask as reported by the platform (decimal or 0x/0b prefixed)
        mask: String,

        /// Canonical index of the acting button, excluded from the result
        #[arg(short, long)]
        acting: Option<u32>,
    },

    /// Write a default easel.toml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Replay { trace, config, png } => cmd_replay(&trace, &config, png.as_deref()),
        Commands::Keys => cmd_keys(),
        Commands::Buttons { mask, acting } => cmd_buttons(&mask, acting),
        Commands::Init => cmd_init(),
    }
}

const REPLAY_HANDLE: NativeHandle = NativeHandle(1);

fn cmd_replay(trace: &Path, config: &Path, png: Option<&Path>) -> Result<()> {
    let config = EaselConfig::load(config)?;
    let text = fs::read_to_string(trace)
        .with_context(|| format!("Failed to read {}", trace.display()))?;
    let messages =
        parse_trace(&text).with_context(|| format!("Failed to parse {}", trace.display()))?;

    info!(
        "Replaying {} messages against {}x{} area '{}'",
        messages.len(),
        config.area.width,
        config.area.height,
        config.area.name
    );

    let handler = echo::EchoHandler::new(config.replay.fill, config.replay.pretty);
    let (area, view, _scroll) =
        headless_area(config.area_config(), Box::new(handler), REPLAY_HANDLE)?;
    let mut registry = AreaRegistry::new();
    registry.insert(area)?;

    let stats = replay(&mut registry, REPLAY_HANDLE, &messages)?;
    info!("{} delivered, {} dropped", stats.dispatched, stats.dropped);

    if let Some(out) = png {
        view.snapshot()
            .save(out)
            .with_context(|| format!("Failed to write {}", out.display()))?;
        info!("Area contents written to {}", out.display());
    }

    Ok(())
}

fn cmd_keys() -> Result<()> {
    println!("Keys:");
    for (code, key) in keycode::keys() {
        println!("  0x{:02X}  {:?}", code, key);
    }
    println!();
    println!("Modifiers:");
    for (code, modifier) in keycode::modifier_keys() {
        println!("  0x{:02X}  {:?}", code, modifier);
    }
    Ok(())
}

fn cmd_buttons(mask: &str, acting: Option<u32>) -> Result<()> {
    let mask = parse_mask(mask)?;
    let acting = match acting {
        Some(index) => Some(
            MouseButton::new(index)
                .with_context(|| format!("Invalid button index {index}; buttons start at 1"))?,
        ),
        None => None,
    };
    let held = decode::held_buttons(mask, acting);
    let indices: Vec<u32> = held.iter().map(|b| b.index()).collect();
    println!("{}", serde_json::to_string(&indices)?);
    Ok(())
}

fn parse_mask(mask: &str) -> Result<u64> {
    let parsed = if let Some(hex) = mask.strip_prefix("0x") {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = mask.strip_prefix("0b") {
        u64::from_str_radix(bin, 2)
    } else {
        mask.parse()
    };
    parsed.with_context(|| format!("Invalid button mask '{mask}'"))
}

fn cmd_init() -> Result<()> {
    let path = Path::new("easel.toml");
    if path.exists() {
        anyhow::bail!("easel.toml already exists");
    }
    EaselConfig::default().save(path)?;
    info!("Created easel.toml");
    Ok(())
}
