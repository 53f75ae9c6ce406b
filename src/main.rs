use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use megaraid_probe::{inventory, InventoryDevice, MediaTypeProbe, ProbeConfig};

#[derive(Parser)]
#[command(name = "megaraid-probe")]
#[command(about = "Resolve block-device media types behind MegaRAID controllers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the storcli binary (defaults to the standard install location)
    #[arg(long, global = true)]
    tool_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List block devices with their resolved media type
    List,

    /// Query controllers and print the raw virtual-drive table
    Query,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = match cli.tool_path {
        Some(path) => ProbeConfig::with_tool_path(path),
        None => ProbeConfig::default(),
    };
    let probe = MediaTypeProbe::new(config);

    match cli.command {
        Commands::List => list_devices(&probe),
        Commands::Query => query_controllers(&probe),
    }
}

fn list_devices(probe: &MediaTypeProbe) -> Result<()> {
    let mut devices = inventory::scan()?;

    println!("{:<16} {:<8} BY-ID LINKS", "DEVICE", "MEDIA");
    for device in &mut devices {
        probe.fill(device);

        let link_count = device
            .dev_links()
            .iter()
            .map(|l| l.links.len())
            .sum::<usize>();
        println!(
            "{:<16} {:<8} {}",
            device.dev_path,
            device.drive_type.as_deref().unwrap_or("-"),
            link_count
        );
    }

    Ok(())
}

fn query_controllers(probe: &MediaTypeProbe) -> Result<()> {
    let drives = probe.query_virtual_drives()?;

    if drives.is_empty() {
        println!("No virtual drives reported.");
        return Ok(());
    }

    println!("{:<44} MEDIA", "WWN");
    for vd in &drives {
        println!("{:<44} {}", vd.identifier, vd.media_type);
    }

    Ok(())
}
