//! # Satchel Main Entry Point
//!
//! Loads an item record file, fills a player inventory, and prints the
//! processing log followed by the storage summary.

use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use satchel::{storage, Inventory, SatchelResult};
use std::path::PathBuf;
use std::process;

/// Command line arguments for the satchel driver.
#[derive(Parser, Debug)]
#[command(name = "satchel")]
#[command(about = "Loads item records into a bounded player inventory")]
#[command(version)]
struct Args {
    /// Path to the item record file, one record per line
    items_file: PathBuf,

    /// Requested inventory size; unusable values fall back to the default
    size: Option<String>,

    /// Maximum items one stack may hold
    #[arg(long)]
    stack_capacity: Option<u32>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str()))
        .init();

    info!("Starting satchel v{}", satchel::VERSION);

    if let Err(e) = run(&args) {
        debug!("driver failed: {}", e);
        eprintln!(
            "Error: {} could not be opened or read",
            args.items_file.display()
        );
        process::exit(3);
    }
}

/// Loads the records, offers them to the inventory, and prints the report.
fn run(args: &Args) -> SatchelResult<()> {
    let items = storage::read_items_from_path(&args.items_file)?;
    info!("Loaded {} item records", items.len());

    let size = requested_size(args.size.as_deref());
    let mut inventory = Inventory::with_stack_capacity(size, args.stack_capacity.unwrap_or(0));
    let placements = storage::store_items(&mut inventory, items);

    println!("Processing Log:");
    for placement in &placements {
        println!("{}", placement);
    }
    println!();
    println!("Player Storage Summary:");
    print!("{}", inventory);

    Ok(())
}

/// Parses the requested inventory size, returning 0 when the argument is
/// absent, not a number, or below 1 so the inventory falls back to its
/// default.
fn requested_size(raw: Option<&str>) -> usize {
    if let Some(raw) = raw {
        match raw.parse::<i32>() {
            Ok(size) if size >= 1 => size as usize,
            _ => {
                debug!("Requested inventory size '{}' is unusable, using the default", raw);
                0
            }
        }
    } else {
        0
    }
}
