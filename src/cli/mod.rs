//! Command-line interface for mediashelf.
//!
//! Every command works on the built-in sample data; nothing is persisted
//! between invocations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{self, ResolvedConfig};
use crate::directory::Directory;
use crate::display::{join, or_unknown};
use crate::error::ShelfError;
use crate::media::{Advertise, MediaWork};
use crate::provider::{Device, Service};
use crate::rental::{Catalog, Item};
use crate::samples;

/// mediashelf - rental catalog and media provider directory
#[derive(Parser, Debug)]
#[command(name = "mediashelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for simulated provider status (overrides config)
    #[arg(long, global = true, env = "MEDIASHELF_SEED")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every item in the rental store
    Store,

    /// Check out titles from the rental store, in order
    Rent {
        /// Titles to check out (repeat a title to see the second attempt fail)
        #[arg(required = true)]
        titles: Vec<String>,

        /// Titles to return afterwards
        #[arg(short, long = "return")]
        returns: Vec<String>,
    },

    /// Walk through a scripted rent/return session
    Demo,

    /// List media works, optionally for one category
    Catalog {
        /// Category name (movies, series, musics)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List streaming providers
    Providers {
        /// Only providers that stream to this device
        #[arg(short, long, value_enum)]
        device: Option<DeviceArg>,
    },

    /// Show the simulated status of a provider
    Status {
        /// Provider name
        name: String,
    },

    /// Print the promotional blurb for a work
    Advertise {
        /// Exact title
        title: String,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Device for CLI (maps to Device)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DeviceArg {
    Phone,
    Tablet,
    Tv,
    Pc,
}

impl From<DeviceArg> for Device {
    fn from(d: DeviceArg) -> Self {
        match d {
            DeviceArg::Phone => Device::Phone,
            DeviceArg::Tablet => Device::Tablet,
            DeviceArg::Tv => Device::Tv,
            DeviceArg::Pc => Device::Pc,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let cfg = config::config()?;
        let seed = self.seed.unwrap_or(cfg.seed);

        match self.command {
            Commands::Store => list_store(),
            Commands::Rent { titles, returns } => rent_titles(&titles, &returns),
            Commands::Demo => run_demo(),
            Commands::Catalog { category } => list_catalog(category.as_deref(), seed),
            Commands::Providers { device } => list_providers(device.map(Device::from), seed),
            Commands::Status { name } => show_status(&name, seed),
            Commands::Advertise { title } => advertise(&title, seed),
            Commands::Config => show_config(cfg, seed),
        }
    }
}

fn directory(seed: u64) -> Directory {
    samples::directory(&mut ChaCha8Rng::seed_from_u64(seed))
}

/// List the rental store
fn list_store() -> Result<()> {
    let catalog = samples::catalog();

    println!("{:<5} {:<12} {}", "ID", "STATE", "ITEM");
    println!("{}", "-".repeat(60));
    for (id, item) in catalog.iter() {
        println!("{:<5} {:<12} {}", id.to_string(), state_label(item), item);
    }
    println!("\nTotal: {} items", catalog.len());

    Ok(())
}

fn state_label(item: &Item) -> &'static str {
    if item.is_available() {
        "available"
    } else {
        "rented"
    }
}

/// Print the outcome of a checkout or return
fn report(result: Result<&Item, ShelfError>, done: &str) {
    match result {
        Ok(item) => println!("{} has been successfully {}.", item.title(), done),
        Err(e) => println!("{}", e),
    }
}

fn rent_by_title(catalog: &mut Catalog, title: &str) {
    match catalog.find_by_title(title) {
        Some(id) => report(catalog.checkout(id), "rented"),
        None => println!("{}", ShelfError::not_found(title)),
    }
}

fn return_by_title(catalog: &mut Catalog, title: &str) {
    match catalog.find_checked_out(title) {
        Some(id) => report(catalog.return_item(id), "returned"),
        None => match catalog.find_by_title(title) {
            Some(id) => report(catalog.return_item(id), "returned"),
            None => println!("{}", ShelfError::not_found(title)),
        },
    }
}

fn print_checked_out(catalog: &Catalog) {
    let rented = catalog.list_checked_out();
    if rented.is_empty() {
        println!("Nothing is rented.");
    }
    for item in rented {
        println!("  {}", item);
    }
}

/// Check out the given titles, then return some
fn rent_titles(titles: &[String], returns: &[String]) -> Result<()> {
    let mut catalog = samples::catalog();

    for title in titles {
        rent_by_title(&mut catalog, title);
    }
    for title in returns {
        return_by_title(&mut catalog, title);
    }

    println!("\nCurrently rented:");
    print_checked_out(&catalog);

    Ok(())
}

/// Scripted session over the sample store
fn run_demo() -> Result<()> {
    let mut catalog = samples::catalog();

    println!("-- store --");
    println!("{}", catalog);

    println!("\n-- rent Parasite --");
    rent_by_title(&mut catalog, "Parasite");

    println!("\n-- rent Parasite again --");
    rent_by_title(&mut catalog, "Parasite");

    println!("\n-- rent Interstellar --");
    rent_by_title(&mut catalog, "Interstellar");

    println!("\n-- rented --");
    print_checked_out(&catalog);

    println!("\n-- return Interstellar --");
    return_by_title(&mut catalog, "Interstellar");

    println!("\n-- return Inception (never rented) --");
    return_by_title(&mut catalog, "Inception");

    println!("\n-- rented --");
    print_checked_out(&catalog);

    println!("\n-- items created --");
    println!("{}", Item::created_count());

    Ok(())
}

/// List media works by category
fn list_catalog(category: Option<&str>, seed: u64) -> Result<()> {
    let directory = directory(seed);
    let content = directory.content();

    let categories: Vec<&str> = match category {
        Some(name) => {
            if !content.contains_key(name) {
                anyhow::bail!(
                    "Unknown category '{}'. Available: {}",
                    name,
                    join(content.keys(), ", ")
                );
            }
            vec![name]
        }
        None => content.keys().map(String::as_str).collect(),
    };

    for name in categories {
        println!("== {} ==", name);
        for work in content.get(name).into_iter().flatten() {
            print_work(work);
        }
        println!();
    }

    Ok(())
}

fn print_work(work: &MediaWork) {
    let title = or_unknown(work.title());
    let date = or_unknown(work.released());
    match work {
        MediaWork::Audio(song) => println!(
            "  {:<32} {:<12} {}",
            title,
            date,
            or_unknown(song.performer())
        ),
        MediaWork::AudioVisual(video) => println!(
            "  {:<32} {:<12} {:.1}  {}",
            title,
            date,
            video.rating(),
            join(work.genres(), ", ")
        ),
    }
}

/// List providers, optionally filtered by device
fn list_providers(device: Option<Device>, seed: u64) -> Result<()> {
    let directory = directory(seed);

    let services: Vec<&dyn Service> = match device {
        Some(device) => directory.supporting(device),
        None => directory.services().collect(),
    };

    if services.is_empty() {
        println!("No providers found");
        return Ok(());
    }

    println!(
        "{:<16} {:<5} {:<16} {:>8} {:<8}",
        "NAME", "RES", "DEVICES", "FEE", "OFFLINE"
    );
    println!("{}", "-".repeat(60));
    for service in services {
        let p = service.provider();
        println!(
            "{:<16} {:<5} {:<16} {:>8.2} {:<8}",
            p.name(),
            p.resolution().to_string(),
            join(p.devices(), ","),
            p.fee(),
            if p.offline() { "yes" } else { "no" }
        );
    }

    Ok(())
}

/// Show one provider's status line
fn show_status(name: &str, seed: u64) -> Result<()> {
    let directory = directory(seed);
    let service = directory
        .find(name)
        .with_context(|| format!("Provider not found: {}", name))?;

    println!("{}", service.render_status());
    Ok(())
}

/// Print the advertisement for a work
fn advertise(title: &str, seed: u64) -> Result<()> {
    let directory = directory(seed);
    let work = directory
        .find_work(title)
        .with_context(|| format!("Work not found: {}", title))?;

    println!("{}", work.advertise());
    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config(cfg: &ResolvedConfig, seed: u64) -> Result<()> {
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Logging:");
    println!("  Console level: {}", cfg.logging.console_level);
    println!("  File level:    {}", cfg.logging.file_level);
    println!("  Directory:     {}", cfg.logging.dir.display());
    println!("  File prefix:   {}", cfg.logging.file_prefix);
    if cfg.logging.loggers.is_empty() {
        println!("  Loggers:       (none)");
    } else {
        println!("  Loggers:");
        for (target, level) in &cfg.logging.loggers {
            println!("    {}: {}", target, level);
        }
    }
    println!();
    println!("Status seed: {}", seed);

    Ok(())
}
