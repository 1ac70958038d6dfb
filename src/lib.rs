//! mediashelf - In-memory rental catalog and media provider directory
//!
//! Two independent domains that share only helpers:
//!
//! - A rental store where items move between available and checked out
//! - A directory of streaming providers exposing songs, movies and series
//!   parsed from semi-structured text records
//!
//! # Modules
//!
//! - `rental`: Items, genres and the checkout/return catalog
//! - `media`: Record parsing and the audio / audio-visual work types
//! - `provider`: Provider records, simulated status, service rendering
//! - `directory`: Lookup across registered services
//! - `samples`: Built-in sample data
//! - `config` / `logging`: Configuration file and tracing setup
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Rent a title twice, then return it
//! mediashelf rent Parasite Parasite --return Parasite
//!
//! # Provider status with a fixed seed
//! mediashelf status WizardTV --seed 7
//! ```

pub mod cli;
pub mod config;
pub mod directory;
pub mod display;
pub mod error;
pub mod logging;
pub mod media;
pub mod provider;
pub mod rental;
pub mod samples;

// Re-export main types at crate root for convenience
pub use directory::Directory;
pub use error::{Action, ShelfError};
pub use media::{Advertise, AudioVisualWork, AudioWork, Field, MediaWork};
pub use provider::{ContentMap, Device, Provider, Resolution, Service, Status};
pub use rental::{Catalog, Genre, Item, ItemId, ItemState};
