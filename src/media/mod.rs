//! Media directory content: songs, movies and series parsed from text records.

pub mod record;
pub mod work;

pub use record::Field;
pub use work::{Advertise, AudioVisualWork, AudioWork, MediaWork};
