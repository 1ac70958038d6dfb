//! Rentable items and their genre tags.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::display::bracketed;
use crate::error::ShelfError;

/// Number of items constructed during this process
static CREATED: AtomicUsize = AtomicUsize::new(0);

/// Genre tag for a rentable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    ScienceFiction,
    Thriller,
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Genre::Action => write!(f, "Action"),
            Genre::Comedy => write!(f, "Comedy"),
            Genre::Drama => write!(f, "Drama"),
            Genre::ScienceFiction => write!(f, "Science Fiction"),
            Genre::Thriller => write!(f, "Thriller"),
        }
    }
}

impl std::str::FromStr for Genre {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "action" => Ok(Genre::Action),
            "comedy" => Ok(Genre::Comedy),
            "drama" => Ok(Genre::Drama),
            "science fiction" | "scifi" | "sci-fi" => Ok(Genre::ScienceFiction),
            "thriller" => Ok(Genre::Thriller),
            _ => Err(ShelfError::malformed("genre", format!("unknown genre: {}", s))),
        }
    }
}

/// Availability state of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Available,
    CheckedOut,
}

/// A rentable unit (one physical disc)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    title: String,
    release_year: i32,
    genres: Vec<Genre>,
    available: bool,
}

impl Item {
    /// Create a new, available item
    pub fn new(title: impl Into<String>, release_year: i32, genres: &[Genre]) -> Self {
        CREATED.fetch_add(1, Ordering::Relaxed);

        // Genre tags form a set; keep first occurrence order.
        let mut unique = Vec::with_capacity(genres.len());
        for genre in genres {
            if !unique.contains(genre) {
                unique.push(*genre);
            }
        }

        Self {
            title: title.into(),
            release_year,
            genres: unique,
            available: true,
        }
    }

    /// Total items created so far in this process
    pub fn created_count() -> usize {
        CREATED.load(Ordering::Relaxed)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn state(&self) -> ItemState {
        if self.available {
            ItemState::Available
        } else {
            ItemState::CheckedOut
        }
    }

    /// Flip to checked out. Returns false if already out.
    pub(crate) fn take(&mut self) -> bool {
        if self.available {
            self.available = false;
            true
        } else {
            false
        }
    }

    pub(crate) fn restore(&mut self) {
        self.available = true;
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) {}",
            self.title,
            self.release_year,
            bracketed(&self.genres)
        )
    }
}
