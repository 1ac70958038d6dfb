//! Media works: songs (audio) and movies/series (audio-visual).

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use super::record::{extract, Field, RecordFields};
use crate::display::{join, or_unknown, UNKNOWN};

/// Something that can produce a promotional blurb
pub trait Advertise {
    fn advertise(&self) -> String;
}

/// Fields every work carries
#[derive(Debug, Clone, PartialEq)]
pub struct WorkInfo {
    title: Option<String>,
    genres: Option<Vec<String>>,
    released: Option<NaiveDate>,
}

impl WorkInfo {
    fn from_fields(fields: &RecordFields) -> Self {
        Self {
            title: fields.title.clone(),
            genres: fields.genres.clone(),
            released: fields.date,
        }
    }

    /// Title and genre segments for the fields that are present
    fn segments(&self, title_marker: &str, genre_marker: &str, sep: &str) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(title) = &self.title {
            parts.push(format!("{}: {}", title_marker, title));
        }
        if let Some(genres) = &self.genres {
            parts.push(format!("{}: {}", genre_marker, join(genres, sep)));
        }
        parts
    }

    fn missing(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.title.is_none() {
            missing.push(Field::Title);
        }
        if self.genres.is_none() {
            missing.push(Field::Genres);
        }
        if self.released.is_none() {
            missing.push(Field::Date);
        }
        missing
    }
}

/// A song
#[derive(Debug, Clone, PartialEq)]
pub struct AudioWork {
    info: WorkInfo,
    performer: Option<String>,
}

impl AudioWork {
    pub fn performer(&self) -> Option<&str> {
        self.performer.as_deref()
    }
}

impl Advertise for AudioWork {
    fn advertise(&self) -> String {
        format!(
            "Listen to \"{}\" by {}, released {}. Genre: {}.",
            or_unknown(self.info.title.as_deref()),
            or_unknown(self.performer.as_deref()),
            render_date(self.info.released),
            render_genres(&self.info.genres, ", "),
        )
    }
}

/// Absent title, genres and performer are left out so that re-parsing
/// reports them missing again. An absent date renders as `Date: Unknown`.
impl std::fmt::Display for AudioWork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = self.info.segments("Music", "Genre", "/");
        let mut date = format!("Date: {}", render_date(self.info.released));
        if let Some(performer) = &self.performer {
            date.push_str(&format!(" - {}", performer));
        }
        parts.push(date);
        write!(f, "{}", parts.join("; "))
    }
}

/// A movie or series
#[derive(Debug, Clone, PartialEq)]
pub struct AudioVisualWork {
    info: WorkInfo,
    category: String,
    rating: f32,
}

impl AudioVisualWork {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }
}

impl Advertise for AudioVisualWork {
    fn advertise(&self) -> String {
        let year = self
            .info
            .released
            .map(|d| d.year().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());

        format!(
            "Now streaming the {} \"{}\" ({}), rated {:.1}/10. Genre(s): {}.",
            self.category,
            or_unknown(self.info.title.as_deref()),
            year,
            self.rating,
            render_genres(&self.info.genres, ", "),
        )
    }
}

impl std::fmt::Display for AudioVisualWork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = self.info.segments("Title", "Genre(s)", ", ");
        parts.push(format!("Date: {}", render_date(self.info.released)));
        parts.push(format!("Category: {}", self.category));
        parts.push(format!("Rating: {:.1}", self.rating));
        write!(f, "{}", parts.join("; "))
    }
}

/// A parsed media record
#[derive(Debug, Clone, PartialEq)]
pub enum MediaWork {
    Audio(AudioWork),
    AudioVisual(AudioVisualWork),
}

impl MediaWork {
    /// Parse a music record: `Music: <title>; Genre: <a>/<b>; Date: Y M D - <performer>`
    pub fn parse_audio(record: &str) -> Self {
        let fields = extract(record, '/');
        let work = AudioWork {
            info: WorkInfo::from_fields(&fields),
            performer: fields.performer.clone(),
        };
        let work = MediaWork::Audio(work);
        work.report_missing(record);
        work
    }

    /// Parse a movie/series record: `Title: <title>; Genre(s): <a>, <b>; Date: Y M D`
    pub fn parse_audio_visual(record: &str, category: impl Into<String>, rating: f32) -> Self {
        let fields = extract(record, ',');
        let work = MediaWork::AudioVisual(AudioVisualWork {
            info: WorkInfo::from_fields(&fields),
            category: category.into(),
            rating,
        });
        work.report_missing(record);
        work
    }

    fn report_missing(&self, record: &str) {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            warn!(
                record,
                missing = %join(&missing, ", "),
                "Record is missing fields"
            );
        }
    }

    fn info(&self) -> &WorkInfo {
        match self {
            MediaWork::Audio(w) => &w.info,
            MediaWork::AudioVisual(w) => &w.info,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.info().title.as_deref()
    }

    /// Genres in record order. Empty when the record had none.
    pub fn genres(&self) -> &[String] {
        self.info().genres.as_deref().unwrap_or(&[])
    }

    pub fn released(&self) -> Option<NaiveDate> {
        self.info().released
    }

    /// Fields that were absent or unparseable in the source record
    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = self.info().missing();
        if let MediaWork::Audio(w) = self {
            if w.performer.is_none() {
                missing.push(Field::Performer);
            }
        }
        missing
    }

    /// Canonical text rendering, in the same marker syntax the parsers read
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Short label for the variant
    pub fn kind(&self) -> &'static str {
        match self {
            MediaWork::Audio(_) => "audio",
            MediaWork::AudioVisual(_) => "audio-visual",
        }
    }
}

impl Advertise for MediaWork {
    fn advertise(&self) -> String {
        match self {
            MediaWork::Audio(w) => w.advertise(),
            MediaWork::AudioVisual(w) => w.advertise(),
        }
    }
}

impl std::fmt::Display for MediaWork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaWork::Audio(w) => std::fmt::Display::fmt(w, f),
            MediaWork::AudioVisual(w) => std::fmt::Display::fmt(w, f),
        }
    }
}

fn render_date(date: Option<NaiveDate>) -> String {
    date.map(|d| format!("{} {} {}", d.year(), d.month(), d.day()))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn render_genres(genres: &Option<Vec<String>>, sep: &str) -> String {
    match genres {
        Some(genres) => join(genres, sep),
        None => UNKNOWN.to_string(),
    }
}
