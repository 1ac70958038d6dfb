//! Field extraction from semi-structured media records.
//!
//! Records look like
//! `Title: Inception; Genre(s): Action, Science Fiction; Date: 2010 7 16`
//! or, for music,
//! `Music: Royals; Genre: Pop; Date: 2013 7 3 - Lorde`.
//!
//! A field whose marker is absent (or whose value does not parse) comes
//! back as `None`. Extraction never fails.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::warn;

/// A field that a record may be missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Genres,
    Date,
    Performer,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::Genres => write!(f, "genres"),
            Field::Date => write!(f, "date"),
            Field::Performer => write!(f, "performer"),
        }
    }
}

/// Raw fields pulled out of one record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFields {
    pub title: Option<String>,
    pub genres: Option<Vec<String>>,
    pub date: Option<NaiveDate>,
    pub performer: Option<String>,
}

impl RecordFields {
    /// Fields among `wanted` that were not found
    pub fn missing(&self, wanted: &[Field]) -> Vec<Field> {
        wanted
            .iter()
            .copied()
            .filter(|field| match field {
                Field::Title => self.title.is_none(),
                Field::Genres => self.genres.is_none(),
                Field::Date => self.date.is_none(),
                Field::Performer => self.performer.is_none(),
            })
            .collect()
    }
}

fn title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:Title|Music):\s*([^;]+)").expect("valid title regex"))
}

fn genre_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Genre(?:\(s\))?:\s*([^;]+)").expect("valid genre regex"))
}

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Date:\s*(\d{4})\s+(\d{1,2})\s+(\d{1,2})\b").expect("valid date regex")
    })
}

fn performer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Date:[^;]*?\s-\s+([^;]+?)\s*$").expect("valid performer regex")
    })
}

/// Extract fields from `record`, splitting genres on `genre_sep`
pub fn extract(record: &str, genre_sep: char) -> RecordFields {
    let title = capture(title_re(), record);

    let genres = capture(genre_re(), record).map(|raw| {
        raw.split(genre_sep)
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>()
    });
    let genres = genres.filter(|g| !g.is_empty());

    let date = match date_re().captures(record) {
        Some(caps) => calendar_date(&caps),
        None => {
            if record.contains("Date:") {
                warn!(record, "Record date is malformed");
            }
            None
        }
    };

    let performer = capture(performer_re(), record);

    RecordFields {
        title,
        genres,
        date,
        performer,
    }
}

fn calendar_date(caps: &regex::Captures<'_>) -> Option<NaiveDate> {
    let year = caps[1].parse::<i32>().ok()?;
    let month = caps[2].parse::<u32>().ok()?;
    let day = caps[3].parse::<u32>().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day);
    if date.is_none() {
        warn!(year, month, day, "Record date is not a calendar date");
    }
    date
}

fn capture(re: &Regex, record: &str) -> Option<String> {
    re.captures(record)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_record() {
        let fields = extract(
            "Title: The Dark Knight; Genre(s): Action, Crime, Drama; Date: 2008 7 18",
            ',',
        );

        assert_eq!(fields.title.as_deref(), Some("The Dark Knight"));
        assert_eq!(
            fields.genres.unwrap(),
            vec!["Action", "Crime", "Drama"]
        );
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2008, 7, 18));
        assert!(fields.performer.is_none());
    }

    #[test]
    fn test_extract_music_record() {
        let fields = extract(
            "Music: Uptown Funk; Genre: Funk/Pop; Date: 2014 7 21 - Mark Ronson ft. Bruno Mars",
            '/',
        );

        assert_eq!(fields.title.as_deref(), Some("Uptown Funk"));
        assert_eq!(fields.genres.unwrap(), vec!["Funk", "Pop"]);
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2014, 7, 21));
        assert_eq!(
            fields.performer.as_deref(),
            Some("Mark Ronson ft. Bruno Mars")
        );
    }

    #[test]
    fn test_missing_markers() {
        let fields = extract("Title: Memento", ',');

        assert_eq!(fields.title.as_deref(), Some("Memento"));
        assert_eq!(
            fields.missing(&[Field::Title, Field::Genres, Field::Date]),
            vec![Field::Genres, Field::Date]
        );
    }

    #[test]
    fn test_invalid_calendar_date() {
        let fields = extract("Title: X; Genre(s): Drama; Date: 2019 13 40", ',');
        assert!(fields.date.is_none());
    }

    #[test]
    fn test_overlong_date_parts_are_rejected() {
        for record in [
            "Title: X; Genre(s): Drama; Date: 2010 7 161",
            "Title: X; Genre(s): Drama; Date: 2010 7 16xyz",
            "Title: X; Genre(s): Drama; Date: 2010 123 16",
        ] {
            let fields = extract(record, ',');
            assert!(fields.date.is_none(), "accepted date in {:?}", record);
            assert_eq!(
                fields.missing(&[Field::Title, Field::Genres, Field::Date]),
                vec![Field::Date]
            );
        }

        let fields = extract("Title: X; Genre(s): Drama; Date: 2010 7 16; Rating: 8.8", ',');
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2010, 7, 16));
    }

    #[test]
    fn test_empty_record() {
        let fields = extract("", ',');
        assert_eq!(fields, RecordFields::default());
    }
}
