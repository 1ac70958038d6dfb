//! Built-in sample data standing in for an external feed.

use rand::Rng;

use crate::directory::Directory;
use crate::media::MediaWork;
use crate::provider::ContentMap;
use crate::rental::{Catalog, Genre, Item};

pub const PROVIDERS: &[&str] = &[
    "GalacticHost;FHD;TAB,TV,PC;99.99;False",
    "WizardTV;FHD;PHONE,PC;45.99;False",
    "QuantumCloud+;HD;PHONE,PC;52.99;True",
    "PixelUniverse;UHD;TV,PC;29.99;False",
    "DreamWeaver+;HD;PHONE;69.99;True",
];

pub const MOVIES: &[(&str, f32)] = &[
    ("Title: Inception; Genre(s): Action, Science Fiction; Date: 2010 7 16", 8.8),
    ("Title: The Godfather; Genre(s): Crime, Drama; Date: 1972 3 24", 9.2),
    ("Title: Forrest Gump; Genre(s): Drama, Romance; Date: 1994 7 6", 8.8),
    ("Title: Interstellar; Genre(s): Adventure, Drama, Science Fiction; Date: 2014 11 7", 8.6),
    ("Title: The Dark Knight; Genre(s): Action, Crime, Drama; Date: 2008 7 18", 9.0),
    ("Title: Pulp Fiction; Genre(s): Crime, Drama; Date: 1994 10 14", 8.9),
    ("Title: Fight Club; Genre(s): Drama; Date: 1999 10 15", 8.8),
    ("Title: Spirited Away; Genre(s): Animation, Fantasy; Date: 2001 7 20", 8.6),
    ("Title: La La Land; Genre(s): Drama, Music, Romance; Date: 2016 12 9", 8.0),
    ("Title: Parasite; Genre(s): Comedy, Drama, Thriller; Date: 2019 5 30", 8.6),
];

pub const SERIES: &[(&str, f32)] = &[
    ("Title: Breaking Bad; Genre(s): Crime, Drama, Thriller; Date: 2008 1 20", 9.5),
    ("Title: Game of Thrones; Genre(s): Action, Adventure, Drama; Date: 2011 4 17", 9.3),
    ("Title: Stranger Things; Genre(s): Drama, Fantasy, Horror; Date: 2016 7 15", 8.7),
    ("Title: The Crown; Genre(s): Drama, History; Date: 2016 11 4", 8.7),
    ("Title: Black Mirror; Genre(s): Drama, Science Fiction, Thriller; Date: 2011 12 4", 8.8),
    ("Title: The Mandalorian; Genre(s): Action, Adventure, Fantasy; Date: 2019 11 12", 8.8),
    ("Title: The Witcher; Genre(s): Action, Adventure, Fantasy; Date: 2019 12 20", 8.2),
    ("Title: The Office; Genre(s): Comedy, Sitcom; Date: 2005 3 24", 8.9),
    ("Title: Friends; Genre(s): Comedy, Romance; Date: 1994 9 22", 8.9),
    ("Title: Sherlock; Genre(s): Crime, Drama, Mystery; Date: 2010 7 25", 9.1),
];

pub const MUSIC: &[&str] = &[
    "Music: Rolling in the Deep; Genre: Pop; Date: 2010 3 10 - Adele",
    "Music: Shape of You; Genre: Pop; Date: 2017 6 4 - Ed Sheeran",
    "Music: Uptown Funk; Genre: Funk/Pop; Date: 2014 7 21 - Mark Ronson ft. Bruno Mars",
    "Music: Old Town Road; Genre: Country/Rap; Date: 2019 8 15 - Lil Nas X",
    "Music: Thrift Shop; Genre: Hip Hop; Date: 2012 3 14 - Macklemore & Ryan Lewis",
    "Music: Happy; Genre: Pop; Date: 2013 9 11 - Pharrell Williams",
    "Music: Someone Like You; Genre: Pop; Date: 2011 5 5 - Adele",
    "Music: Royals; Genre: Pop; Date: 2013 7 3 - Lorde",
    "Music: Blinding Lights; Genre: Synth-pop; Date: 2019 9 9 - The Weeknd",
    "Music: Get Lucky; Genre: Disco; Date: 2013 2 22 - Daft Punk ft. Pharrell Williams & Nile Rodgers",
];

/// Content categories used by the sample directory
pub const CATEGORY_MOVIES: &str = "movies";
pub const CATEGORY_SERIES: &str = "series";
pub const CATEGORY_MUSIC: &str = "musics";

/// The sample rental store, including three copies of The Matrix
pub fn catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(Item::new("Inception", 2010, &[Genre::ScienceFiction, Genre::Action]));
    catalog.add(Item::new("Parasite", 2019, &[Genre::Thriller, Genre::Drama]));
    catalog.add(Item::new("Interstellar", 2014, &[Genre::ScienceFiction, Genre::Action]));
    for _ in 0..3 {
        catalog.add(Item::new("The Matrix", 1999, &[Genre::Action, Genre::ScienceFiction]));
    }
    catalog
}

/// Parse every sample record into the shared content mapping
pub fn content() -> ContentMap {
    let mut map = ContentMap::new();
    map.insert(
        CATEGORY_MOVIES.to_string(),
        MOVIES
            .iter()
            .map(|(record, rating)| MediaWork::parse_audio_visual(record, "movie", *rating))
            .collect(),
    );
    map.insert(
        CATEGORY_SERIES.to_string(),
        SERIES
            .iter()
            .map(|(record, rating)| MediaWork::parse_audio_visual(record, "series", *rating))
            .collect(),
    );
    map.insert(
        CATEGORY_MUSIC.to_string(),
        MUSIC.iter().map(|record| MediaWork::parse_audio(record)).collect(),
    );
    map
}

/// The sample provider directory
pub fn directory<R: Rng + ?Sized>(rng: &mut R) -> Directory {
    let (directory, _rejected) = Directory::load(content(), PROVIDERS, rng);
    directory
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_sample_records_are_complete() {
        for works in content().values() {
            for work in works {
                assert!(
                    work.missing_fields().is_empty(),
                    "incomplete sample: {}",
                    work
                );
            }
        }
    }

    #[test]
    fn test_sample_providers_all_load() {
        let directory = directory(&mut ChaCha8Rng::seed_from_u64(0));
        assert_eq!(directory.len(), PROVIDERS.len());
    }

    #[test]
    fn test_sample_catalog() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.check_invariants());
    }
}
