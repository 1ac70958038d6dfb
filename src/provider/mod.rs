//! Streaming providers and the services that present them.
//!
//! A [`Provider`] is built from a flat configuration record plus a content
//! mapping shared with every other provider. Its simulated [`Status`] is
//! drawn once at construction and never changes.

pub mod record;
pub mod status;

use std::collections::BTreeMap;
use std::rc::Rc;

use rand::Rng;
use tracing::debug;

use crate::display::join;
use crate::error::ShelfError;
use crate::media::MediaWork;

pub use record::{Device, ProviderRecord, Resolution};
pub use status::{ResponseTime, Stability, Status, Trust};

/// Category name -> works in that category
pub type ContentMap = BTreeMap<String, Vec<MediaWork>>;

/// A streaming provider
#[derive(Debug, Clone)]
pub struct Provider {
    record: ProviderRecord,
    content: Rc<ContentMap>,
    status: Status,
}

impl Provider {
    /// Create a provider, drawing its status from `rng`
    pub fn new<R: Rng + ?Sized>(record: ProviderRecord, content: Rc<ContentMap>, rng: &mut R) -> Self {
        let status = Status::draw(rng);
        debug!(provider = %record.name, status = %status, "Provider created");

        Self {
            record,
            content,
            status,
        }
    }

    /// Parse a configuration line and create the provider
    pub fn from_line<R: Rng + ?Sized>(
        line: &str,
        content: Rc<ContentMap>,
        rng: &mut R,
    ) -> Result<Self, ShelfError> {
        let record = line.parse()?;
        Ok(Self::new(record, content, rng))
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn resolution(&self) -> Resolution {
        self.record.resolution
    }

    pub fn devices(&self) -> &[Device] {
        &self.record.devices
    }

    pub fn fee(&self) -> f64 {
        self.record.fee
    }

    pub fn offline(&self) -> bool {
        self.record.offline
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn content(&self) -> &ContentMap {
        &self.content
    }

    /// Works in one category (empty if the category is unknown)
    pub fn works(&self, category: &str) -> &[MediaWork] {
        self.content
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.content.keys().map(String::as_str)
    }

    /// First work with exactly this title, scanning categories in order
    pub fn find_work(&self, title: &str) -> Option<&MediaWork> {
        self.content
            .values()
            .flatten()
            .find(|work| work.title() == Some(title))
    }

    pub fn supports(&self, device: Device) -> bool {
        self.record.devices.contains(&device)
    }

    /// Wrap in the service type matching its capabilities
    pub fn into_service(self) -> Box<dyn Service> {
        if self.offline() {
            Box::new(OfflineService::new(self))
        } else {
            Box::new(StandardService::new(self))
        }
    }
}

/// A provider as presented to subscribers
pub trait Service {
    fn provider(&self) -> &Provider;

    /// Human-readable status line. Implementors may add to the base text.
    fn render_status(&self) -> String {
        let provider = self.provider();
        format!(
            "{} [{} | {:.2}/month] {}",
            provider.name(),
            provider.resolution(),
            provider.fee(),
            provider.status()
        )
    }
}

/// Provider without offline playback
#[derive(Debug, Clone)]
pub struct StandardService {
    provider: Provider,
}

impl StandardService {
    pub fn new(provider: Provider) -> Self {
        Self { provider }
    }
}

impl Service for StandardService {
    fn provider(&self) -> &Provider {
        &self.provider
    }
}

/// Provider that allows downloads for offline playback
#[derive(Debug, Clone)]
pub struct OfflineService {
    provider: Provider,
}

impl OfflineService {
    pub fn new(provider: Provider) -> Self {
        Self { provider }
    }
}

impl Service for OfflineService {
    fn provider(&self) -> &Provider {
        &self.provider
    }

    fn render_status(&self) -> String {
        let provider = self.provider();
        format!(
            "{} [{} | {:.2}/month] {}; offline playback on {}",
            provider.name(),
            provider.resolution(),
            provider.fee(),
            provider.status(),
            join(provider.devices(), ", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn content() -> Rc<ContentMap> {
        let mut map = ContentMap::new();
        map.insert(
            "movies".to_string(),
            vec![MediaWork::parse_audio_visual(
                "Title: Parasite; Genre(s): Comedy, Drama, Thriller; Date: 2019 5 30",
                "movie",
                8.6,
            )],
        );
        map.insert(
            "musics".to_string(),
            vec![MediaWork::parse_audio(
                "Music: Happy; Genre: Pop; Date: 2013 9 11 - Pharrell Williams",
            )],
        );
        Rc::new(map)
    }

    #[test]
    fn test_provider_accessors() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let provider =
            Provider::from_line("WizardTV;FHD;PHONE,PC;45.99;False", content(), &mut rng).unwrap();

        assert_eq!(provider.name(), "WizardTV");
        assert_eq!(provider.resolution(), Resolution::Fhd);
        assert!(provider.supports(Device::Phone));
        assert!(!provider.supports(Device::Tv));
        assert!(!provider.offline());
        assert_eq!(provider.works("movies").len(), 1);
        assert!(provider.works("podcasts").is_empty());
        assert_eq!(
            provider.categories().collect::<Vec<_>>(),
            vec!["movies", "musics"]
        );
    }

    #[test]
    fn test_find_work_across_categories() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let provider =
            Provider::from_line("PixelUniverse;UHD;TV,PC;29.99;False", content(), &mut rng)
                .unwrap();

        assert_eq!(provider.find_work("Happy").unwrap().kind(), "audio");
        assert!(provider.find_work("Parasite").is_some());
        assert!(provider.find_work("Sad").is_none());
    }

    #[test]
    fn test_status_is_seeded() {
        let shared = content();
        let a = Provider::from_line(
            "WizardTV;FHD;PHONE,PC;45.99;False",
            Rc::clone(&shared),
            &mut ChaCha8Rng::seed_from_u64(99),
        )
        .unwrap();
        let b = Provider::from_line(
            "WizardTV;FHD;PHONE,PC;45.99;False",
            shared,
            &mut ChaCha8Rng::seed_from_u64(99),
        )
        .unwrap();

        assert_eq!(a.status(), b.status());
    }

    #[test]
    fn test_content_is_shared() {
        let shared = content();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let _a = Provider::from_line("A;HD;PC;1.00;False", Rc::clone(&shared), &mut rng).unwrap();
        let _b = Provider::from_line("B;HD;PC;1.00;False", Rc::clone(&shared), &mut rng).unwrap();

        assert_eq!(Rc::strong_count(&shared), 3);
    }

    #[test]
    fn test_service_rendering() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let standard = Provider::from_line("WizardTV;FHD;PHONE,PC;45.99;False", content(), &mut rng)
            .unwrap()
            .into_service();
        let offline = Provider::from_line("DreamWeaver+;HD;PHONE;69.99;True", content(), &mut rng)
            .unwrap()
            .into_service();

        let standard_line = standard.render_status();
        assert!(standard_line.starts_with("WizardTV [FHD | 45.99/month] response time: "));
        assert!(!standard_line.contains("offline"));

        let offline_line = offline.render_status();
        assert!(offline_line.starts_with("DreamWeaver+ [HD | 69.99/month] "));
        assert!(offline_line.ends_with("; offline playback on PHONE"));
    }

    #[test]
    fn test_malformed_line_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let result = Provider::from_line("Broken;HD", content(), &mut rng);
        assert!(matches!(result, Err(ShelfError::MalformedRecord { .. })));
    }
}
