//! Directory of streaming services sharing one content mapping.

use std::rc::Rc;

use rand::Rng;
use tracing::{info, warn};

use crate::error::ShelfError;
use crate::media::MediaWork;
use crate::provider::{ContentMap, Device, Provider, Service};

/// Every registered service plus the content they share
pub struct Directory {
    content: Rc<ContentMap>,
    services: Vec<Box<dyn Service>>,
}

impl Directory {
    /// Create an empty directory over `content`
    pub fn new(content: ContentMap) -> Self {
        Self {
            content: Rc::new(content),
            services: Vec::new(),
        }
    }

    /// Build a directory from configuration lines.
    ///
    /// Malformed lines are skipped and returned alongside the directory.
    pub fn load<R: Rng + ?Sized>(
        content: ContentMap,
        lines: &[&str],
        rng: &mut R,
    ) -> (Self, Vec<ShelfError>) {
        let mut directory = Self::new(content);
        let mut rejected = Vec::new();

        for line in lines {
            if let Err(e) = directory.register(line, rng) {
                warn!(line, error = %e, "Skipping provider record");
                rejected.push(e);
            }
        }

        info!(
            services = directory.len(),
            rejected = rejected.len(),
            "Provider directory loaded"
        );
        (directory, rejected)
    }

    /// Parse one configuration line and register the resulting service
    pub fn register<R: Rng + ?Sized>(
        &mut self,
        line: &str,
        rng: &mut R,
    ) -> Result<&dyn Service, ShelfError> {
        let provider = Provider::from_line(line, Rc::clone(&self.content), rng)?;
        self.services.push(provider.into_service());
        Ok(self.services[self.services.len() - 1].as_ref())
    }

    /// Service whose provider has exactly this name
    pub fn find(&self, name: &str) -> Option<&dyn Service> {
        self.services
            .iter()
            .find(|s| s.provider().name() == name)
            .map(|s| s.as_ref())
    }

    pub fn services(&self) -> impl Iterator<Item = &dyn Service> {
        self.services.iter().map(|s| s.as_ref())
    }

    /// Services that stream to `device`
    pub fn supporting(&self, device: Device) -> Vec<&dyn Service> {
        self.services()
            .filter(|s| s.provider().supports(device))
            .collect()
    }

    pub fn content(&self) -> &ContentMap {
        &self.content
    }

    /// First work with exactly this title across all categories
    pub fn find_work(&self, title: &str) -> Option<&MediaWork> {
        self.content
            .values()
            .flatten()
            .find(|work| work.title() == Some(title))
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
