//! The links directory: an ordered list of `{title, url}` pairs serialized as
//! JSON under a single storage key.

use crate::error::LinkError;
use crate::store::KeyValueStore;
use log::error;
use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "venx_links_v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    pub url: String,
}

impl Link {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Link {
        Link {
            title: title.into(),
            url: url.into(),
        }
    }
}

pub fn default_links() -> Vec<Link> {
    vec![Link::new("Panel", "https://panel.venxhosts.me")]
}

pub struct LinkDirectory<S> {
    store: S,
}

impl<S: KeyValueStore> LinkDirectory<S> {
    pub fn new(store: S) -> LinkDirectory<S> {
        LinkDirectory { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current links. The defaults are written when nothing (or an empty
    /// string) is stored. Unreadable storage and stored text that no longer
    /// parses both yield the defaults without touching storage.
    pub fn load(&mut self) -> Result<Vec<Link>, LinkError> {
        let raw = match self.store.get_item(STORAGE_KEY) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => {
                let links = default_links();
                self.save(&links)?;
                return Ok(links);
            }
            Err(e) => {
                error!("Error loading links: {}", e);
                return Ok(default_links());
            }
        };
        match serde_json::from_str(&raw) {
            Ok(links) => Ok(links),
            Err(e) => {
                error!("Error loading links: {}", e);
                Ok(default_links())
            }
        }
    }

    pub fn save(&mut self, links: &[Link]) -> Result<(), LinkError> {
        let raw = serde_json::to_string(links)?;
        self.store.set_item(STORAGE_KEY, &raw)?;
        Ok(())
    }

    /// Append a link. Both fields are trimmed and must be non-empty.
    pub fn add(&mut self, title: &str, url: &str) -> Result<Link, LinkError> {
        let (title, url) = (title.trim(), url.trim());
        if title.is_empty() || url.is_empty() {
            return Err(LinkError::MissingField);
        }
        let link = Link::new(title, url);
        let mut links = self.load()?;
        links.push(link.clone());
        self.save(&links)?;
        Ok(link)
    }

    /// Remove the link at `index`. Out of range leaves the list as it is.
    pub fn delete(&mut self, index: usize) -> Result<Option<Link>, LinkError> {
        let mut links = self.load()?;
        if index >= links.len() {
            return Ok(None);
        }
        let removed = links.remove(index);
        self.save(&links)?;
        Ok(Some(removed))
    }

    pub fn reset_to_default(&mut self) -> Result<Vec<Link>, LinkError> {
        let links = default_links();
        self.save(&links)?;
        Ok(links)
    }
}
