//! Static, ordered catalog of carousel entries.

use std::ops::Index;
use std::sync::Arc;

use url::Url;

use crate::error::{CoreError, Result};

const IMAGE_HOST: &str = "https://images.unsplash.com";

/// Default card image dimensions requested from the image host.
pub const IMAGE_WIDTH: u32 = 400;
pub const IMAGE_HEIGHT: u32 = 500;

/// One entry of the carousel. Entries are never mutated once the catalog is
/// built; position in the catalog is the entry's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CatalogEntry {
    pub name: &'static str,
    pub scientific_name: &'static str,
    /// Photo code on the image host, also used as the local file stem.
    pub image_ref: &'static str,
    pub description: &'static str,
}

impl CatalogEntry {
    pub const fn new(
        name: &'static str,
        scientific_name: &'static str,
        image_ref: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            scientific_name,
            image_ref,
            description,
        }
    }

    /// Canonical remote location of this entry's photo, cropped to
    /// `width` x `height`.
    pub fn image_url(&self, width: u32, height: u32) -> Result<Url> {
        let mut url =
            Url::parse(&format!("{IMAGE_HOST}/photo-{}", self.image_ref))?;
        url.query_pairs_mut()
            .append_pair("w", &width.to_string())
            .append_pair("h", &height.to_string())
            .append_pair("fit", "crop");
        Ok(url)
    }
}

const BIG_CATS: [CatalogEntry; 7] = [
    CatalogEntry::new(
        "Tiger",
        "Panthera tigris",
        "1501705388883-4ed8a543392c",
        "tiger in the water",
    ),
    CatalogEntry::new(
        "Lion",
        "Panthera leo",
        "1519066629447-267fffa62d4b",
        "lion and lioness resting on a rock in the sun",
    ),
    CatalogEntry::new(
        "Leopard",
        "Panthera pardus",
        "1566489564594-f2163930c034",
        "blue-eyed leopard resting high up with its head on its front paws",
    ),
    CatalogEntry::new(
        "Jaguar",
        "Panthera onca",
        "1601544359642-c76c4f7c3221",
        "jaguar closeup",
    ),
    CatalogEntry::new(
        "Snow leopard",
        "Panthera uncia",
        "1689847190291-f8e0823f13ab",
        "snow leopard lying low on some rocks, its fur blending in perfectly",
    ),
    CatalogEntry::new(
        "Cheetah",
        "Acinonyx jubatus",
        "1693702366986-cbfbd1cf0450",
        "cheetah in the grass at dusk",
    ),
    CatalogEntry::new(
        "Cougar",
        "Puma concolor",
        "1661004527094-07d861089aed",
        "cougar walking through the snow",
    ),
];

/// Ordered, non-empty list of entries shared between the navigator and the
/// renderer. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Arc<[CatalogEntry]>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    /// The seven big cats the carousel ships with.
    pub fn builtin() -> Self {
        Self {
            entries: Arc::from(BIG_CATS.as_slice()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }
}

impl Index<usize> for Catalog {
    type Output = CatalogEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_keeps_declared_order() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.iter().map(|entry| entry.name).collect();
        assert_eq!(
            names,
            [
                "Tiger",
                "Lion",
                "Leopard",
                "Jaguar",
                "Snow leopard",
                "Cheetah",
                "Cougar"
            ]
        );
        assert_eq!(catalog[4].scientific_name, "Panthera uncia");
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(Vec::new()), Err(CoreError::EmptyCatalog));
    }

    #[test]
    fn image_url_requests_cropped_photo() {
        let catalog = Catalog::builtin();
        let url = catalog[0]
            .image_url(IMAGE_WIDTH, IMAGE_HEIGHT)
            .expect("valid url");
        assert_eq!(
            url.as_str(),
            "https://images.unsplash.com/photo-1501705388883-4ed8a543392c?w=400&h=500&fit=crop"
        );
    }
}
