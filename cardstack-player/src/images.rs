//! Local card images.
//!
//! Images are looked up once at boot as `<image_dir>/<image_ref>.{jpg,png}`.
//! Entries without a file paint a placeholder panel instead.

use std::path::Path;

use cardstack_core::Catalog;
use cardstack_core::catalog::{IMAGE_HEIGHT, IMAGE_WIDTH};
use iced::widget::image::Handle;

const EXTENSIONS: [&str; 2] = ["jpg", "png"];

#[derive(Debug, Clone, Default)]
pub struct CardImages {
    handles: Vec<Option<Handle>>,
}

impl CardImages {
    pub fn empty(len: usize) -> Self {
        Self {
            handles: vec![None; len],
        }
    }

    pub fn discover(catalog: &Catalog, dir: &Path) -> Self {
        let handles = catalog
            .iter()
            .map(|entry| {
                let found = EXTENSIONS
                    .iter()
                    .map(|ext| dir.join(format!("{}.{ext}", entry.image_ref)))
                    .find(|path| path.is_file());
                match found {
                    Some(path) => {
                        log::debug!("Using {} for {}", path.display(), entry.name);
                        Some(Handle::from_path(path))
                    }
                    None => {
                        match entry.image_url(IMAGE_WIDTH, IMAGE_HEIGHT) {
                            Ok(url) => log::debug!(
                                "No local image for {} in {} (source: {url})",
                                entry.name,
                                dir.display()
                            ),
                            Err(err) => log::warn!(
                                "No local image for {}: {err}",
                                entry.name
                            ),
                        }
                        None
                    }
                }
            })
            .collect();
        Self { handles }
    }

    pub fn get(&self, index: usize) -> Option<&Handle> {
        self.handles.get(index).and_then(Option::as_ref)
    }

    pub fn loaded(&self) -> usize {
        self.handles.iter().filter(|handle| handle.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovers_only_present_files() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::builtin();
        std::fs::write(
            dir.path().join(format!("{}.jpg", catalog[1].image_ref)),
            b"not really a jpeg",
        )
        .unwrap();
        std::fs::write(
            dir.path().join(format!("{}.png", catalog[5].image_ref)),
            b"not really a png",
        )
        .unwrap();

        let images = CardImages::discover(&catalog, dir.path());
        assert_eq!(images.loaded(), 2);
        assert!(images.get(1).is_some());
        assert!(images.get(5).is_some());
        assert!(images.get(0).is_none());
        assert!(images.get(99).is_none());
    }

    #[test]
    fn empty_has_no_images() {
        let images = CardImages::empty(7);
        assert_eq!(images.loaded(), 0);
    }
}
