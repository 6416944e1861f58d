// SPDX-License-Identifier: MPL-2.0
//! The static image manifest behind the outputs panel.
//!
//! The gallery is a fixed, ordered sequence of titled placeholder charts
//! standing in for figures a future optimization backend would compute.
//! Entries load independently so a single unreadable file degrades one
//! section instead of aborting the whole panel.

mod image;

pub use image::{load_image, ImageData};

use crate::error::Result;
use std::path::{Path, PathBuf};

/// One titled image in the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub title: String,
    pub path: PathBuf,
}

impl ManifestEntry {
    pub fn new(title: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

/// Ordered, read-only list of the gallery sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageManifest {
    entries: Vec<ManifestEntry>,
}

impl ImageManifest {
    /// Builds a manifest from explicit entries. Used by tests to point
    /// sections at fixture files.
    #[must_use]
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    /// The four placeholder figures shipped with the application, in the
    /// order the panel renders them. Paths are resolved relative to the
    /// process working directory.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            ManifestEntry::new("Asset Selection", "placeholder_images/fig1.png"),
            ManifestEntry::new(
                "In-sample Efficient Frontiers",
                "placeholder_images/fig2.png",
            ),
            ManifestEntry::new(
                "Out-of-sample Cumulative Returns",
                "placeholder_images/fig3.png",
            ),
            ManifestEntry::new(
                "Out-of-sample Risk and Reward",
                "placeholder_images/fig4.png",
            ),
        ])
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ManifestEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ImageManifest {
    fn default() -> Self {
        Self::standard()
    }
}

/// Result of loading one manifest entry, tagged with its section index.
#[derive(Debug, Clone)]
pub struct SectionLoad {
    pub index: usize,
    pub result: Result<ImageData>,
}

/// Loads every manifest entry, preserving order. Failures are captured
/// per entry, never propagated.
#[must_use]
pub fn load_all(manifest: &ImageManifest) -> Vec<SectionLoad> {
    manifest
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| SectionLoad {
            index,
            result: image::load_image(&entry.path),
        })
        .collect()
}

/// Loads a single entry, used when the user retries a failed section.
#[must_use]
pub fn load_entry(index: usize, path: &Path) -> SectionLoad {
    SectionLoad {
        index,
        result: image::load_image(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([0, 0, 255, 255]));
        img.save(path).expect("failed to write fixture png");
    }

    #[test]
    fn standard_manifest_has_four_sections_in_order() {
        let manifest = ImageManifest::standard();
        let titles: Vec<&str> = manifest
            .entries()
            .iter()
            .map(|entry| entry.title.as_str())
            .collect();

        assert_eq!(
            titles,
            [
                "Asset Selection",
                "In-sample Efficient Frontiers",
                "Out-of-sample Cumulative Returns",
                "Out-of-sample Risk and Reward",
            ]
        );
    }

    #[test]
    fn standard_manifest_points_at_placeholder_images() {
        let manifest = ImageManifest::standard();
        for (i, entry) in manifest.entries().iter().enumerate() {
            let expected = format!("placeholder_images/fig{}.png", i + 1);
            assert_eq!(entry.path, PathBuf::from(expected));
        }
    }

    #[test]
    fn load_all_preserves_order_and_isolates_failures() {
        let dir = tempdir().expect("failed to create temp dir");
        let good_a = dir.path().join("a.png");
        let good_b = dir.path().join("b.png");
        write_png(&good_a, 2, 2);
        write_png(&good_b, 3, 1);

        let manifest = ImageManifest::new(vec![
            ManifestEntry::new("First", &good_a),
            ManifestEntry::new("Broken", dir.path().join("missing.png")),
            ManifestEntry::new("Last", &good_b),
        ]);

        let loads = load_all(&manifest);
        assert_eq!(loads.len(), 3);
        assert!(loads[0].result.is_ok());
        assert!(loads[1].result.is_err());
        assert!(loads[2].result.is_ok());
        assert_eq!(loads[2].index, 2);
    }

    #[test]
    fn load_entry_reports_its_index() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("retry.png");
        write_png(&path, 1, 1);

        let load = load_entry(2, &path);
        assert_eq!(load.index, 2);
        assert!(load.result.is_ok());
    }
}
