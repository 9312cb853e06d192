//! App Core for Bookmark Gallery.
//!
//! Central struct holding the settings, the extraction/categorization services
//! and the gallery state, and running the import sequence.

use std::path::Path;

use tracing::{info, warn};

use crate::managers::gallery_manager::{GalleryManager, GalleryManagerTrait};
use crate::services::bookmark_extractor::{BookmarkExtractor, BookmarkExtractorTrait};
use crate::services::categorizer::{Categorizer, CategorizerTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::bookmark::{Bookmark, ImportSummary};
use crate::types::errors::{ImportError, SettingsError};

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub extractor: BookmarkExtractor,
    pub categorizer: Categorizer,
    pub gallery: GalleryManager,
}

impl App {
    /// Creates a new App from the settings at `config_path` (or the platform
    /// default path), with an empty gallery.
    pub fn new(config_path: Option<String>) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        let settings = settings_engine.load()?;

        Ok(Self {
            extractor: BookmarkExtractor::new(&settings.import),
            categorizer: Categorizer::new(&settings.categorization),
            gallery: GalleryManager::new(settings.view.sort_order),
            settings_engine,
        })
    }

    /// Logs where the settings came from. The binaries call this once the
    /// subscriber is installed, since `new` runs before logging is configured.
    pub fn report_settings_source(&self) {
        let path = self.settings_engine.get_config_path();
        if self.settings_engine.loaded_from_file() {
            info!("Settings loaded from {}", path);
        } else {
            info!("No settings file at {}, using defaults", path);
        }
    }

    /// Rebuilds the services after the settings changed.
    pub fn apply_settings(&mut self) {
        let settings = self.settings_engine.get_settings();
        self.extractor = BookmarkExtractor::new(&settings.import);
        self.categorizer = Categorizer::new(&settings.categorization);
        self.gallery.set_sort_order(settings.view.sort_order);
    }

    /// Extracts, categorizes and swaps in every link of a bookmarks export.
    ///
    /// A link whose URL cannot be categorized gets the catch-all category;
    /// it never aborts the import.
    pub fn import_html(&mut self, html: &str) -> Result<ImportSummary, ImportError> {
        let links = self.extractor.extract(html)?;

        let mut fallback_count = 0;
        let bookmarks: Vec<Bookmark> = links
            .into_iter()
            .map(|link| {
                let classification = match self.categorizer.categorize(&link.title, &link.url) {
                    Ok(found) => found,
                    Err(e) => {
                        warn!("Falling back to catch-all category: {}", e);
                        fallback_count += 1;
                        self.categorizer.unrecognized()
                    }
                };
                Bookmark::new(link, classification)
            })
            .collect();

        self.gallery.replace(bookmarks);

        let summary = ImportSummary {
            total: self.gallery.bookmarks().len(),
            fallback_count,
            category_count: self.gallery.category_tallies().len(),
            folder_count: self.gallery.folder_tallies().len(),
        };
        info!(
            "Imported {} bookmarks into {} categories ({} uncategorizable)",
            summary.total, summary.category_count, summary.fallback_count
        );
        Ok(summary)
    }

    /// Reads a bookmarks file and imports it.
    ///
    /// `None` means nothing was chosen and leaves the gallery untouched. A read
    /// failure also leaves the current list in place. Bytes that are not valid
    /// UTF-8 are decoded as U+FFFD rather than failing the import.
    pub async fn import_file(
        &mut self,
        path: Option<&Path>,
    ) -> Result<Option<ImportSummary>, ImportError> {
        let Some(path) = path else {
            return Ok(None);
        };

        let bytes = tokio::fs::read(path).await?;
        self.import_html(&String::from_utf8_lossy(&bytes)).map(Some)
    }
}
