use std::path::PathBuf;

use log::{info, warn};
use regex::Regex;

use crate::config::Config;
use crate::model::ApplicationEntry;
use crate::sources::custom::CustomSource;
use crate::sources::desktop::DesktopSource;
use crate::sources::Source;

/// Scans `search_dirs` in order and returns the sorted catalog.
///
/// Never fails: unreadable files and directories are logged and skipped.
pub fn build_catalog(search_dirs: &[PathBuf]) -> Vec<ApplicationEntry> {
    search_dirs
        .iter()
        .fold(CatalogBuilder::new(), |builder, dir| builder.source(DesktopSource::new(dir)))
        .build()
}

/// Case-insensitive by name. Stable, so equal names keep discovery order.
pub fn sort_catalog(entries: &mut [ApplicationEntry]) {
    entries.sort_by_cached_key(ApplicationEntry::sort_key);
}

#[derive(Default)]
pub struct CatalogBuilder {
    sources: Vec<Box<dyn Source>>,
    exclude: Vec<Regex>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sources are scanned in the order they are added.
    pub fn source(mut self, source: impl Source + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn exclude(mut self, patterns: Vec<Regex>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::from_config_with_dirs(config, config.search_dirs())
    }

    /// Like [`CatalogBuilder::from_config`] but scanning `dirs` instead of the configured directories.
    pub fn from_config_with_dirs(config: &Config, dirs: Vec<PathBuf>) -> Self {
        let builder = dirs.into_iter().fold(Self::new(), |builder, dir| {
            builder.source(DesktopSource::new(dir).max_depth(config.sources.max_depth))
        });
        builder
            .source(CustomSource::new(config.items.clone()))
            .exclude(compile_patterns(&config.sources.exclude))
    }

    pub fn build(&self) -> Vec<ApplicationEntry> {
        let mut entries = Vec::new();
        for source in &self.sources {
            if let Err(err) = source.scan(&mut entries) {
                warn!("Partial scan of {}: {}", source.describe(), err);
            }
        }

        if !self.exclude.is_empty() {
            entries.retain(|entry| !self.is_excluded(entry));
        }

        sort_catalog(&mut entries);
        info!("Catalog: {} entries from {} sources", entries.len(), self.sources.len());
        entries
    }

    fn is_excluded(&self, entry: &ApplicationEntry) -> bool {
        let file_name = entry.source.as_ref()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str());
        self.exclude.iter().any(|re| {
            re.is_match(&entry.name) || file_name.is_some_and(|f| re.is_match(f))
        })
    }
}

/// Compiles exclusion patterns, dropping the ones that are not valid regexes.
pub fn compile_patterns(patterns: &[String]) -> Vec<Regex> {
    patterns.iter()
        .filter_map(|p| match Regex::new(p) {
            Ok(re) => Some(re),
            Err(err) => {
                warn!("Ignoring invalid exclude pattern {:?}: {}", p, err);
                None
            }
        })
        .collect()
}
