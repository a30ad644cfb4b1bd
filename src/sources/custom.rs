use log::{info, warn};

use crate::config::StaticEntry;
use crate::error::ScanError;
use crate::model::ApplicationEntry;
use crate::sources::Source;

/// Entries declared under `[[items]]` in the config file.
pub struct CustomSource {
    items: Vec<StaticEntry>,
}

impl CustomSource {
    pub fn new(items: Vec<StaticEntry>) -> Self {
        Self { items }
    }
}

impl Source for CustomSource {
    fn describe(&self) -> String {
        "configured items".to_string()
    }

    fn scan(&self, out: &mut Vec<ApplicationEntry>) -> Result<(), ScanError> {
        let before = out.len();
        for item in &self.items {
            let icon = item.icon.as_deref().unwrap_or("");
            match ApplicationEntry::new(&item.name, icon, &item.command) {
                Ok(entry) => out.push(entry),
                Err(rejected) => warn!("Ignoring configured item {:?}: {}", item.name, rejected),
            }
        }
        info!("CustomSource: found {} entries", out.len() - before);
        Ok(())
    }
}
