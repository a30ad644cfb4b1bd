use std::path::PathBuf;

use serde::Serialize;

use crate::error::Rejected;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationEntry {
    pub name: String,                // Display name, sort and filter key
    pub icon: String,                // Theme icon name, empty if absent
    pub command: String,             // Shell command, field codes stripped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,     // Descriptor it came from, None for config items
}

impl ApplicationEntry {
    /// Normalizes raw field values into an entry.
    ///
    /// `name` and `icon` are trimmed, `command` loses its field codes. Fails when
    /// either `name` or the stripped `command` comes out empty.
    pub fn new(name: &str, icon: &str, command: &str) -> Result<Self, Rejected> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Rejected::MissingName);
        }
        let command = strip_field_codes(command.trim());
        if command.is_empty() {
            return Err(Rejected::MissingExec);
        }

        Ok(Self {
            name: name.to_string(),
            icon: icon.trim().to_string(),
            command: command.to_string(),
            source: None,
        })
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Lowercased name, the key both sorting and filtering compare on.
    pub fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Cuts `exec` at its first `%` placeholder (`%u`, `%F`, ...) and drops the
/// whitespace left in front of it.
pub fn strip_field_codes(exec: &str) -> &str {
    match exec.find('%') {
        Some(pos) => exec[..pos].trim_end(),
        None => exec.trim_end(),
    }
}
