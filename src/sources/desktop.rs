use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Rejected, ScanError};
use crate::model::ApplicationEntry;
use crate::sources::Source;

const DESKTOP_EXTENSION: &str = "desktop";
const NO_DISPLAY_MARKER: &str = "NoDisplay=true";

/// System-wide directories first, then the user's own.
pub fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/applications"),
        PathBuf::from("/usr/local/share/applications"),
    ];
    if let Some(base_dirs) = BaseDirs::new() {
        dirs.push(base_dirs.data_dir().join("applications"));
    }
    dirs
}

/// One directory of `.desktop` files.
pub struct DesktopSource {
    dir: PathBuf,
    max_depth: usize,
}

impl DesktopSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), max_depth: 1 }
    }

    /// How many directory levels below `dir` to descend; 1 means only `dir` itself.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }
}

impl Source for DesktopSource {
    fn describe(&self) -> String {
        format!("desktop entries in {}", self.dir.display())
    }

    fn scan(&self, out: &mut Vec<ApplicationEntry>) -> Result<(), ScanError> {
        if !self.dir.is_dir() {
            debug!("Skipping missing directory {:?}", self.dir);
            return Ok(());
        }

        debug!("Scanning desktop files in {:?}", self.dir);
        let before = out.len();
        let walker = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(self.max_depth)
            .follow_links(true)
            .sort_by_file_name();

        for item in walker {
            let item = match item {
                Ok(item) => item,
                // Depth 0 is the directory itself: nothing more can come out of it.
                Err(err) if err.depth() == 0 => {
                    return Err(ScanError::Walk { path: self.dir.clone(), source: err });
                }
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| self.dir.clone());
                    warn!("{}", ScanError::Walk { path, source: err });
                    continue;
                }
            };

            let path = item.path();
            if !item.file_type().is_file() || !has_desktop_extension(path) {
                continue;
            }

            match read_desktop_file(path) {
                Ok(Ok(entry)) => out.push(entry),
                Ok(Err(rejected)) => debug!("Ignoring {:?}: {}", path, rejected),
                Err(err) => warn!("{}", err),
            }
        }

        info!("DesktopSource: found {} entries in {:?}", out.len() - before, self.dir);
        Ok(())
    }
}

fn has_desktop_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(DESKTOP_EXTENSION)
}

/// Reads one descriptor. The outer error is an I/O failure, the inner one a
/// descriptor that was read fine but does not describe a launchable entry.
pub fn read_desktop_file(path: &Path) -> Result<Result<ApplicationEntry, Rejected>, ScanError> {
    let content = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_desktop_file(&content).map(|entry| entry.with_source(path)))
}

/// Pulls `Name`, `Icon` and `Exec` out of descriptor text.
///
/// This is a line scanner, not a desktop-entry parser: groups, locale suffixes
/// and escapes are not interpreted, and the first matching line wins wherever
/// it appears. Anything containing the `NoDisplay=true` marker is rejected
/// before a single field is looked at.
pub fn parse_desktop_file(content: &str) -> Result<ApplicationEntry, Rejected> {
    if content.contains(NO_DISPLAY_MARKER) {
        return Err(Rejected::Hidden);
    }

    let name = field(content, "Name");
    let icon = field(content, "Icon");
    let exec = field(content, "Exec");

    ApplicationEntry::new(name, icon, exec)
}

/// Value of the first line starting with `key=`, trimmed. Empty if there is none.
fn field<'a>(content: &'a str, key: &str) -> &'a str {
    content
        .lines()
        .find_map(|line| {
            line.trim_start()
                .strip_prefix(key)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .map(str::trim)
        .unwrap_or("")
}
