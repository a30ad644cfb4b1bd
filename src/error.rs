use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to enumerate a descriptor directory or read a descriptor file.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to enumerate {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a descriptor did not make it into the catalog.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    #[error("marked NoDisplay=true")]
    Hidden,
    #[error("no Name")]
    MissingName,
    #[error("no Exec")]
    MissingExec,
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("refusing to launch an empty command")]
    EmptyCommand,
    #[error("failed to spawn `{command}` via {shell}: {source}")]
    Spawn {
        shell: String,
        command: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
