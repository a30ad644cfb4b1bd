pub mod catalog;
pub mod config;
pub mod error;
pub mod executor;
pub mod matcher;
pub mod model;
pub mod sources;
pub mod state;

pub use catalog::{build_catalog, CatalogBuilder};
pub use error::{ConfigError, LaunchError, Rejected, ScanError};
pub use executor::{launch, Launcher, ShellLauncher};
pub use matcher::{filter, MatchMode, QueryMatcher};
pub use model::ApplicationEntry;
pub use state::{Activation, Session};
