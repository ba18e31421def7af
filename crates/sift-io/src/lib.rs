//! Document loading and configuration files

mod config;
mod error;
mod io;
mod paths;

pub use config::{load_config, load_config_or_default};
pub use error::{LoadError, Result};
pub use io::load_documents;
pub use paths::Paths;
