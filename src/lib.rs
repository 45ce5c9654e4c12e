pub mod config;
pub mod constants;
pub mod error;
pub mod figures;
pub mod logging;
pub mod render;
pub mod table;
pub mod tables;

pub use config::Config;
pub use error::{ArtifactError, Result};
