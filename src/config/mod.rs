//! Configuration for the finance tracker
//!
//! - Data directory resolution
//! - User display preferences

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::Settings;
