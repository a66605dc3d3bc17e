/// Database connection and table creation
pub mod database;

/// Environment-driven application settings
pub mod settings;

pub use settings::Settings;
