//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::GastosPaths;
pub use settings::Settings;
