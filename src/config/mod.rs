//! Configuration Module
//!
//! Client settings and the layered loader that fills them from files and the
//! environment.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::ClientConfig;
