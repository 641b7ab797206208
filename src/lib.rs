pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::{file::ScopedFile, io_handler::FileIoHandler};
pub use crate::config::{Settings, TomlConfig};
pub use crate::core::{
    engine::{ReversalEngine, RunSummary},
    reverser::StringReverser,
};
pub use utils::error::{Result, ReverserError};
