// Adapters layer: concrete implementations backed by the local filesystem.

pub mod file;
pub mod io_handler;
