pub mod engine;
pub mod reverser;

pub use crate::domain::model::{Line, LineSequence, OpenMode, ReadPolicy};
pub use crate::domain::ports::{ConfigProvider, FileHandle, InPlaceManipulator, IoHandler};
pub use crate::utils::error::Result;
