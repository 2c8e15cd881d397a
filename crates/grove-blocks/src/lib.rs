//! Block values, block type definitions, and the data-driven registry.
#![forbid(unsafe_code)]

pub mod config;
pub mod registry;
pub mod types;

pub use registry::{BlockRegistry, BlockType, RegistryError};
pub use types::{Block, BlockId, BlockState};
