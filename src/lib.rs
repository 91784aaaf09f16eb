//! HyperForge content core
//!
//! Template catalogs and the expansion engine that turns them into
//! concrete game content, plus the bank slot-reorganization engine.

pub mod bank;
pub mod catalog;
pub mod error;
pub mod generate;

// Re-export commonly used types
pub use catalog::Catalog;
pub use error::{FieldPathError, GenerateError};
pub use generate::{AssetRecord, BulkOperationResult, BundleResult};
