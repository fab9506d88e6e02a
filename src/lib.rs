//! # Satchel
//!
//! A bounded player inventory for games: a fixed number of slots that accepts
//! heterogeneous items, merges compatible stackable items to conserve space,
//! and reports per-item placement success or failure.
//!
//! ## Architecture Overview
//!
//! The crate is organized around a small number of core concepts:
//!
//! - **Item Model**: `Item` is a tagged union over concrete variants (armour,
//!   consumables), each owning its typed attributes and a fixed stackability
//!   flag
//! - **Item Registry**: a process-wide, read-only table mapping item type
//!   keywords to constructors, used to turn raw text records into items
//! - **Item Stack**: groups equivalent stackable items under a single slot
//!   with a bounded count
//! - **Inventory**: the slot-allocation engine that decides whether an
//!   incoming item merges into an existing stack, starts a new stack, takes a
//!   free slot, or is rejected
//! - **Storage**: the batch-loading layer that reads item record files and
//!   fills an inventory, producing one placement outcome per record
//!
//! ## Input Records
//!
//! Items arrive as whitespace-delimited text records, one per line, with the
//! item type keyword first:
//!
//! ```text
//! Armour Boots Leather 100 2 Protection 1 Fire
//! Potion HealthPotion Healing 3
//! ```
//!
//! Unknown keywords and malformed records are skipped without disturbing the
//! records that follow them.

pub mod inventory;
pub mod items;
pub mod storage;

// Core module re-exports
pub use inventory::*;
pub use items::*;
pub use storage::*;

/// Core error type for the satchel crate.
#[derive(thiserror::Error, Debug)]
pub enum SatchelError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record ended before all fields of its item type were read
    #[error("record ended before field '{0}' could be read")]
    MissingField(&'static str),

    /// A numeric field held a token that is not an integer
    #[error("field '{field}' expects an integer, found '{token}'")]
    InvalidNumber {
        /// Name of the field being read
        field: &'static str,
        /// The offending token
        token: String,
    },
}

/// Result type used throughout the satchel codebase.
pub type SatchelResult<T> = Result<T, SatchelError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Inventory configuration constants.
pub mod config {
    /// Number of inventory slots used when no valid size is requested
    pub const DEFAULT_INVENTORY_SIZE: usize = 10;

    /// Maximum identical units one stack may hold unless configured otherwise
    pub const DEFAULT_STACK_CAPACITY: u32 = 64;
}
