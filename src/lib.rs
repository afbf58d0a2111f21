//! # Roster
//!
//! Student record lifecycle backed by SQLite:
//! - Roll number generation (`22CSR` + 3-digit sequence)
//! - Field validation in a fixed, deterministic order
//! - Create, list, update and delete keyed by roll number
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Presentation layer (CLI, UI)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                         Roster                               │
//! │          (validation + roll number generation)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ owns a handle
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      RecordStore                             │
//! │          (connection per call, `students` table)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod store;
pub mod validation;
pub mod command;
pub mod roster;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError, StorageError, ValidationError};
pub use config::{Config, RollNoStrategy};
pub use model::{Gender, RollNo, StudentFields, StudentForm, StudentRecord};
pub use store::RecordStore;
pub use roster::Roster;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the roster crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
