//! Store Module
//!
//! Durable persistence of student records in a single SQLite file.
//!
//! ## Responsibilities
//! - Idempotent schema creation
//! - Insert, full-table scan, update and delete keyed by roll number
//! - Optional roll number high-water mark (see `RollNoStrategy::Counter`)
//!
//! ## Table Layout
//! ```text
//! students
//! ┌────┬─────────┬──────┬───────┬─────┬────────┐
//! │ id │ roll_no │ name │ email │ age │ gender │
//! └────┴─────────┴──────┴───────┴─────┴────────┘
//!   INTEGER PRIMARY KEY AUTOINCREMENT, remaining columns NOT NULL
//! ```
//!
//! ## Connections
//! Every operation opens its own connection and drops it before returning,
//! on success and on error alike. Nothing is cached between calls, so each
//! read sees whatever is committed at that moment.

mod schema;
mod record_store;

pub use record_store::{RecordStore, StoreResult};
