//! Roster Module
//!
//! Validation and roll number generation in front of the record store.
//!
//! ## Responsibilities
//! - Validate every form before the store is touched
//! - Produce the next roll number from the store's current state
//! - Route commands to the store
//!
//! ## Roll Number Generation
//! Generation reads the store and formats; it writes nothing. Call it right
//! before inserting. Under `RollNoStrategy::RowCount` the sequence comes from
//! the row count, so once a record is deleted a new roll number can repeat
//! an existing one. `RollNoStrategy::Counter` reads a persisted high-water
//! mark instead and never reissues.

use crate::command::{Command, Outcome};
use crate::config::{Config, RollNoStrategy};
use crate::error::{Result, RosterError};
use crate::model::{RollNo, StudentForm, StudentRecord};
use crate::store::RecordStore;
use crate::validation;

/// Validation & identifier service over an injected `RecordStore`
#[derive(Debug, Clone)]
pub struct Roster {
    /// Roster configuration
    config: Config,

    /// Persistent student table
    store: RecordStore,
}

impl Roster {
    /// Build a roster over the store described by `config` and ensure its schema
    pub fn open(config: Config) -> Result<Self> {
        let store = RecordStore::new(&config);
        Self::with_store(config, store)
    }

    /// Build a roster over an existing store handle and ensure its schema
    pub fn with_store(config: Config, store: RecordStore) -> Result<Self> {
        store.ensure_schema()?;
        tracing::debug!(
            path = %store.path().display(),
            strategy = ?config.roll_no_strategy,
            "roster opened"
        );
        Ok(Self { config, store })
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Outcome> {
        match command {
            Command::Add { form } => {
                let roll_no = self.add_student(&form)?;
                Ok(Outcome::Added { roll_no })
            }
            Command::Update { roll_no, form } => {
                let rows = self.update_student(&roll_no, &form)?;
                Ok(Outcome::Updated { roll_no, rows })
            }
            Command::Delete { roll_no } => {
                let (roll_no, rows) = self.delete_checked(&roll_no)?;
                Ok(Outcome::Deleted { roll_no, rows })
            }
            Command::List => Ok(Outcome::Listed(self.list_students()?)),
        }
    }

    /// Next roll number for an insert
    ///
    /// Steps:
    /// 1. Read the current sequence source (row count or high-water mark)
    /// 2. Add one
    /// 3. Format as `22CSR` + 3 digits
    pub fn generate_roll_no(&self) -> Result<RollNo> {
        let current = match self.config.roll_no_strategy {
            RollNoStrategy::RowCount => self.store.count()?,
            RollNoStrategy::Counter => self.store.last_sequence()?,
        };
        let sequence = current + 1;

        RollNo::from_sequence(sequence).ok_or(RosterError::SequenceExhausted { sequence })
    }

    /// Validate a form and insert it under a fresh roll number
    pub fn add_student(&self, form: &StudentForm) -> Result<RollNo> {
        let fields = validation::validate(form, None)?;
        let roll_no = self.generate_roll_no()?;
        self.store.insert(roll_no.as_str(), &fields)?;
        Ok(roll_no)
    }

    /// Validate a form and its target roll number, then update
    ///
    /// Returns rows changed; 0 means no record had that roll number. An
    /// empty roll number skips the format check and matches nothing.
    pub fn update_student(&self, roll_no: &str, form: &StudentForm) -> Result<usize> {
        let fields = validation::validate(form, Some(roll_no))?;
        Ok(self.store.update(roll_no, &fields)?)
    }

    /// Validate a roll number, then delete
    ///
    /// Returns rows removed; 0 means no record had that roll number.
    pub fn delete_student(&self, roll_no: &str) -> Result<usize> {
        let (_, rows) = self.delete_checked(roll_no)?;
        Ok(rows)
    }

    /// Every record, ordered by id
    pub fn list_students(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.store.list_all()?)
    }

    /// Shared delete path: format check, then delete
    fn delete_checked(&self, raw: &str) -> Result<(RollNo, usize)> {
        let roll_no = validation::validate_roll_no(raw)?;
        let rows = self.store.delete(roll_no.as_str())?;
        Ok((roll_no, rows))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the underlying store
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
