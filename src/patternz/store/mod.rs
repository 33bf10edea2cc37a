//! # Customer Storage Layer
//!
//! This module defines the implementor side of the customer browser. The
//! [`CustomerStore`] trait is the full capability set the browser delegates to:
//! moving a cursor, mutating the record list and writing records out.
//!
//! The browser in [`crate::customers`] only knows this trait. Swapping the
//! backing store never touches the browser, and changing how the browser frames
//! its output never touches the store.
//!
//! ## Implementations
//!
//! - [`memory::CustomersData`]: an in-memory ordered list seeded with sample
//!   customers. It is the only variant.
//!
//! ## Cursor Rules
//!
//! The cursor is clamped to `[0, len-1]`. Moving past either end is a no-op,
//! never a wrap-around. Reading the current record of an empty list returns
//! [`PatternzError::NoCurrentRecord`](crate::error::PatternzError::NoCurrentRecord).

use crate::error::Result;
use crate::output::Output;

pub mod memory;

/// Abstract interface for customer record storage.
pub trait CustomerStore {
    /// Advance the cursor, stopping at the last record
    fn next_record(&mut self);

    /// Move the cursor back, stopping at the first record
    fn prior_record(&mut self);

    /// Append a record
    fn add_record(&mut self, name: &str);

    /// Remove the first record equal to `name`, if any
    fn delete_record(&mut self, name: &str);

    /// Write the record under the cursor
    fn show_record(&self, out: &mut Output) -> Result<()>;

    /// Write every record in order
    fn show_all_records(&self, out: &mut Output);

    /// Write the final record, ignoring the cursor
    fn last_record(&self, out: &mut Output) -> Result<()>;

    /// All records in order
    fn records(&self) -> &[String];

    /// Current cursor index
    fn position(&self) -> usize;

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
