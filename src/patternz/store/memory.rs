use super::CustomerStore;
use crate::error::{PatternzError, Result};
use crate::output::Output;
use log::debug;

/// Sample customers every new store starts with.
pub const SEED_CUSTOMERS: &[&str] = &[
    "Jim Jones",
    "Samual Jackson",
    "Allen Good",
    "Ann Stills",
    "Lisa Giolani",
];

/// In-memory customer list with a cursor.
#[derive(Debug, Clone)]
pub struct CustomersData {
    customers: Vec<String>,
    current: usize,
}

impl Default for CustomersData {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomersData {
    /// A store seeded with [`SEED_CUSTOMERS`], cursor on the first record.
    pub fn new() -> Self {
        Self::with_records(SEED_CUSTOMERS.iter().copied())
    }

    pub fn with_records<I, T>(records: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            customers: records.into_iter().map(Into::into).collect(),
            current: 0,
        }
    }

    pub fn empty() -> Self {
        Self {
            customers: Vec::new(),
            current: 0,
        }
    }
}

impl CustomerStore for CustomersData {
    fn next_record(&mut self) {
        if self.current + 1 < self.customers.len() {
            self.current += 1;
        }
        debug!("cursor at {}", self.current);
    }

    fn prior_record(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
        debug!("cursor at {}", self.current);
    }

    fn add_record(&mut self, name: &str) {
        self.customers.push(name.to_string());
        debug!("added customer {:?}, {} records", name, self.customers.len());
    }

    fn delete_record(&mut self, name: &str) {
        let Some(pos) = self.customers.iter().position(|c| c == name) else {
            debug!("delete of unknown customer {:?} ignored", name);
            return;
        };
        self.customers.remove(pos);
        // keep the cursor on a valid record after shrinking
        if self.current >= self.customers.len() {
            self.current = self.customers.len().saturating_sub(1);
        }
        debug!("deleted customer {:?}, {} records", name, self.customers.len());
    }

    fn show_record(&self, out: &mut Output) -> Result<()> {
        let record = self
            .customers
            .get(self.current)
            .ok_or(PatternzError::NoCurrentRecord)?;
        out.plain(record.as_str());
        Ok(())
    }

    fn show_all_records(&self, out: &mut Output) {
        for customer in &self.customers {
            out.plain(format!(" {}", customer));
        }
    }

    fn last_record(&self, out: &mut Output) -> Result<()> {
        let record = self
            .customers
            .last()
            .ok_or(PatternzError::NoCurrentRecord)?;
        out.plain(record.as_str());
        Ok(())
    }

    fn records(&self) -> &[String] {
        &self.customers
    }

    fn position(&self) -> usize {
        self.current
    }
}
