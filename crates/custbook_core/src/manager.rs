//! Customer collection manager.
//!
//! # Responsibility
//! - Own the in-memory, insertion-ordered sequence of customer records.
//! - Provide add/remove, filter queries and flat-file export entry points.
//!
//! # Invariants
//! - Insertion order is preserved by every operation and query result.
//! - Queries never mutate the collection.
//! - Stored records are only reachable through this manager's API.

use crate::export::{export_customers, ExportFormat, ExportResult};
use crate::model::customer::Customer;
use chrono::{Local, NaiveDate};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type ManagerResult<T> = Result<T, ManagerError>;

/// Collection-level error for customer management operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerError {
    /// No stored record compared equal to the removal target.
    NotFound { id: i64 },
}

impl Display for ManagerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "customer not found: id={id}"),
        }
    }
}

impl Error for ManagerError {}

/// Owner of the in-memory customer sequence.
///
/// Duplicates are permitted; identifiers are not required to be unique.
#[derive(Debug, Default)]
pub struct CustomerManager {
    customers: Vec<Customer>,
}

impl CustomerManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the end of the sequence.
    ///
    /// No duplicate check is performed.
    pub fn add_customer(&mut self, customer: Customer) {
        debug!(
            "event=customer_added module=manager id={} total={}",
            customer.id(),
            self.customers.len() + 1
        );
        self.customers.push(customer);
    }

    /// Removes the first stored record equal to `customer`.
    ///
    /// Equality is whole-record value equality, not identifier lookup.
    ///
    /// # Errors
    /// - `NotFound` when no stored record compares equal.
    pub fn remove_customer(&mut self, customer: &Customer) -> ManagerResult<()> {
        let position = self
            .customers
            .iter()
            .position(|stored| stored == customer)
            .ok_or(ManagerError::NotFound { id: customer.id() })?;

        self.customers.remove(position);
        debug!(
            "event=customer_removed module=manager id={} total={}",
            customer.id(),
            self.customers.len()
        );
        Ok(())
    }

    /// Records whose calendar age today falls within `min_age..=max_age`.
    ///
    /// Bounds are inclusive on both ends; insertion order is preserved.
    pub fn customers_by_age_range(&self, min_age: i32, max_age: i32) -> Vec<&Customer> {
        self.customers_by_age_range_as_of(min_age, max_age, Local::now().date_naive())
    }

    /// Age-range query pinned to an explicit evaluation date.
    pub fn customers_by_age_range_as_of(
        &self,
        min_age: i32,
        max_age: i32,
        as_of: NaiveDate,
    ) -> Vec<&Customer> {
        self.customers
            .iter()
            .filter(|customer| {
                let age = customer.age_as_of(as_of);
                min_age <= age && age <= max_age
            })
            .collect()
    }

    /// Records whose address equals `address` exactly (case-sensitive,
    /// no normalization); insertion order is preserved.
    pub fn customers_by_address(&self, address: &str) -> Vec<&Customer> {
        self.customers
            .iter()
            .filter(|customer| customer.address() == address)
            .collect()
    }

    /// Exports the entire current collection to `path`.
    ///
    /// `format` is a caller-supplied name (`csv` or `json`); `delimiter`
    /// applies to CSV only.
    ///
    /// # Errors
    /// - `UnsupportedFormat` for an unknown format name; nothing is written.
    /// - `Io` when the rendered document cannot be written. I/O failures are
    ///   reported, never propagated as a panic.
    pub fn export_data(
        &self,
        path: impl AsRef<Path>,
        format: &str,
        delimiter: char,
    ) -> ExportResult<()> {
        let format = ExportFormat::parse(format)?;
        export_customers(path.as_ref(), &self.customers, format, delimiter)
    }

    /// Read-only view of the stored sequence, in insertion order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
