//! In-memory customer collection
//!
//! Thin collaborator over a `Vec<Customer>`: list scans only. Duplicate
//! detection is by normalized email, case-insensitive. Lifetime of records is
//! owned here; removal from the collection destroys the record.

use thiserror::Error;

use crate::record::{Customer, VariantKind};

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Errors raised by the customer directory
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DirectoryError {
    /// A customer with the same email already exists
    #[error("a customer with email '{email}' already exists")]
    DuplicateEmail {
        /// Normalized email of the rejected record
        email: String,
    },

    /// No customer with the given email
    #[error("no customer found with email '{email}'")]
    NotFound {
        /// Email that was looked up
        email: String,
    },
}

/// Per-variant record counts for summary output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VariantCounts {
    pub standard: usize,
    pub loyalty: usize,
    pub corporate: usize,
}

impl VariantCounts {
    /// Total records counted.
    pub fn total(&self) -> usize {
        self.standard + self.loyalty + self.corporate
    }
}

/// Collection of customer records with duplicate-email protection.
#[derive(Debug, Default)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory over already-decoded records.
    ///
    /// Duplicates in the input are kept as-is; the stored list is trusted the
    /// same way decoded field values are.
    pub fn from_customers(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    /// Adds a record, rejecting a duplicate email (case-insensitive).
    pub fn add(&mut self, customer: Customer) -> DirectoryResult<()> {
        let email = customer.profile().email();
        if self.find_by_email(email).is_some() {
            return Err(DirectoryError::DuplicateEmail {
                email: email.to_string(),
            });
        }
        self.customers.push(customer);
        Ok(())
    }

    /// Finds a record by email, case-insensitively.
    pub fn find_by_email(&self, email: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|c| c.profile().email().eq_ignore_ascii_case(email.trim()))
    }

    /// Finds a record by email for mutation.
    pub fn find_by_email_mut(&mut self, email: &str) -> Option<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|c| c.profile().email().eq_ignore_ascii_case(email.trim()))
    }

    /// Returns every record whose name contains the query,
    /// case-insensitively.
    pub fn search_by_name(&self, query: &str) -> Vec<&Customer> {
        let needle = query.trim().to_lowercase();
        self.customers
            .iter()
            .filter(|c| c.profile().name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Removes the record with the given email. Returns whether one was
    /// removed.
    pub fn remove_by_email(&mut self, email: &str) -> bool {
        let before = self.customers.len();
        self.customers
            .retain(|c| !c.profile().email().eq_ignore_ascii_case(email.trim()));
        self.customers.len() != before
    }

    /// Returns the records of one variant.
    pub fn of_variant(&self, kind: VariantKind) -> Vec<&Customer> {
        self.customers.iter().filter(|c| c.kind() == kind).collect()
    }

    /// Returns all records in insertion order.
    pub fn list(&self) -> &[Customer] {
        &self.customers
    }

    /// Counts records per variant.
    pub fn counts(&self) -> VariantCounts {
        let mut counts = VariantCounts::default();
        for customer in &self.customers {
            match customer.kind() {
                VariantKind::Standard => counts.standard += 1,
                VariantKind::Loyalty => counts.loyalty += 1,
                VariantKind::Corporate => counts.corporate += 1,
            }
        }
        counts
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
