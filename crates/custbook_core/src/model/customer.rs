//! Customer domain model.
//!
//! # Responsibility
//! - Define the validated customer record shared by queries and export.
//! - Run one shared validator per fallible field from both the constructor
//!   and the matching setter.
//!
//! # Invariants
//! - `name` is never empty.
//! - `email` always contains at least one `@`.
//! - `date_of_birth` is a real calendar date; it is parsed once at
//!   construction and never re-derived.
//! - `id` and `date_of_birth` do not change after construction.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input format accepted for `date_of_birth`.
const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

/// Validation failure for a single customer field.
///
/// Each variant names the offending field and carries enough context to
/// tell the caller what was expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerValidationError {
    /// `name` was empty.
    EmptyName,
    /// `email` did not contain an `@`.
    InvalidEmail { value: String },
    /// `date_of_birth` did not parse as `YYYY-MM-DD`.
    InvalidDateOfBirth { value: String },
}

impl Display for CustomerValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must be non-empty"),
            Self::InvalidEmail { value } => {
                write!(f, "email `{value}` must contain an `@`")
            }
            Self::InvalidDateOfBirth { value } => {
                write!(
                    f,
                    "date of birth `{value}` must be a calendar date in the format YYYY-MM-DD"
                )
            }
        }
    }
}

impl Error for CustomerValidationError {}

/// One customer's validated field set.
///
/// Fields stay private so no caller can bypass validation; reads go through
/// accessors, writes through the fallible setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    /// Caller-supplied identifier. Not required to be unique.
    id: i64,
    name: String,
    email: String,
    phone_number: String,
    /// Serialized as `YYYY-MM-DD` (chrono's ISO 8601 date form).
    date_of_birth: NaiveDate,
    address: String,
}

impl Customer {
    /// Creates a validated customer record.
    ///
    /// Validation runs field by field in a fixed order (name, email,
    /// date of birth) and fails before any record state exists.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is empty.
    /// - `InvalidEmail` when `email` has no `@`.
    /// - `InvalidDateOfBirth` when `date_of_birth` is not `YYYY-MM-DD` or
    ///   not a real calendar date.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        date_of_birth: &str,
        address: impl Into<String>,
    ) -> Result<Self, CustomerValidationError> {
        let name = validate_name(name.into())?;
        let email = validate_email(email.into())?;
        let date_of_birth = parse_date_of_birth(date_of_birth)?;

        Ok(Self {
            id,
            name,
            email,
            phone_number: phone_number.into(),
            date_of_birth,
            address: address.into(),
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Date of birth as fixed at construction.
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Replaces `name` after running the constructor's validator.
    ///
    /// The prior value is kept unchanged on failure.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CustomerValidationError> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    /// Replaces `email` after running the constructor's validator.
    ///
    /// The prior value is kept unchanged on failure.
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), CustomerValidationError> {
        self.email = validate_email(email.into())?;
        Ok(())
    }

    /// Replaces `phone_number`. Any text is a valid phone number here.
    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.phone_number = phone_number.into();
    }

    /// Replaces `address`. Any text is a valid address.
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    /// Calendar age in whole years as of `as_of`.
    ///
    /// # Contract
    /// - `years = as_of.year - dob.year`, minus one when the `(month, day)`
    ///   pair of `as_of` orders before the pair of `date_of_birth`.
    /// - On the birthday itself the year counts (no subtraction).
    pub fn age_as_of(&self, as_of: NaiveDate) -> i32 {
        let dob = self.date_of_birth;
        let mut years = as_of.year() - dob.year();
        if (as_of.month(), as_of.day()) < (dob.month(), dob.day()) {
            years -= 1;
        }
        years
    }

    /// Calendar age in whole years as of the local date today.
    pub fn age(&self) -> i32 {
        self.age_as_of(Local::now().date_naive())
    }
}

impl Display for Customer {
    /// Deterministic debug/display rendering with all six fields in the
    /// fixed order id, name, email, phone_number, date_of_birth, address.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Customer(id={}, name={}, email={}, phone_number={}, date_of_birth={}, address={})",
            self.id,
            self.name,
            self.email,
            self.phone_number,
            self.date_of_birth.format(DATE_OF_BIRTH_FORMAT),
            self.address
        )
    }
}

fn validate_name(name: String) -> Result<String, CustomerValidationError> {
    if name.is_empty() {
        return Err(CustomerValidationError::EmptyName);
    }
    Ok(name)
}

fn validate_email(email: String) -> Result<String, CustomerValidationError> {
    // Minimal syntactic check only, not RFC address validation.
    if !email.contains('@') {
        return Err(CustomerValidationError::InvalidEmail { value: email });
    }
    Ok(email)
}

fn parse_date_of_birth(value: &str) -> Result<NaiveDate, CustomerValidationError> {
    NaiveDate::parse_from_str(value, DATE_OF_BIRTH_FORMAT).map_err(|_| {
        CustomerValidationError::InvalidDateOfBirth {
            value: value.to_string(),
        }
    })
}
