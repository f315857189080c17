//! Domain model for customer records.
//!
//! # Responsibility
//! - Define the canonical validated customer record.
//! - Keep every reachable mutation path behind field validation.
//!
//! # Invariants
//! - A `Customer` that exists satisfies every field predicate.
//! - `id` and `date_of_birth` are fixed at construction.

pub mod customer;
