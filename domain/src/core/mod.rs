//! Core domain concepts shared across all subdomains.
//!
//! - [`model::GenerativeModel`]: the generative model used for answers
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
