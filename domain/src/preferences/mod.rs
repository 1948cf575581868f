//! User preference domain.
//!
//! A [`Preferences`] record is always replaced wholesale, never merged.

pub mod entities;
pub mod personalize;
