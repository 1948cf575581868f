//! Use cases (application services)
//!
//! Each use case orchestrates one user-triggered interaction against the
//! ports. All calls are sequential; a failed external call is terminal for
//! that interaction.

pub mod analyze_meal;
pub mod capture_speech;
pub mod converse;
pub mod extract_image;
pub mod run_turn;

#[cfg(test)]
pub(crate) mod test_support;
