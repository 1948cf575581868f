//! Gemini adapter
//!
//! Implements [`GenerativeGateway`](calorie_application::GenerativeGateway)
//! over the Gemini `generateContent` REST endpoint.

pub mod gateway;
mod types;

pub use gateway::{GeminiConfig, GeminiGateway};
