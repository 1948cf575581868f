//! Prompt domain
//!
//! Instruction templates sent to the generative model.

mod template;

pub use template::PromptTemplate;
