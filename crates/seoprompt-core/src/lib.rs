//! Core types for the seoprompt generator.
//!
//! This crate provides the types shared by every seoprompt component:
//! - Raw form values (FormInput)
//! - The validated render input (PromptRequest)
//! - The render output (RenderedPrompt)
//! - Validation errors for missing required fields

mod error;
mod request;
mod rendered;

pub use error::{RequiredField, ValidationError};
pub use request::{FormInput, PromptRequest, KEYWORD_FALLBACK};
pub use rendered::RenderedPrompt;
