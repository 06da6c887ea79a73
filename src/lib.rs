pub mod cli;
pub mod config;
pub mod shell;

// Re-export core types for convenience
pub use seoprompt_core::{FormInput, PromptRequest, RenderedPrompt, RequiredField, ValidationError};
pub use seoprompt_prompt::{render_seo_prompt, PromptRenderer, SeoPromptRenderer};
pub use shell::{PromptShell, Submission};
