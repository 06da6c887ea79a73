//! Prompt trait definitions.

use seoprompt_core::{PromptRequest, RenderedPrompt};

/// A prompt that can be rendered to a string.
pub trait Prompt {
    /// Render the prompt to a string suitable for LLM input.
    fn render(&self) -> String;
}

/// Turns a validated request into a rendered prompt.
///
/// Implementations must be pure: the same request always yields the same
/// bytes.
pub trait PromptRenderer {
    fn render(&self, request: &PromptRequest) -> RenderedPrompt;
}

impl<R: PromptRenderer + ?Sized> PromptRenderer for &R {
    fn render(&self, request: &PromptRequest) -> RenderedPrompt {
        (**self).render(request)
    }
}
