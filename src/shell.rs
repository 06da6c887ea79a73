//! Request/response handler between the form and the renderer.
//!
//! One call to [`PromptShell::submit`] corresponds to one press of the
//! generate button. Nothing is kept between calls.

use serde::Serialize;

use seoprompt_core::{FormInput, PromptRequest, RenderedPrompt, ValidationError};
use seoprompt_prompt::{PromptRenderer, SeoPromptRenderer};
use seoprompt_reports::{downloads_for, Download, DEFAULT_FILE_STEM};

/// Successful result of one submission.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub request: PromptRequest,
    pub prompt: RenderedPrompt,
    pub downloads: Vec<Download>,
}

impl Submission {
    pub fn keyword_fallback(&self) -> bool {
        self.request.uses_keyword_fallback()
    }
}

#[derive(Debug, Clone)]
pub struct PromptShell<R = SeoPromptRenderer> {
    renderer: R,
    file_stem: String,
}

impl PromptShell {
    /// Shell over the stock SEO renderer.
    pub fn standard() -> Self {
        Self::new(SeoPromptRenderer)
    }
}

impl Default for PromptShell {
    fn default() -> Self {
        Self::standard()
    }
}

impl<R: PromptRenderer> PromptShell<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            file_stem: DEFAULT_FILE_STEM.to_string(),
        }
    }

    /// Set the file name stem used for both downloads.
    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    /// Validate the form and render it.
    ///
    /// On a blank required field the renderer is not called.
    pub fn submit(&self, form: &FormInput) -> Result<Submission, ValidationError> {
        let request = PromptRequest::from_form(form).inspect_err(|e| {
            log::debug!("Rejected submission: {} is blank", e.field());
        })?;

        let prompt = self.renderer.render(&request);
        log::info!(
            "Rendered prompt: {} bytes (keyword fallback: {})",
            prompt.len(),
            request.uses_keyword_fallback()
        );

        let downloads = downloads_for(&prompt, &self.file_stem);

        Ok(Submission {
            request,
            prompt,
            downloads,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seoprompt_core::{RequiredField, KEYWORD_FALLBACK};

    #[test]
    fn test_submit_renders_valid_form() {
        let shell = PromptShell::standard();
        let form = FormInput::new("본문", "독자", "", "어조");

        let submission = shell.submit(&form).unwrap();

        assert!(submission.keyword_fallback());
        assert!(submission.prompt.as_str().contains(KEYWORD_FALLBACK));
        assert_eq!(submission.downloads.len(), 2);
        assert_eq!(submission.downloads[0].file_name, "seo_prompt.md");
    }

    #[test]
    fn test_submit_reports_first_missing_field() {
        let shell = PromptShell::standard();
        let form = FormInput::new("본문", "", "키워드", "");

        let err = shell.submit(&form).unwrap_err();
        assert_eq!(err.field(), RequiredField::TargetAudience);
    }

    #[test]
    fn test_custom_file_stem() {
        let shell = PromptShell::standard().with_file_stem("cafe/post");
        let submission = shell.submit(&FormInput::new("a", "b", "c", "d")).unwrap();

        assert_eq!(submission.downloads[0].file_name, "cafe-post.md");
        assert_eq!(submission.downloads[1].file_name, "cafe-post.txt");
    }
}
