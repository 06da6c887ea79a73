//! Form input and render request types.

use serde::{Deserialize, Serialize};

use crate::error::{RequiredField, ValidationError};

/// Keyword value substituted when the keyword field is left blank.
///
/// Asks the downstream model to recommend a keyword itself.
pub const KEYWORD_FALLBACK: &str = "추천해줘";

/// Raw values of the four form fields, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub source_content: String,
    pub target_audience: String,
    pub target_keyword: String,
    pub tone: String,
}

impl FormInput {
    pub fn new(
        source_content: impl Into<String>,
        target_audience: impl Into<String>,
        target_keyword: impl Into<String>,
        tone: impl Into<String>,
    ) -> Self {
        Self {
            source_content: source_content.into(),
            target_audience: target_audience.into(),
            target_keyword: target_keyword.into(),
            tone: tone.into(),
        }
    }

    fn value_of(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::SourceContent => &self.source_content,
            RequiredField::TargetAudience => &self.target_audience,
            RequiredField::Tone => &self.tone,
        }
    }

    /// First required field that is blank after trimming, in check order.
    pub fn first_missing(&self) -> Option<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .find(|field| self.value_of(*field).trim().is_empty())
    }
}

/// Validated, normalized input for a single render.
///
/// All fields are trimmed and the keyword is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub source_content: String,
    pub target_audience: String,
    pub target_keyword: String,
    pub tone: String,
}

impl PromptRequest {
    /// Validate and normalize raw form values.
    ///
    /// Required fields are checked in the order source content, target
    /// audience, tone; the first blank one is reported.
    pub fn from_form(form: &FormInput) -> Result<Self, ValidationError> {
        if let Some(field) = form.first_missing() {
            return Err(ValidationError::MissingField(field));
        }

        let keyword = form.target_keyword.trim();
        let target_keyword = if keyword.is_empty() {
            KEYWORD_FALLBACK
        } else {
            keyword
        };

        Ok(Self {
            source_content: form.source_content.trim().to_string(),
            target_audience: form.target_audience.trim().to_string(),
            target_keyword: target_keyword.to_string(),
            tone: form.tone.trim().to_string(),
        })
    }

    pub fn uses_keyword_fallback(&self) -> bool {
        self.target_keyword == KEYWORD_FALLBACK
    }
}
