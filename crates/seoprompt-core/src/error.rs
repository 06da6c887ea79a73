//! Validation error definitions.

use serde::{Deserialize, Serialize};

/// A form field that must be filled before a prompt can be rendered.
///
/// Variants are declared in the order they are checked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    SourceContent,
    TargetAudience,
    Tone,
}

impl RequiredField {
    /// All required fields in check order.
    pub const ALL: [RequiredField; 3] = [
        RequiredField::SourceContent,
        RequiredField::TargetAudience,
        RequiredField::Tone,
    ];

    /// Label shown next to the input on the form.
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::SourceContent => "원문 내용",
            RequiredField::TargetAudience => "타겟 독자",
            RequiredField::Tone => "톤앤매너",
        }
    }

    /// Message shown when the field is left blank.
    pub fn missing_message(&self) -> &'static str {
        match self {
            RequiredField::SourceContent => "원문 내용을 입력해주세요.",
            RequiredField::TargetAudience => "타겟 독자를 입력해주세요.",
            RequiredField::Tone => "톤앤매너를 입력해주세요.",
        }
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequiredField::SourceContent => write!(f, "source_content"),
            RequiredField::TargetAudience => write!(f, "target_audience"),
            RequiredField::Tone => write!(f, "tone"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", .0.missing_message())]
    MissingField(RequiredField),
}

impl ValidationError {
    pub fn field(&self) -> RequiredField {
        match self {
            ValidationError::MissingField(field) => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_messages() {
        assert_eq!(
            ValidationError::MissingField(RequiredField::SourceContent).to_string(),
            "원문 내용을 입력해주세요."
        );
        assert_eq!(
            ValidationError::MissingField(RequiredField::TargetAudience).to_string(),
            "타겟 독자를 입력해주세요."
        );
        assert_eq!(
            ValidationError::MissingField(RequiredField::Tone).to_string(),
            "톤앤매너를 입력해주세요."
        );
    }

    #[test]
    fn test_required_field_display() {
        assert_eq!(format!("{}", RequiredField::TargetAudience), "target_audience");
        assert_eq!(RequiredField::Tone.label(), "톤앤매너");
    }
}
