use crate::error::ValidationError;
use serde::Deserialize;

pub const MAX_QUESTION_CHARS: usize = 500;

/// Opaque card image. The mock grader never looks at the pixels; only the
/// payload size and an optional filename survive validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub filename: Option<String>,
    pub size: usize,
}

impl CardImage {
    pub fn from_upload(filename: Option<String>, bytes: &[u8]) -> Result<Self, ValidationError> {
        if bytes.is_empty() {
            return Err(ValidationError::Empty { field: "file" });
        }
        let filename = filename
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(Self {
            filename,
            size: bytes.len(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeCardRequest {
    pub image_data: Option<String>,
}

impl GradeCardRequest {
    pub fn validate_and_into_image(self) -> Result<CardImage, ValidationError> {
        let data = self
            .image_data
            .ok_or(ValidationError::Missing { field: "imageData" })?;
        let data = data.trim();
        if data.is_empty() {
            return Err(ValidationError::Empty { field: "imageData" });
        }
        Ok(CardImage {
            filename: None,
            size: data.len(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OracleRequest {
    pub question: Option<String>,
}

impl OracleRequest {
    pub fn validate_and_into_question(self) -> Result<String, ValidationError> {
        let question = self
            .question
            .ok_or(ValidationError::Missing { field: "question" })?;
        let question = question.trim();
        if question.is_empty() {
            return Err(ValidationError::Empty { field: "question" });
        }
        if question.chars().count() > MAX_QUESTION_CHARS {
            return Err(ValidationError::TooLong {
                field: "question",
                max: MAX_QUESTION_CHARS,
            });
        }
        Ok(question.to_string())
    }
}
