use serde::{Deserialize, Serialize};

use super::priority::PriorityWeight;
use crate::constants::DEFAULT_TOPIC;
use crate::errors::ValidationError;

/// Answer shape of a question. Each variant carries only the fields that apply to it.
/// Invalid variants are rejected at construction and during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", try_from = "QuestionKindRepr")]
pub enum QuestionKind {
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<u32>,
    },
    Rating {
        max_rating: u8,
    },
    MultipleChoice {
        choices: Vec<String>,
        #[serde(default)]
        allow_other: bool,
    },
    YesNo,
    Scale {
        min_value: i32,
        max_value: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_label: Option<String>,
    },
    Checkbox {
        choices: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_selections: Option<u32>,
    },
}

impl QuestionKind {
    pub fn text() -> Self {
        Self::Text { max_length: None }
    }

    pub fn rating(max_rating: u8) -> Result<Self, ValidationError> {
        Self::Rating { max_rating }.validated()
    }

    pub fn multiple_choice<S: Into<String>>(
        choices: impl IntoIterator<Item = S>,
    ) -> Result<Self, ValidationError> {
        Self::MultipleChoice {
            choices: choices.into_iter().map(Into::into).collect(),
            allow_other: false,
        }
        .validated()
    }

    pub fn checkbox<S: Into<String>>(
        choices: impl IntoIterator<Item = S>,
    ) -> Result<Self, ValidationError> {
        Self::Checkbox {
            choices: choices.into_iter().map(Into::into).collect(),
            max_selections: None,
        }
        .validated()
    }

    pub fn scale(min_value: i32, max_value: i32) -> Result<Self, ValidationError> {
        Self::Scale {
            min_value,
            max_value,
            min_label: None,
            max_label: None,
        }
        .validated()
    }

    /// The wire name of this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Rating { .. } => "rating",
            Self::MultipleChoice { .. } => "multiple_choice",
            Self::YesNo => "yes_no",
            Self::Scale { .. } => "scale",
            Self::Checkbox { .. } => "checkbox",
        }
    }

    /// Check the variant-specific invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let invalid = |reason: String| {
            Err(ValidationError::InvalidQuestionKind {
                kind: self.name(),
                reason,
            })
        };
        match self {
            Self::Rating { max_rating } if *max_rating < 2 => {
                invalid(format!("max_rating must be at least 2, got {max_rating}"))
            }
            Self::MultipleChoice { choices, .. } | Self::Checkbox { choices, .. }
                if choices.len() < 2 =>
            {
                invalid(format!("at least 2 choices required, got {}", choices.len()))
            }
            Self::Checkbox {
                choices,
                max_selections: Some(max),
            } if *max == 0 || *max as usize > choices.len() => invalid(format!(
                "max_selections must be within 1..={}, got {max}",
                choices.len()
            )),
            Self::Scale {
                min_value,
                max_value,
                ..
            } if min_value >= max_value => invalid(format!(
                "min_value {min_value} must be below max_value {max_value}"
            )),
            _ => Ok(()),
        }
    }

    fn validated(self) -> Result<Self, ValidationError> {
        self.validate()?;
        Ok(self)
    }
}

impl Default for QuestionKind {
    fn default() -> Self {
        Self::text()
    }
}

/// Unchecked wire shape; converted into `QuestionKind` through validation.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum QuestionKindRepr {
    Text {
        #[serde(default)]
        max_length: Option<u32>,
    },
    Rating {
        max_rating: u8,
    },
    MultipleChoice {
        choices: Vec<String>,
        #[serde(default)]
        allow_other: bool,
    },
    YesNo,
    Scale {
        min_value: i32,
        max_value: i32,
        #[serde(default)]
        min_label: Option<String>,
        #[serde(default)]
        max_label: Option<String>,
    },
    Checkbox {
        choices: Vec<String>,
        #[serde(default)]
        max_selections: Option<u32>,
    },
}

impl TryFrom<QuestionKindRepr> for QuestionKind {
    type Error = ValidationError;

    fn try_from(repr: QuestionKindRepr) -> Result<Self, Self::Error> {
        let kind = match repr {
            QuestionKindRepr::Text { max_length } => Self::Text { max_length },
            QuestionKindRepr::Rating { max_rating } => Self::Rating { max_rating },
            QuestionKindRepr::MultipleChoice {
                choices,
                allow_other,
            } => Self::MultipleChoice {
                choices,
                allow_other,
            },
            QuestionKindRepr::YesNo => Self::YesNo,
            QuestionKindRepr::Scale {
                min_value,
                max_value,
                min_label,
                max_label,
            } => Self::Scale {
                min_value,
                max_value,
                min_label,
                max_label,
            },
            QuestionKindRepr::Checkbox {
                choices,
                max_selections,
            } => Self::Checkbox {
                choices,
                max_selections,
            },
        };
        kind.validated()
    }
}

/// A candidate question. Read-only input to the selector and the grouper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Opaque unique identifier.
    pub id: String,
    /// Spoken content.
    pub text: String,
    pub priority_weight: PriorityWeight,
    /// Explicit spoken duration. Derived from `estimated_tokens` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_category: Option<String>,
    /// Generic category, fallback for `topic_category`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub kind: QuestionKind,
}

impl Question {
    /// Create a free-text question with the given priority (1–5).
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        priority: u8,
    ) -> Result<Self, ValidationError> {
        let question = Self {
            id: id.into(),
            text: text.into(),
            priority_weight: PriorityWeight::new(priority)?,
            estimated_duration_seconds: None,
            estimated_tokens: None,
            topic_category: None,
            category: None,
            keywords: Vec::new(),
            kind: QuestionKind::default(),
        };
        question.validate()?;
        Ok(question)
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.estimated_duration_seconds = Some(seconds);
        self
    }

    pub fn with_tokens(mut self, tokens: u32) -> Self {
        self.estimated_tokens = Some(tokens);
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic_category = Some(topic.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_kind(mut self, kind: QuestionKind) -> Self {
        self.kind = kind;
        self
    }

    /// `topic_category`, else `category`, else `"general"`.
    pub fn effective_topic(&self) -> &str {
        self.topic_category
            .as_deref()
            .or(self.category.as_deref())
            .unwrap_or(DEFAULT_TOPIC)
    }

    pub fn priority(&self) -> u8 {
        self.priority_weight.value()
    }

    /// Check field-level invariants that builders cannot enforce.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::InvalidQuestion {
                id: self.id.clone(),
                reason: "id must not be empty".to_string(),
            });
        }
        if let Some(d) = self.estimated_duration_seconds {
            if !d.is_finite() || d < 0.0 {
                return Err(ValidationError::InvalidQuestion {
                    id: self.id.clone(),
                    reason: format!("estimated_duration_seconds must be finite and >= 0, got {d}"),
                });
            }
        }
        self.kind.validate()
    }
}
