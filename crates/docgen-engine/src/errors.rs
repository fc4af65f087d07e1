//! Error types for document generation

use shared_types::{DocumentType, Feature, SubscriptionTier, UnknownDocumentTypeError};
use state_law::UnknownStateError;
use thiserror::Error;

/// Why a document could not be generated. Every variant is a problem with
/// the caller's input; retrying the same request fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("{} require {} subscription", .feature.display_name(), .required_tier.upgrade_label())]
    AccessDenied {
        feature: Feature,
        required_tier: SubscriptionTier,
    },

    #[error("Please fill in required fields: {}", .missing_fields.join(", "))]
    Validation { missing_fields: Vec<String> },

    #[error("Unknown state: {state}")]
    UnknownState { state: String },

    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),

    #[error("{} is not a templated document; request it as a rights card", .0.display_name())]
    NotTemplated(DocumentType),
}

impl GenerationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            GenerationError::AccessDenied { .. } => "ACCESS_DENIED",
            GenerationError::Validation { .. } => "VALIDATION_ERROR",
            GenerationError::UnknownState { .. } => "UNKNOWN_STATE",
            GenerationError::UnknownDocumentType(_) => "UNKNOWN_DOCUMENT_TYPE",
            GenerationError::NotTemplated(_) => "NOT_TEMPLATED",
        }
    }

    pub fn access_denied(feature: Feature) -> Self {
        GenerationError::AccessDenied {
            feature,
            required_tier: feature.minimum_tier(),
        }
    }
}

impl From<UnknownStateError> for GenerationError {
    fn from(err: UnknownStateError) -> Self {
        GenerationError::UnknownState { state: err.state }
    }
}

impl From<UnknownDocumentTypeError> for GenerationError {
    fn from(err: UnknownDocumentTypeError) -> Self {
        GenerationError::UnknownDocumentType(err.0)
    }
}
