//! Civil-rights legal document generation
//!
//! This crate turns a subscription tier, a document type, a selected state
//! and a bag of form fields into a ready-to-send legal document:
//! - Feature gating by subscription tier
//! - Required-field validation (every missing field reported at once)
//! - State-law lookup for public records requests and rights cards
//! - Declarative clause templates for each document type
//!
//! Dates come from an injected [`Clock`], so output is reproducible under a
//! [`FixedClock`].

pub mod clock;
pub mod document;
pub mod errors;
pub mod fields;
pub mod generator;
pub mod templates;

pub use clock::{Clock, FixedClock, SystemClock};
pub use document::GeneratedDocument;
pub use errors::GenerationError;
pub use fields::{FieldBag, FieldValue};
pub use generator::{DocumentGenerator, GenerationRequest};
pub use templates::registry::{list_templates, template_info, TemplateInfo};
pub use templates::rights_card::RightsCard;
