//! Template registry and metadata

use serde::Serialize;
use shared_types::{DocumentType, Feature, SubscriptionTier};

use super::{optional_fields, required_fields};

/// Information about an available document type
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    /// Wire key (`foia`, `cease_desist`, ...)
    pub name: String,
    pub display_name: String,
    /// Human-readable description
    pub description: String,
    /// Feature the subscription tier must include
    pub feature: Feature,
    pub minimum_tier: SubscriptionTier,
    /// Whether a valid state must be selected
    pub state_dependent: bool,
    /// False for the rights card, which is requested as a state view
    pub templated: bool,
    /// Required input fields
    pub required_inputs: Vec<String>,
    /// Optional input fields
    pub optional_inputs: Vec<String>,
}

fn description(document_type: DocumentType) -> &'static str {
    match document_type {
        DocumentType::Foia => {
            "Freedom of Information request citing the selected state's public records statute and response deadline"
        }
        DocumentType::StatePrr => {
            "State public records request addressed to the agency's records custodian"
        }
        DocumentType::CeaseAndDesist => {
            "Cease and desist demand letter with legal basis, demands and compliance deadline"
        }
        DocumentType::NoticeOfClaim => {
            "Pre-suit notice of claim against a government entity under tort claims notice requirements"
        }
        DocumentType::SubpoenaDucesTecum => {
            "Subpoena commanding production of documents, with optional deposition and proof of service"
        }
        DocumentType::DiscoveryRequest => {
            "Interrogatories, requests for production or requests for admission with certificate of service"
        }
        DocumentType::KnowYourRightsCard => {
            "Wallet card summarizing stop-and-identify, recording and cannabis law for the selected state"
        }
    }
}

fn to_strings(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

pub fn template_info(document_type: DocumentType) -> TemplateInfo {
    let feature = document_type.required_feature();
    TemplateInfo {
        name: document_type.key().to_string(),
        display_name: document_type.display_name().to_string(),
        description: description(document_type).to_string(),
        feature,
        minimum_tier: feature.minimum_tier(),
        state_dependent: document_type.is_state_dependent(),
        templated: document_type != DocumentType::KnowYourRightsCard,
        required_inputs: to_strings(required_fields(document_type)),
        optional_inputs: to_strings(optional_fields(document_type)),
    }
}

/// List all available document types
pub fn list_templates() -> Vec<TemplateInfo> {
    DocumentType::ALL.into_iter().map(template_info).collect()
}
