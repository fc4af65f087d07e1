use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::subscription::Feature;

/// Every document the generator knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "foia")]
    Foia,
    #[serde(rename = "state_prr")]
    StatePrr,
    #[serde(rename = "cease_desist")]
    CeaseAndDesist,
    #[serde(rename = "notice_claim")]
    NoticeOfClaim,
    #[serde(rename = "subpoena")]
    SubpoenaDucesTecum,
    #[serde(rename = "discovery")]
    DiscoveryRequest,
    #[serde(rename = "id_card")]
    KnowYourRightsCard,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown document type: {0}")]
pub struct UnknownDocumentTypeError(pub String);

impl DocumentType {
    pub const ALL: [DocumentType; 7] = [
        DocumentType::Foia,
        DocumentType::StatePrr,
        DocumentType::CeaseAndDesist,
        DocumentType::NoticeOfClaim,
        DocumentType::SubpoenaDucesTecum,
        DocumentType::DiscoveryRequest,
        DocumentType::KnowYourRightsCard,
    ];

    /// Wire key, matching the serde representation
    pub fn key(&self) -> &'static str {
        match self {
            DocumentType::Foia => "foia",
            DocumentType::StatePrr => "state_prr",
            DocumentType::CeaseAndDesist => "cease_desist",
            DocumentType::NoticeOfClaim => "notice_claim",
            DocumentType::SubpoenaDucesTecum => "subpoena",
            DocumentType::DiscoveryRequest => "discovery",
            DocumentType::KnowYourRightsCard => "id_card",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentType::Foia => "FOIA Request",
            DocumentType::StatePrr => "State Public Records Request",
            DocumentType::CeaseAndDesist => "Cease and Desist Letter",
            DocumentType::NoticeOfClaim => "Notice of Claim",
            DocumentType::SubpoenaDucesTecum => "Subpoena Duces Tecum",
            DocumentType::DiscoveryRequest => "Discovery Request",
            DocumentType::KnowYourRightsCard => "Know-Your-Rights ID Card",
        }
    }

    /// Feature a tier must include before this document can be produced
    pub fn required_feature(&self) -> Feature {
        match self {
            DocumentType::Foia => Feature::Foia,
            DocumentType::StatePrr => Feature::StatePrr,
            DocumentType::CeaseAndDesist => Feature::CeaseDesist,
            DocumentType::NoticeOfClaim => Feature::NoticeClaim,
            DocumentType::SubpoenaDucesTecum => Feature::Subpoena,
            DocumentType::DiscoveryRequest => Feature::Discovery,
            DocumentType::KnowYourRightsCard => Feature::IdCard,
        }
    }

    /// Whether rendering needs the selected state's law facts
    pub fn is_state_dependent(&self) -> bool {
        matches!(
            self,
            DocumentType::Foia | DocumentType::StatePrr | DocumentType::KnowYourRightsCard
        )
    }

    /// Parse from the wire key or the variant name (case-insensitive).
    ///
    /// Accepts `"cease_desist"`, `"CeaseAndDesist"`, `"FOIA"`, `"StatePRR"`, etc.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "foia" => Some(DocumentType::Foia),
            "stateprr" => Some(DocumentType::StatePrr),
            "ceasedesist" | "ceaseanddesist" => Some(DocumentType::CeaseAndDesist),
            "noticeclaim" | "noticeofclaim" => Some(DocumentType::NoticeOfClaim),
            "subpoena" | "subpoenaducestecum" => Some(DocumentType::SubpoenaDucesTecum),
            "discovery" | "discoveryrequest" => Some(DocumentType::DiscoveryRequest),
            "idcard" | "knowyourrightscard" => Some(DocumentType::KnowYourRightsCard),
            _ => None,
        }
    }
}

impl FromStr for DocumentType {
    type Err = UnknownDocumentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::parse(s).ok_or_else(|| UnknownDocumentTypeError(s.to_string()))
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
