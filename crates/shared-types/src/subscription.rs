//! Subscription tiers and feature gating
//!
//! Tiers form a strict superset chain: basic ⊂ professional ⊂ ultimate.
//! Ultimate is not listed feature by feature; it implicitly includes every
//! feature, including ones added later.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Basic,
    Professional,
    Ultimate,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown subscription tier: {0}")]
pub struct UnknownTierError(pub String);

/// Gated feature keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Foia,
    StatePrr,
    IdCard,
    PdfExport,
    PngExport,
    CeaseDesist,
    NoticeClaim,
    Presuit,
    Subpoena,
    Discovery,
    BulkGeneration,
    TeamWorkspace,
    CustomBranding,
    ApiAccess,
}

const BASIC_FEATURES: &[Feature] = &[
    Feature::Foia,
    Feature::StatePrr,
    Feature::IdCard,
    Feature::PdfExport,
    Feature::PngExport,
];

const PROFESSIONAL_FEATURES: &[Feature] = &[
    Feature::Foia,
    Feature::StatePrr,
    Feature::IdCard,
    Feature::PdfExport,
    Feature::PngExport,
    Feature::CeaseDesist,
    Feature::NoticeClaim,
    Feature::Presuit,
    Feature::Subpoena,
    Feature::Discovery,
    Feature::BulkGeneration,
];

impl SubscriptionTier {
    pub const ALL: [SubscriptionTier; 3] = [
        SubscriptionTier::Basic,
        SubscriptionTier::Professional,
        SubscriptionTier::Ultimate,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SubscriptionTier::Basic => "basic",
            SubscriptionTier::Professional => "professional",
            SubscriptionTier::Ultimate => "ultimate",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionTier::Basic => "Basic",
            SubscriptionTier::Professional => "Professional",
            SubscriptionTier::Ultimate => "Ultimate",
        }
    }

    /// Features enabled for this tier
    pub fn features(&self) -> Vec<Feature> {
        match self {
            SubscriptionTier::Basic => BASIC_FEATURES.to_vec(),
            SubscriptionTier::Professional => PROFESSIONAL_FEATURES.to_vec(),
            SubscriptionTier::Ultimate => Feature::ALL.to_vec(),
        }
    }

    /// "Professional or Ultimate" style label used in upgrade prompts
    pub fn upgrade_label(&self) -> String {
        let names: Vec<&str> = SubscriptionTier::ALL
            .iter()
            .filter(|tier| *tier >= self)
            .map(|tier| tier.display_name())
            .collect();
        names.join(" or ")
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Some(SubscriptionTier::Basic),
            "professional" => Some(SubscriptionTier::Professional),
            "ultimate" => Some(SubscriptionTier::Ultimate),
            _ => None,
        }
    }
}

impl FromStr for SubscriptionTier {
    type Err = UnknownTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubscriptionTier::parse(s).ok_or_else(|| UnknownTierError(s.to_string()))
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Feature {
    pub const ALL: [Feature; 14] = [
        Feature::Foia,
        Feature::StatePrr,
        Feature::IdCard,
        Feature::PdfExport,
        Feature::PngExport,
        Feature::CeaseDesist,
        Feature::NoticeClaim,
        Feature::Presuit,
        Feature::Subpoena,
        Feature::Discovery,
        Feature::BulkGeneration,
        Feature::TeamWorkspace,
        Feature::CustomBranding,
        Feature::ApiAccess,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Feature::Foia => "foia",
            Feature::StatePrr => "state_prr",
            Feature::IdCard => "id_card",
            Feature::PdfExport => "pdf_export",
            Feature::PngExport => "png_export",
            Feature::CeaseDesist => "cease_desist",
            Feature::NoticeClaim => "notice_claim",
            Feature::Presuit => "presuit",
            Feature::Subpoena => "subpoena",
            Feature::Discovery => "discovery",
            Feature::BulkGeneration => "bulk_generation",
            Feature::TeamWorkspace => "team_workspace",
            Feature::CustomBranding => "custom_branding",
            Feature::ApiAccess => "api_access",
        }
    }

    /// Plural, user-facing name ("Cease and Desist letters require ...")
    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::Foia => "FOIA requests",
            Feature::StatePrr => "State public records requests",
            Feature::IdCard => "Know-Your-Rights ID cards",
            Feature::PdfExport => "PDF exports",
            Feature::PngExport => "PNG exports",
            Feature::CeaseDesist => "Cease and Desist letters",
            Feature::NoticeClaim => "Notice of Claim documents",
            Feature::Presuit => "Pre-suit notices",
            Feature::Subpoena => "Subpoenas",
            Feature::Discovery => "Discovery requests",
            Feature::BulkGeneration => "Bulk document generation",
            Feature::TeamWorkspace => "Team workspaces",
            Feature::CustomBranding => "Custom branding",
            Feature::ApiAccess => "API access",
        }
    }

    /// Cheapest tier that includes this feature
    pub fn minimum_tier(&self) -> SubscriptionTier {
        SubscriptionTier::ALL
            .into_iter()
            .find(|tier| has_access(*tier, *self))
            .unwrap_or(SubscriptionTier::Ultimate)
    }

    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        Feature::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Is `feature` enabled for `tier`?
pub fn has_access(tier: SubscriptionTier, feature: Feature) -> bool {
    match tier {
        SubscriptionTier::Ultimate => true,
        SubscriptionTier::Basic => BASIC_FEATURES.contains(&feature),
        SubscriptionTier::Professional => PROFESSIONAL_FEATURES.contains(&feature),
    }
}

/// String form of [`has_access`]. Unknown tiers and unknown feature keys are
/// denied.
pub fn has_access_key(tier: &str, feature: &str) -> bool {
    match (SubscriptionTier::parse(tier), Feature::parse(feature)) {
        (Some(tier), Some(feature)) => has_access(tier, feature),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ultimate_has_every_feature() {
        for feature in Feature::ALL {
            assert!(has_access(SubscriptionTier::Ultimate, feature));
        }
    }

    #[test]
    fn test_subpoena_requires_professional() {
        assert!(!has_access(SubscriptionTier::Basic, Feature::Subpoena));
        assert!(has_access(SubscriptionTier::Professional, Feature::Subpoena));
        assert!(!has_access_key("basic", "subpoena"));
        assert!(has_access_key("professional", "subpoena"));
    }

    #[test]
    fn test_basic_features() {
        assert!(has_access(SubscriptionTier::Basic, Feature::Foia));
        assert!(has_access(SubscriptionTier::Basic, Feature::StatePrr));
        assert!(has_access(SubscriptionTier::Basic, Feature::IdCard));
        assert!(!has_access(SubscriptionTier::Basic, Feature::CeaseDesist));
        assert!(!has_access(SubscriptionTier::Basic, Feature::BulkGeneration));
    }

    #[test]
    fn test_feature_list_matches_gate() {
        for tier in SubscriptionTier::ALL {
            let enabled = tier.features();
            for feature in Feature::ALL {
                assert_eq!(enabled.contains(&feature), has_access(tier, feature));
            }
        }
        assert_eq!(SubscriptionTier::Basic.features().len(), 5);
    }

    #[test]
    fn test_ultimate_only_features() {
        assert!(!has_access(SubscriptionTier::Professional, Feature::ApiAccess));
        assert_eq!(Feature::ApiAccess.minimum_tier(), SubscriptionTier::Ultimate);
    }

    #[test]
    fn test_unknown_tier_fails_closed() {
        assert!(!has_access_key("enterprise", "foia"));
        assert!(!has_access_key("", "foia"));
        assert!(!has_access_key("ultimate", "time_travel"));
        assert!(!has_access_key("pro", "subpoena"));
        assert_eq!(SubscriptionTier::parse("pro"), None);
    }

    #[test]
    fn test_minimum_tier() {
        assert_eq!(Feature::Foia.minimum_tier(), SubscriptionTier::Basic);
        assert_eq!(
            Feature::CeaseDesist.minimum_tier(),
            SubscriptionTier::Professional
        );
    }

    #[test]
    fn test_upgrade_label() {
        assert_eq!(
            SubscriptionTier::Professional.upgrade_label(),
            "Professional or Ultimate"
        );
        assert_eq!(SubscriptionTier::Ultimate.upgrade_label(), "Ultimate");
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!(
            "Professional".parse::<SubscriptionTier>(),
            Ok(SubscriptionTier::Professional)
        );
        assert_eq!(
            "gold".parse::<SubscriptionTier>(),
            Err(UnknownTierError("gold".to_string()))
        );
    }

    fn any_feature() -> impl Strategy<Value = Feature> {
        (0..Feature::ALL.len()).prop_map(|i| Feature::ALL[i])
    }

    proptest! {
        /// Property: anything a lower tier can do, every higher tier can do
        #[test]
        fn tiers_form_superset_chain(feature in any_feature()) {
            if has_access(SubscriptionTier::Basic, feature) {
                prop_assert!(has_access(SubscriptionTier::Professional, feature));
            }
            if has_access(SubscriptionTier::Professional, feature) {
                prop_assert!(has_access(SubscriptionTier::Ultimate, feature));
            }
        }

        /// Property: feature keys round-trip through the string gate
        #[test]
        fn string_gate_matches_typed_gate(feature in any_feature()) {
            for tier in SubscriptionTier::ALL {
                prop_assert_eq!(
                    has_access_key(tier.key(), feature.key()),
                    has_access(tier, feature)
                );
            }
        }

        /// Property: random tier names never unlock anything
        #[test]
        fn random_tiers_denied(tier in "[a-z]{3,12}", feature in any_feature()) {
            prop_assume!(SubscriptionTier::parse(&tier).is_none());
            prop_assert!(!has_access_key(&tier, feature.key()));
        }
    }
}
