//! Document generation pipeline
//!
//! Every request goes through the same steps, and the first failure wins:
//! 1. Feature gate for the caller's subscription tier
//! 2. Required-field validation, reporting every missing field at once
//! 3. State lookup, for documents that cite state law
//! 4. Rendering with the date from the injected clock

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use shared_types::{has_access, DocumentType, Feature, SubscriptionTier};
use state_law::{State, StateLawFact, StateLawTable};
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::document::GeneratedDocument;
use crate::errors::GenerationError;
use crate::fields::FieldBag;
use crate::templates::clause::RenderContext;
use crate::templates::rights_card::RightsCard;
use crate::templates::{self, required_fields};

/// Untyped generation request, as received from a form or the HTTP API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub tier: String,
    pub document_type: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub fields: FieldBag,
}

/// Stateless generator; share one behind an `Arc` across threads
#[derive(Clone)]
pub struct DocumentGenerator {
    table: &'static StateLawTable,
    clock: Arc<dyn Clock>,
}

impl DocumentGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: StateLawTable::global(),
            clock,
        }
    }

    pub fn table(&self) -> &'static StateLawTable {
        self.table
    }

    /// Date documents generated now would carry
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn generate(
        &self,
        tier: SubscriptionTier,
        document_type: DocumentType,
        state: &str,
        fields: &FieldBag,
    ) -> Result<GeneratedDocument, GenerationError> {
        debug!(
            "Generate request: tier={}, type={}, state={}",
            tier, document_type, state
        );

        check_access(tier, document_type.required_feature())?;

        if document_type == DocumentType::KnowYourRightsCard {
            return Err(GenerationError::NotTemplated(document_type));
        }

        let missing_fields = fields.missing(required_fields(document_type));
        if !missing_fields.is_empty() {
            debug!("Missing required fields: {:?}", missing_fields);
            return Err(GenerationError::Validation { missing_fields });
        }

        let law = self.resolve_state(document_type, state)?;
        let date = self.clock.today();

        let mut ctx = RenderContext::new(document_type, fields, date);
        if let Some(law) = law {
            ctx = ctx.with_law(law);
        }
        let text =
            templates::render(&ctx).ok_or(GenerationError::NotTemplated(document_type))?;

        let resolved_state = match law {
            Some(law) => Some(law.state),
            None => State::parse(state),
        };

        info!(
            "Generated {} ({} chars) for {}",
            document_type,
            text.len(),
            resolved_state.map(|s| s.name()).unwrap_or("no state")
        );

        Ok(GeneratedDocument {
            document_type,
            state: resolved_state,
            generated_on: date,
            text,
        })
    }

    /// String-boundary form of [`DocumentGenerator::generate`]. Unknown
    /// tiers are treated as having no features.
    pub fn generate_request(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedDocument, GenerationError> {
        let document_type: DocumentType = request.document_type.parse()?;
        let tier = parse_tier(&request.tier, document_type.required_feature())?;
        self.generate(tier, document_type, &request.state, &request.fields)
    }

    pub fn rights_card(
        &self,
        tier: SubscriptionTier,
        state: &str,
    ) -> Result<RightsCard, GenerationError> {
        debug!("Rights card request: tier={}, state={}", tier, state);
        check_access(tier, Feature::IdCard)?;
        let fact = self.table.lookup(state)?;
        Ok(RightsCard::for_state(fact))
    }

    /// String-boundary form of [`DocumentGenerator::rights_card`]
    pub fn rights_card_for(&self, tier: &str, state: &str) -> Result<RightsCard, GenerationError> {
        let tier = parse_tier(tier, Feature::IdCard)?;
        self.rights_card(tier, state)
    }

    fn resolve_state(
        &self,
        document_type: DocumentType,
        state: &str,
    ) -> Result<Option<&'static StateLawFact>, GenerationError> {
        if !document_type.is_state_dependent() {
            return Ok(None);
        }
        let fact = self.table.lookup(state).map_err(|err| {
            debug!("State lookup failed: {}", err);
            GenerationError::from(err)
        })?;
        Ok(Some(fact))
    }
}

impl Default for DocumentGenerator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for DocumentGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentGenerator").finish_non_exhaustive()
    }
}

fn check_access(tier: SubscriptionTier, feature: Feature) -> Result<(), GenerationError> {
    if has_access(tier, feature) {
        Ok(())
    } else {
        debug!("Access denied: tier={}, feature={}", tier, feature);
        Err(GenerationError::access_denied(feature))
    }
}

fn parse_tier(tier: &str, feature: Feature) -> Result<SubscriptionTier, GenerationError> {
    SubscriptionTier::parse(tier).ok_or_else(|| {
        debug!("Unknown tier {:?}, denying {}", tier, feature);
        GenerationError::access_denied(feature)
    })
}
