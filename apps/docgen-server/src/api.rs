//! API handlers for the document generator server
//!
//! Provides REST endpoints for:
//! - Document generation
//! - State law lookup and rights cards
//! - Template and feature listing

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use docgen_engine::{list_templates, DocumentGenerator, GenerationRequest, RightsCard, TemplateInfo};
use serde::{Deserialize, Serialize};
use shared_types::{has_access, DocumentType, Feature, SubscriptionTier};
use state_law::{AdvisoryLevel, CaseLaw, StateAdvisory, StateLawFact};
use tracing::{debug, info};

use crate::error::ServerError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<DocumentGenerator>,
}

/// Routes without middleware; `main` adds rate limiting and CORS
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // Reference data
        .route("/api/templates", get(handle_list_templates))
        .route("/api/features", get(handle_features))
        .route("/api/states", get(handle_list_states))
        .route("/api/states/:state", get(handle_get_state))
        .route("/api/states/:state/rights-card", get(handle_rights_card))
        // Generation
        .route("/api/generate", post(handle_generate))
        .with_state(state)
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "docgen-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Template list response
#[derive(Serialize)]
pub struct TemplateListResponse {
    pub success: bool,
    pub templates: Vec<TemplateInfo>,
    pub count: usize,
}

/// Handler: GET /api/templates
pub async fn handle_list_templates() -> Json<TemplateListResponse> {
    let templates = list_templates();
    let count = templates.len();

    Json(TemplateListResponse {
        success: true,
        templates,
        count,
    })
}

#[derive(Deserialize)]
pub struct TierQuery {
    pub tier: Option<String>,
}

fn require_tier(query: &TierQuery) -> Result<&str, ServerError> {
    query
        .tier
        .as_deref()
        .ok_or_else(|| ServerError::InvalidRequest("Missing 'tier' query parameter".to_string()))
}

#[derive(Serialize)]
pub struct FeatureEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub enabled: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesResponse {
    pub success: bool,
    pub tier: SubscriptionTier,
    pub features: Vec<FeatureEntry>,
    pub document_types: Vec<DocumentType>,
}

/// Handler: GET /api/features?tier=
pub async fn handle_features(
    Query(query): Query<TierQuery>,
) -> Result<Json<FeaturesResponse>, ServerError> {
    let raw = require_tier(&query)?;
    let tier = SubscriptionTier::parse(raw)
        .ok_or_else(|| ServerError::InvalidRequest(format!("Unknown subscription tier: {raw}")))?;

    let enabled = tier.features();
    let features = Feature::ALL
        .into_iter()
        .map(|feature| FeatureEntry {
            key: feature.key(),
            name: feature.display_name(),
            enabled: enabled.contains(&feature),
        })
        .collect();

    let document_types = DocumentType::ALL
        .into_iter()
        .filter(|doc_type| has_access(tier, doc_type.required_feature()))
        .collect();

    Ok(Json(FeaturesResponse {
        success: true,
        tier,
        features,
        document_types,
    }))
}

/// One row of the state overview table
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSummary {
    pub code: &'static str,
    pub name: &'static str,
    pub statute: &'static str,
    pub response_timeframe: &'static str,
    pub stop_and_identify: bool,
    pub recording_consent: &'static str,
    pub cannabis_status: &'static str,
    pub advisory_level: Option<AdvisoryLevel>,
}

#[derive(Serialize)]
pub struct StateListResponse {
    pub success: bool,
    pub states: Vec<StateSummary>,
    pub count: usize,
}

/// Handler: GET /api/states
pub async fn handle_list_states(State(app): State<AppState>) -> Json<StateListResponse> {
    let table = app.generator.table();
    let states: Vec<StateSummary> = table
        .all()
        .map(|fact| StateSummary {
            code: fact.state.code(),
            name: fact.name(),
            statute: fact.statute(),
            response_timeframe: fact.response_timeframe(),
            stop_and_identify: fact.stop_and_identify.required,
            recording_consent: fact.recording_consent().label(),
            cannabis_status: fact.cannabis_status().label(),
            advisory_level: table.advisory(fact.state).map(|advisory| advisory.level),
        })
        .collect();
    let count = states.len();

    Json(StateListResponse {
        success: true,
        states,
        count,
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDetailResponse {
    pub success: bool,
    pub name: &'static str,
    pub fact: StateLawFact,
    /// Response due date for a request sent today, when countable
    pub response_due: Option<NaiveDate>,
    pub case_law: &'static [CaseLaw],
    pub advisory: Option<StateAdvisory>,
}

/// Handler: GET /api/states/:state
pub async fn handle_get_state(
    State(app): State<AppState>,
    Path(state): Path<String>,
) -> Result<Json<StateDetailResponse>, ServerError> {
    let table = app.generator.table();
    let fact = *table.lookup(&state)?;

    Ok(Json(StateDetailResponse {
        success: true,
        name: fact.name(),
        fact,
        response_due: fact.public_records.response_due(app.generator.today()),
        case_law: table.case_law(fact.state),
        advisory: table.advisory(fact.state),
    }))
}

#[derive(Serialize)]
pub struct RightsCardResponse {
    pub success: bool,
    pub card: RightsCard,
    pub text: String,
}

/// Handler: GET /api/states/:state/rights-card?tier=
pub async fn handle_rights_card(
    State(app): State<AppState>,
    Path(state): Path<String>,
    Query(query): Query<TierQuery>,
) -> Result<Json<RightsCardResponse>, ServerError> {
    let tier = require_tier(&query)?;
    let card = app.generator.rights_card_for(tier, &state)?;
    let text = card.to_text();

    Ok(Json(RightsCardResponse {
        success: true,
        card,
        text,
    }))
}

/// Generate response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub document_type: DocumentType,
    pub state: Option<&'static str>,
    pub generated_on: NaiveDate,
    pub filename: String,
    pub text: String,
}

/// Handler: POST /api/generate
pub async fn handle_generate(
    State(app): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ServerError> {
    let Json(request) = payload.map_err(|err| ServerError::InvalidRequest(err.body_text()))?;

    info!(
        "Generate request: type={}, tier={}, state={}",
        request.document_type, request.tier, request.state
    );
    debug!("Fields supplied: {}", request.fields.len());

    let document = app.generator.generate_request(&request)?;

    Ok(Json(GenerateResponse {
        success: true,
        document_type: document.document_type,
        state: document.state.map(|state| state.name()),
        generated_on: document.generated_on,
        filename: document.suggested_filename(),
        text: document.text,
    }))
}
