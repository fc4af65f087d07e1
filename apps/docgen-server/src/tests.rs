//! Tests for the document generator server API
//!
//! Test categories:
//! - Property tests over document types, tiers and state names
//! - HTTP endpoint tests using axum-test
//! - Regression tests for the end-to-end generation flow

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use docgen_engine::list_templates;
    use shared_types::{has_access_key, DocumentType, SubscriptionTier};
    use state_law::{State, StateLawTable};

    /// Generate wire keys for every document type
    fn valid_doc_type() -> impl Strategy<Value = String> {
        prop::sample::select(DocumentType::ALL.map(|d| d.key().to_string()).to_vec())
    }

    /// Generate arbitrary but invalid document type names
    fn invalid_doc_type() -> impl Strategy<Value = String> {
        "[a-z]{5,20}".prop_filter("Must not be valid", |s| DocumentType::parse(s).is_none())
    }

    fn any_state() -> impl Strategy<Value = State> {
        (0..State::ALL.len()).prop_map(|i| State::ALL[i])
    }

    proptest! {
        /// Property: every document type key is listed by the registry
        #[test]
        fn valid_doc_types_listed(key in valid_doc_type()) {
            let templates = list_templates();
            prop_assert!(templates.iter().any(|t| t.name == key), "Template '{}' should exist", key);
        }

        /// Property: random names are not document types
        #[test]
        fn invalid_doc_types_identified(name in invalid_doc_type()) {
            let templates = list_templates();
            prop_assert!(!templates.iter().any(|t| t.name == name));
        }

        /// Property: state names resolve regardless of case
        #[test]
        fn state_names_case_insensitive(state in any_state(), upper in any::<bool>()) {
            let name = if upper { state.name().to_uppercase() } else { state.name().to_lowercase() };
            let fact = StateLawTable::global().lookup(&name);
            prop_assert_eq!(fact.map(|f| f.state), Ok(state));
        }

        /// Property: templated documents require at least one field
        #[test]
        fn templated_documents_have_required_inputs(key in valid_doc_type()) {
            let templates = list_templates();
            let template = templates.iter().find(|t| t.name == key);
            prop_assert!(template.is_some());
            let template = template.unwrap();
            prop_assert_eq!(template.templated, !template.required_inputs.is_empty());
        }

        /// Property: the registry's minimum tier really unlocks the document
        #[test]
        fn minimum_tier_unlocks(key in valid_doc_type()) {
            let info = list_templates().into_iter().find(|t| t.name == key).unwrap();
            prop_assert!(has_access_key(info.minimum_tier.key(), info.feature.key()));
            prop_assert!(has_access_key(SubscriptionTier::Ultimate.key(), info.feature.key()));
        }
    }
}

#[cfg(test)]
mod http_endpoint_tests {
    //! HTTP endpoint integration tests using axum-test

    use std::sync::Arc;

    use axum_test::TestServer;
    use chrono::NaiveDate;
    use docgen_engine::{DocumentGenerator, FixedClock};
    use serde_json::json;

    use crate::api::{router, AppState};

    /// Create a test server with the full router and a frozen clock
    fn create_test_server() -> TestServer {
        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let state = AppState {
            generator: Arc::new(DocumentGenerator::new(Arc::new(FixedClock::new(today)))),
        };

        TestServer::new(router(state)).unwrap()
    }

    fn foia_fields() -> serde_json::Value {
        json!({
            "requestorName": "Jane Doe",
            "requestorAddress": "1 Main St",
            "requestorEmail": "jane@x.com",
            "agencyName": "LAPD",
            "recordsDescription": "All body camera footage from Jan 1 2024"
        })
    }

    #[tokio::test]
    async fn test_health_returns_200() {
        let server = create_test_server();
        let response = server.get("/health").await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "docgen-server");
    }

    #[tokio::test]
    async fn test_templates_returns_all_document_types() {
        let server = create_test_server();
        let response = server.get("/api/templates").await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert!(json["success"].as_bool().unwrap());
        assert_eq!(json["count"], 7);
        assert_eq!(json["templates"][0]["name"], "foia");
    }

    #[tokio::test]
    async fn test_features_for_basic_tier() {
        let server = create_test_server();
        let response = server.get("/api/features?tier=basic").await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["tier"], "basic");
        let features = json["features"].as_array().unwrap();
        let subpoena = features.iter().find(|f| f["key"] == "subpoena").unwrap();
        assert_eq!(subpoena["enabled"], false);
        assert_eq!(
            json["documentTypes"],
            json!(["foia", "state_prr", "id_card"])
        );
    }

    #[tokio::test]
    async fn test_features_rejects_unknown_tier() {
        let server = create_test_server();
        let response = server.get("/api/features?tier=platinum").await;
        response.assert_status_bad_request();
        assert_eq!(response.json::<serde_json::Value>()["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_states_lists_fifty_one() {
        let server = create_test_server();
        let response = server.get("/api/states").await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["count"], 51);
        let texas = json["states"]
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["code"] == "TX")
            .unwrap();
        assert_eq!(texas["advisoryLevel"], "HIGH");
    }

    #[tokio::test]
    async fn test_state_detail() {
        let server = create_test_server();
        let response = server.get("/api/states/california").await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["name"], "California");
        assert_eq!(json["fact"]["publicRecords"]["statute"], "Cal. Gov. Code § 6253");
        assert_eq!(json["responseDue"], "2024-03-14");
        assert!(!json["caseLaw"].as_array().unwrap().is_empty());
        assert_eq!(json["fact"]["recording"]["audioLegal"], false);
        assert_eq!(json["fact"]["recording"]["videoLegal"], true);
        assert!(json["fact"]["cannabis"]["penalties"]
            .as_str()
            .unwrap()
            .starts_with("Recreational possession legal with limits"));
        assert!(json["fact"]["cannabis"]["medicalInfo"].is_null());
    }

    #[tokio::test]
    async fn test_state_detail_unknown_state() {
        let server = create_test_server();
        let response = server.get("/api/states/Atlantis").await;
        response.assert_status_not_found();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "UNKNOWN_STATE");
        assert_eq!(json["error"], "Unknown state: Atlantis");
    }

    #[tokio::test]
    async fn test_rights_card() {
        let server = create_test_server();
        let response = server.get("/api/states/AK/rights-card?tier=basic").await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["card"]["stateName"], "Alaska");
        assert_eq!(json["card"]["statute"], "No Stop & ID statute");
        assert!(json["text"].as_str().unwrap().starts_with("KNOW YOUR RIGHTS - ALASKA"));
    }

    #[tokio::test]
    async fn test_rights_card_requires_tier() {
        let server = create_test_server();
        let response = server.get("/api/states/AK/rights-card").await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_generate_foia() {
        let server = create_test_server();
        let response = server
            .post("/api/generate")
            .json(&json!({
                "tier": "basic",
                "documentType": "FOIA",
                "state": "California",
                "fields": foia_fields()
            }))
            .await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["success"], true);
        assert_eq!(json["documentType"], "foia");
        assert_eq!(json["state"], "California");
        assert_eq!(json["generatedOn"], "2024-03-04");
        assert_eq!(json["filename"], "foia_California_20240304.txt");
        let text = json["text"].as_str().unwrap();
        assert!(text.contains("Cal. Gov. Code § 6253"));
        assert!(text.contains("10 calendar days"));
    }

    #[tokio::test]
    async fn test_generate_access_denied() {
        let server = create_test_server();
        let response = server
            .post("/api/generate")
            .json(&json!({
                "tier": "basic",
                "documentType": "CeaseAndDesist",
                "state": "California",
                "fields": foia_fields()
            }))
            .await;
        response.assert_status(axum::http::StatusCode::FORBIDDEN);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["code"], "ACCESS_DENIED");
        assert_eq!(
            json["error"],
            "Cease and Desist letters require Professional or Ultimate subscription"
        );
    }

    #[tokio::test]
    async fn test_generate_validation_lists_missing_fields() {
        let server = create_test_server();
        let response = server
            .post("/api/generate")
            .json(&json!({
                "tier": "professional",
                "documentType": "cease_desist",
                "fields": {"senderName": "", "recipientName": "Bob"}
            }))
            .await;
        response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(
            json["missingFields"],
            json!(["senderName", "conductDescription"])
        );
    }

    #[tokio::test]
    async fn test_generate_unknown_state() {
        let server = create_test_server();
        let response = server
            .post("/api/generate")
            .json(&json!({
                "tier": "basic",
                "documentType": "foia",
                "state": "Atlantis",
                "fields": foia_fields()
            }))
            .await;
        response.assert_status_not_found();
        assert_eq!(response.json::<serde_json::Value>()["code"], "UNKNOWN_STATE");
    }

    #[tokio::test]
    async fn test_generate_unknown_document_type() {
        let server = create_test_server();
        let response = server
            .post("/api/generate")
            .json(&json!({
                "tier": "ultimate",
                "documentType": "eviction_notice",
                "state": "Ohio"
            }))
            .await;
        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>()["code"],
            "UNKNOWN_DOCUMENT_TYPE"
        );
    }

    #[tokio::test]
    async fn test_generate_rights_card_is_not_templated() {
        let server = create_test_server();
        let response = server
            .post("/api/generate")
            .json(&json!({
                "tier": "basic",
                "documentType": "id_card",
                "state": "Ohio"
            }))
            .await;
        response.assert_status_bad_request();
        assert_eq!(response.json::<serde_json::Value>()["code"], "NOT_TEMPLATED");
    }

    #[tokio::test]
    async fn test_generate_rejects_malformed_body() {
        let server = create_test_server();
        let response = server
            .post("/api/generate")
            .json(&json!({"documentType": "foia"}))
            .await;
        response.assert_status_bad_request();
        assert_eq!(response.json::<serde_json::Value>()["code"], "INVALID_REQUEST");
    }
}

#[cfg(test)]
mod regression_tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use docgen_engine::{DocumentGenerator, FieldBag, FixedClock, GenerationRequest};
    use pretty_assertions::assert_eq;

    fn generator() -> DocumentGenerator {
        let today = NaiveDate::from_ymd_opt(2024, 12, 23).unwrap();
        DocumentGenerator::new(Arc::new(FixedClock::new(today)))
    }

    #[test]
    fn business_day_deadline_skips_christmas() {
        let request = GenerationRequest {
            tier: "basic".to_string(),
            document_type: "state_prr".to_string(),
            state: "TX".to_string(),
            fields: FieldBag::new()
                .with("requestorName", "Jane Doe")
                .with("agencyName", "Austin Police Department")
                .with("recordsDescription", "Use of force reports"),
        };
        let doc = generator().generate_request(&request).unwrap();

        // Mon Dec 23 + 10 business days, skipping Dec 25 and Jan 1
        assert!(doc
            .text
            .contains("a response is due no later than January 8, 2025."));
    }

    #[test]
    fn generation_is_repeatable() {
        let request = GenerationRequest {
            tier: "ultimate".to_string(),
            document_type: "discovery".to_string(),
            state: String::new(),
            fields: FieldBag::new()
                .with("courtName", "District Court")
                .with("caseNumber", "1")
                .with("requestingParty", "A")
                .with("requests", "1. Everything."),
        };
        let gen = generator();
        assert_eq!(
            gen.generate_request(&request).unwrap(),
            gen.generate_request(&request).unwrap()
        );
    }
}
