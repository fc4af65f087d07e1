//! Document templates and metadata

pub mod cease_desist;
pub mod clause;
pub mod discovery;
pub mod foia;
pub mod notice_of_claim;
pub mod registry;
pub mod rights_card;
pub mod subpoena;

use shared_types::DocumentType;

use clause::{render_clauses, Clause, RenderContext};

/// Clause list for a templated document. The rights card is not a letter
/// and has none.
pub fn clauses_for(document_type: DocumentType) -> Option<&'static [Clause]> {
    match document_type {
        DocumentType::Foia | DocumentType::StatePrr => Some(foia::CLAUSES),
        DocumentType::CeaseAndDesist => Some(cease_desist::CLAUSES),
        DocumentType::NoticeOfClaim => Some(notice_of_claim::CLAUSES),
        DocumentType::SubpoenaDucesTecum => Some(subpoena::CLAUSES),
        DocumentType::DiscoveryRequest => Some(discovery::CLAUSES),
        DocumentType::KnowYourRightsCard => None,
    }
}

/// Fields that must be non-blank before a document can be rendered
pub fn required_fields(document_type: DocumentType) -> &'static [&'static str] {
    match document_type {
        DocumentType::Foia | DocumentType::StatePrr => foia::REQUIRED_FIELDS,
        DocumentType::CeaseAndDesist => cease_desist::REQUIRED_FIELDS,
        DocumentType::NoticeOfClaim => notice_of_claim::REQUIRED_FIELDS,
        DocumentType::SubpoenaDucesTecum => subpoena::REQUIRED_FIELDS,
        DocumentType::DiscoveryRequest => discovery::REQUIRED_FIELDS,
        DocumentType::KnowYourRightsCard => &[],
    }
}

pub fn optional_fields(document_type: DocumentType) -> &'static [&'static str] {
    match document_type {
        DocumentType::Foia | DocumentType::StatePrr => foia::OPTIONAL_FIELDS,
        DocumentType::CeaseAndDesist => cease_desist::OPTIONAL_FIELDS,
        DocumentType::NoticeOfClaim => notice_of_claim::OPTIONAL_FIELDS,
        DocumentType::SubpoenaDucesTecum => subpoena::OPTIONAL_FIELDS,
        DocumentType::DiscoveryRequest => discovery::OPTIONAL_FIELDS,
        DocumentType::KnowYourRightsCard => &[],
    }
}

/// Render the document for `ctx.document_type`, or `None` if it has no
/// template
pub fn render(ctx: &RenderContext<'_>) -> Option<String> {
    clauses_for(ctx.document_type).map(|clauses| render_clauses(clauses, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldBag;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_letter_has_clauses() {
        for doc_type in DocumentType::ALL {
            let has_clauses = clauses_for(doc_type).is_some();
            assert_eq!(has_clauses, doc_type != DocumentType::KnowYourRightsCard);
        }
    }

    #[test]
    fn test_clause_names_unique() {
        for doc_type in DocumentType::ALL {
            if let Some(clauses) = clauses_for(doc_type) {
                let names: HashSet<_> = clauses.iter().map(|c| c.name).collect();
                assert_eq!(names.len(), clauses.len(), "{doc_type}");
            }
        }
    }

    #[test]
    fn test_required_and_optional_disjoint() {
        for doc_type in DocumentType::ALL {
            for field in required_fields(doc_type) {
                assert!(!optional_fields(doc_type).contains(field), "{doc_type}: {field}");
            }
        }
    }

    fn templated_type() -> impl Strategy<Value = DocumentType> {
        prop::sample::select(vec![
            DocumentType::Foia,
            DocumentType::StatePrr,
            DocumentType::CeaseAndDesist,
            DocumentType::NoticeOfClaim,
            DocumentType::SubpoenaDucesTecum,
            DocumentType::DiscoveryRequest,
        ])
    }

    proptest! {
        /// Property: blank optional fields never leave a placeholder or a
        /// double blank line behind
        #[test]
        fn blank_optionals_leave_no_gaps(doc_type in templated_type(), blank in "[ \t]{0,3}") {
            let mut fields = FieldBag::new();
            for key in required_fields(doc_type) {
                fields.insert(*key, "filled");
            }
            for key in optional_fields(doc_type) {
                fields.insert(*key, blank.clone());
            }
            let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
            let ctx = RenderContext::new(doc_type, &fields, date);
            let text = render(&ctx).unwrap();

            prop_assert!(!text.contains("\n\n\n"));
            prop_assert!(!text.contains("undefined"));
            prop_assert!(!text.starts_with('\n'));
            prop_assert!(!text.ends_with('\n'));
        }

        /// Property: a filled optional field's text always reaches the output
        #[test]
        fn filled_optional_text_is_rendered(value in "[A-Z][a-z]{4,10} [A-Z][a-z]{4,10}") {
            let fields = FieldBag::new()
                .with("senderName", "A")
                .with("recipientName", "B")
                .with("conductDescription", "C")
                .with("specificViolations", value.clone());
            let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
            let ctx = RenderContext::new(DocumentType::CeaseAndDesist, &fields, date);
            prop_assert!(render(&ctx).unwrap().contains(&value));
        }
    }
}
