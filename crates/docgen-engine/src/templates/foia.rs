//! FOIA and state public records requests
//!
//! Both document types share one letter. They differ only in who the letter
//! is addressed to and the heading under the agency name.

use shared_types::DocumentType;

use super::clause::{format_date, lines, Clause, Condition, RenderContext};

pub const REQUIRED_FIELDS: &[&str] = &["requestorName", "agencyName", "recordsDescription"];

pub const OPTIONAL_FIELDS: &[&str] = &[
    "requestorAddress",
    "requestorEmail",
    "requestorPhone",
    "agencyAddress",
    "dateRange",
    "specificCriteria",
    "feeLimit",
    "expeditedProcessing",
];

/// Fee ceiling when the requester leaves `feeLimit` blank, in dollars
pub const DEFAULT_FEE_LIMIT: &str = "50";

pub const CLAUSES: &[Clause] = &[
    Clause::always("requestor", requestor),
    Clause::always("date", date),
    Clause::always("agency", agency),
    Clause::always("subject", subject),
    Clause::always("salutation", salutation),
    Clause::always("request", request),
    Clause::always("records", records),
    Clause::when("date_range", Condition::Present("dateRange"), date_range),
    Clause::when(
        "specific_criteria",
        Condition::Present("specificCriteria"),
        specific_criteria,
    ),
    Clause::always("response_deadline", response_deadline),
    Clause::when("response_due", Condition::Custom(has_due_date), response_due),
    Clause::always("denials", denials),
    Clause::always("fees", fees),
    Clause::when(
        "expedited",
        Condition::Flag("expeditedProcessing"),
        expedited,
    ),
    Clause::always("closing", closing),
    Clause::always("signature", signature),
    Clause::always("legal_notice", legal_notice),
];

fn requestor(ctx: &RenderContext<'_>) -> String {
    lines(&[
        ctx.text_or_blank("requestorName"),
        ctx.text_or_blank("requestorAddress"),
        ctx.text_or_blank("requestorEmail"),
        ctx.text_or_blank("requestorPhone"),
    ])
}

fn date(ctx: &RenderContext<'_>) -> String {
    ctx.date_stamp()
}

fn agency(ctx: &RenderContext<'_>) -> String {
    let heading = match ctx.document_type {
        DocumentType::Foia => "FOIA/Public Records Request",
        _ => "Public Records Request",
    };
    lines(&[
        &*ctx.text_or_blank("agencyName"),
        heading,
        &*ctx.text_or_blank("agencyAddress"),
    ])
}

fn subject(ctx: &RenderContext<'_>) -> String {
    format!(
        "RE: Public Records Request under {}",
        ctx.statute_or("applicable state law")
    )
}

fn salutation(ctx: &RenderContext<'_>) -> String {
    match ctx.document_type {
        DocumentType::Foia => "Dear FOIA Officer:".to_string(),
        _ => "Dear Records Custodian:".to_string(),
    }
}

fn request(ctx: &RenderContext<'_>) -> String {
    format!(
        "Pursuant to {}, I hereby request access to and copies of the following records:",
        ctx.statute_or("the applicable state public records law")
    )
}

fn records(ctx: &RenderContext<'_>) -> String {
    ctx.text_or_blank("recordsDescription").into_owned()
}

fn date_range(ctx: &RenderContext<'_>) -> String {
    format!(
        "The timeframe for this request is: {}",
        ctx.text_or_blank("dateRange")
    )
}

fn specific_criteria(ctx: &RenderContext<'_>) -> String {
    format!(
        "Additional criteria: {}",
        ctx.text_or_blank("specificCriteria")
    )
}

fn response_deadline(ctx: &RenderContext<'_>) -> String {
    match ctx.law {
        Some(law) if law.public_records.response_days().is_some() => format!(
            "As provided by {}, please respond to this request within {}.",
            law.statute(),
            law.response_timeframe()
        ),
        Some(law) => format!(
            "As provided by {}, please respond to this request within a reasonable time.",
            law.statute()
        ),
        None => "As provided by statute, please respond to this request within the statutorily required timeframe.".to_string(),
    }
}

fn has_due_date(ctx: &RenderContext<'_>) -> bool {
    ctx.law
        .and_then(|law| law.public_records.response_due(ctx.date))
        .is_some()
}

fn response_due(ctx: &RenderContext<'_>) -> String {
    match ctx.law.and_then(|law| law.public_records.response_due(ctx.date)) {
        Some(due) => format!(
            "Based on the date of this request, a response is due no later than {}.",
            format_date(due)
        ),
        None => String::new(),
    }
}

fn denials(_: &RenderContext<'_>) -> String {
    "If any portion of this request is denied, please provide a written explanation citing the specific exemption(s) relied upon and notify me of appeal procedures available under law.".to_string()
}

fn fees(ctx: &RenderContext<'_>) -> String {
    let limit = ctx.text_or("feeLimit", DEFAULT_FEE_LIMIT);
    format!(
        "I request that records be provided in electronic format (PDF preferred) to reduce costs. If fees exceed ${}, please notify me before processing.",
        limit.trim_start_matches('$')
    )
}

fn expedited(_: &RenderContext<'_>) -> String {
    "I respectfully request expedited processing of this request due to compelling need and time sensitivity of the information requested.".to_string()
}

fn closing(_: &RenderContext<'_>) -> String {
    "I can be reached at the contact information above. Thank you for your attention to this matter.".to_string()
}

fn signature(ctx: &RenderContext<'_>) -> String {
    format!("Sincerely,\n\n{}", ctx.text_or_blank("requestorName"))
}

fn legal_notice(ctx: &RenderContext<'_>) -> String {
    format!(
        "---\nLEGAL NOTICE: This is a formal public records request under {}. Failure to respond within the statutory timeframe may constitute a violation of state law. This request creates a legal obligation to preserve all responsive records.",
        ctx.statute_or("applicable state law")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldBag;
    use crate::templates::clause::{included_clauses, render_clauses};
    use chrono::NaiveDate;
    use state_law::StateLawTable;

    fn fields() -> FieldBag {
        FieldBag::new()
            .with("requestorName", "Jane Doe")
            .with("requestorAddress", "1 Main St")
            .with("requestorEmail", "jane@x.com")
            .with("agencyName", "LAPD")
            .with("recordsDescription", "All body camera footage from Jan 1 2024")
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    #[test]
    fn test_california_foia_letter() {
        let fields = fields();
        let law = StateLawTable::global().lookup("California").unwrap();
        let ctx = RenderContext::new(DocumentType::Foia, &fields, monday()).with_law(law);
        let text = render_clauses(CLAUSES, &ctx);

        assert!(text.starts_with("Jane Doe\n1 Main St\njane@x.com\n\nMarch 4, 2024\n\nLAPD\nFOIA/Public Records Request\n\n"));
        assert!(text.contains("Dear FOIA Officer:"));
        assert!(text.contains("Cal. Gov. Code § 6253"));
        assert!(text.contains("please respond to this request within 10 calendar days."));
        assert!(text.contains("a response is due no later than March 14, 2024."));
        assert!(text.contains("If fees exceed $50, please notify me"));
        assert!(text.ends_with("preserve all responsive records."));
    }

    #[test]
    fn test_state_prr_addresses_custodian() {
        let fields = fields();
        let law = StateLawTable::global().lookup("Texas").unwrap();
        let ctx = RenderContext::new(DocumentType::StatePrr, &fields, monday()).with_law(law);
        let text = render_clauses(CLAUSES, &ctx);

        assert!(text.contains("Dear Records Custodian:"));
        assert!(text.contains("LAPD\nPublic Records Request"));
        assert!(!text.contains("FOIA Officer"));
    }

    #[test]
    fn test_optional_clauses_omitted_when_blank() {
        let fields = fields().with("dateRange", "").with("expeditedProcessing", false);
        let law = StateLawTable::global().lookup("CA").unwrap();
        let ctx = RenderContext::new(DocumentType::Foia, &fields, monday()).with_law(law);
        let text = render_clauses(CLAUSES, &ctx);

        assert!(!text.contains("The timeframe for this request is"));
        assert!(!text.contains("Additional criteria"));
        assert!(!text.contains("expedited processing"));
        assert!(!text.contains("\n\n\n"));
    }

    #[test]
    fn test_optional_clauses_included_when_filled() {
        let fields = fields()
            .with("dateRange", "2023-2024")
            .with("specificCriteria", "Unit 7 only")
            .with("expeditedProcessing", true)
            .with("feeLimit", "$25");
        let law = StateLawTable::global().lookup("CA").unwrap();
        let ctx = RenderContext::new(DocumentType::Foia, &fields, monday()).with_law(law);
        let text = render_clauses(CLAUSES, &ctx);

        assert!(text.contains("The timeframe for this request is: 2023-2024"));
        assert!(text.contains("Additional criteria: Unit 7 only"));
        assert!(text.contains("I respectfully request expedited processing"));
        assert!(text.contains("If fees exceed $25, please notify me"));
    }

    #[test]
    fn test_reasonable_time_states_have_no_due_date() {
        let fields = fields();
        let table = StateLawTable::global();
        let reasonable = table
            .all()
            .find(|fact| fact.public_records.response_days().is_none())
            .expect("at least one reasonable-time state");
        let ctx = RenderContext::new(DocumentType::Foia, &fields, monday()).with_law(reasonable);

        assert!(!included_clauses(CLAUSES, &ctx).contains(&"response_due"));
        assert!(render_clauses(CLAUSES, &ctx).contains("within a reasonable time."));
    }
}
