use super::clause::{lines, Clause, Condition, RenderContext};

pub const REQUIRED_FIELDS: &[&str] = &[
    "courtName",
    "caseNumber",
    "custodianName",
    "documentsRequested",
];

pub const OPTIONAL_FIELDS: &[&str] = &[
    "courtAddress",
    "plaintiffName",
    "defendantName",
    "custodianTitle",
    "custodianOrganization",
    "custodianAddress",
    "depositionLocation",
    "depositionDate",
    "depositionTime",
    "productionInstructions",
    "timePeriod",
    "compensationOffered",
    "issuingAttorney",
    "attorneyBarNumber",
    "attorneyFirm",
    "attorneyAddress",
    "attorneyPhone",
    "attorneyEmail",
];

const DEFAULT_PRODUCTION_INSTRUCTIONS: &str = "1. Documents may be produced in native electronic format or organized paper copies
2. Privileged documents must be identified in a privilege log
3. If documents are withheld, provide specific basis for withholding
4. Organize and label documents to correspond with categories in this subpoena";

const DEPOSITION_FIELDS: [&str; 3] = ["depositionLocation", "depositionDate", "depositionTime"];

const ATTORNEY_FIELDS: [&str; 6] = [
    "issuingAttorney",
    "attorneyBarNumber",
    "attorneyFirm",
    "attorneyAddress",
    "attorneyPhone",
    "attorneyEmail",
];

pub const CLAUSES: &[Clause] = &[
    Clause::always("court", court),
    Clause::always("case_number", case_number),
    Clause::when("caption", Condition::Custom(has_caption), caption),
    Clause::always("title", title),
    Clause::always("custodian", custodian),
    Clause::when("deposition", Condition::Custom(has_deposition), deposition),
    Clause::when(
        "production_only",
        Condition::Custom(lacks_deposition),
        production_only,
    ),
    Clause::always("documents", documents),
    Clause::always("production_instructions", production_instructions),
    Clause::always("definitions", definitions),
    Clause::always("time_period", time_period),
    Clause::when(
        "witness_fees",
        Condition::FlagDefaultOn("compensationOffered"),
        witness_fees,
    ),
    Clause::always("contempt", contempt),
    Clause::when("issued_by", Condition::Custom(has_issuer), issued_by),
    Clause::always("date", date),
    Clause::always("proof_of_service", proof_of_service),
];

fn court(ctx: &RenderContext<'_>) -> String {
    lines(&[
        ctx.text_or_blank("courtName"),
        ctx.text_or_blank("courtAddress"),
    ])
}

fn case_number(ctx: &RenderContext<'_>) -> String {
    format!("Case No: {}", ctx.text_or_blank("caseNumber"))
}

fn has_caption(ctx: &RenderContext<'_>) -> bool {
    ctx.fields.is_filled("plaintiffName") || ctx.fields.is_filled("defendantName")
}

fn caption(ctx: &RenderContext<'_>) -> String {
    let plaintiff = ctx.text("plaintiffName");
    let defendant = ctx.text("defendantName");
    let versus = if plaintiff.is_some() && defendant.is_some() {
        "v."
    } else {
        ""
    };
    lines(&[
        plaintiff
            .map(|name| format!("{name}, Plaintiff"))
            .unwrap_or_default(),
        versus.to_string(),
        defendant
            .map(|name| format!("{name}, Defendant"))
            .unwrap_or_default(),
    ])
}

fn title(_: &RenderContext<'_>) -> String {
    "SUBPOENA DUCES TECUM".to_string()
}

fn custodian(ctx: &RenderContext<'_>) -> String {
    let indented = |key: &str| {
        ctx.text(key)
            .map(|value| format!("    {value}"))
            .unwrap_or_default()
    };
    lines(&[
        format!("TO: {}", ctx.text_or_blank("custodianName")),
        indented("custodianTitle"),
        indented("custodianOrganization"),
        indented("custodianAddress"),
    ])
}

fn has_deposition(ctx: &RenderContext<'_>) -> bool {
    DEPOSITION_FIELDS.iter().all(|key| ctx.fields.is_filled(key))
}

fn lacks_deposition(ctx: &RenderContext<'_>) -> bool {
    !has_deposition(ctx)
}

fn deposition(ctx: &RenderContext<'_>) -> String {
    format!(
        "YOU ARE COMMANDED to appear at {} on {} at {} to testify at a deposition and to produce the following documents and tangible things:",
        ctx.text_or_blank("depositionLocation"),
        ctx.text_or_blank("depositionDate"),
        ctx.text_or_blank("depositionTime")
    )
}

fn production_only(_: &RenderContext<'_>) -> String {
    "YOU ARE COMMANDED to produce the following documents and tangible things:".to_string()
}

fn documents(ctx: &RenderContext<'_>) -> String {
    format!(
        "DOCUMENTS REQUESTED:\n\n{}",
        ctx.text_or_blank("documentsRequested")
    )
}

fn production_instructions(ctx: &RenderContext<'_>) -> String {
    format!(
        "PRODUCTION INSTRUCTIONS:\n{}",
        ctx.text_or("productionInstructions", DEFAULT_PRODUCTION_INSTRUCTIONS)
    )
}

fn definitions(_: &RenderContext<'_>) -> String {
    "DEFINITIONS:\n\"Document\" includes writings, drawings, graphs, charts, photographs, sound recordings, images, electronically stored information, and other data compilations.\n\n\"Communication\" includes any transmittal of information in written, electronic, or oral form.".to_string()
}

fn time_period(ctx: &RenderContext<'_>) -> String {
    format!(
        "TIME PERIOD: {}",
        ctx.text_or(
            "timePeriod",
            "All relevant time periods related to this litigation"
        )
    )
}

fn witness_fees(_: &RenderContext<'_>) -> String {
    "WITNESS FEES: Statutory witness fees and mileage will be provided.".to_string()
}

fn contempt(_: &RenderContext<'_>) -> String {
    "FAILURE TO COMPLY with this subpoena may result in punishment for contempt of court and monetary sanctions.".to_string()
}

fn has_issuer(ctx: &RenderContext<'_>) -> bool {
    ATTORNEY_FIELDS.iter().any(|key| ctx.fields.is_filled(key))
}

fn issued_by(ctx: &RenderContext<'_>) -> String {
    let continuation = |key: &str| {
        ctx.text(key)
            .map(|value| format!("           {value}"))
            .unwrap_or_default()
    };
    lines(&[
        format!("Issued by: {}", ctx.text_or_blank("issuingAttorney"))
            .trim_end()
            .to_string(),
        continuation("attorneyBarNumber"),
        continuation("attorneyFirm"),
        continuation("attorneyAddress"),
        continuation("attorneyPhone"),
        continuation("attorneyEmail"),
    ])
}

fn date(ctx: &RenderContext<'_>) -> String {
    format!("Date: {}", ctx.date_stamp())
}

fn proof_of_service(ctx: &RenderContext<'_>) -> String {
    format!(
        "---\nPROOF OF SERVICE\nI certify that on {}, I served this subpoena by [method of service] to the person named above.\n\nServer signature: ___________________",
        ctx.date_stamp()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldBag;
    use crate::templates::clause::{included_clauses, render_clauses};
    use chrono::NaiveDate;
    use shared_types::DocumentType;

    fn base() -> FieldBag {
        FieldBag::new()
            .with("courtName", "Superior Court of California, County of Los Angeles")
            .with("caseNumber", "24STCV01234")
            .with("custodianName", "Custodian of Records")
            .with("documentsRequested", "1. Dispatch logs for March 3, 2024")
    }

    fn ctx(fields: &FieldBag) -> RenderContext<'_> {
        let date = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        RenderContext::new(DocumentType::SubpoenaDucesTecum, fields, date)
    }

    #[test]
    fn test_witness_fees_on_unless_declined() {
        let fields = base();
        assert!(included_clauses(CLAUSES, &ctx(&fields)).contains(&"witness_fees"));

        let declined = base().with("compensationOffered", false);
        let text = render_clauses(CLAUSES, &ctx(&declined));
        assert!(!text.contains("WITNESS FEES"));
    }

    #[test]
    fn test_production_only_without_deposition_details() {
        let fields = base().with("depositionLocation", "123 Court St");
        let text = render_clauses(CLAUSES, &ctx(&fields));

        assert!(text.contains("YOU ARE COMMANDED to produce the following documents"));
        assert!(!text.contains("to testify at a deposition"));
    }

    #[test]
    fn test_full_deposition_command() {
        let fields = base()
            .with("depositionLocation", "123 Court St")
            .with("depositionDate", "May 1, 2024")
            .with("depositionTime", "10:00 AM")
            .with("plaintiffName", "Jane Doe")
            .with("defendantName", "City of Los Angeles");
        let text = render_clauses(CLAUSES, &ctx(&fields));

        assert!(text.contains("Jane Doe, Plaintiff\nv.\nCity of Los Angeles, Defendant"));
        assert!(text.contains(
            "YOU ARE COMMANDED to appear at 123 Court St on May 1, 2024 at 10:00 AM to testify"
        ));
    }

    #[test]
    fn test_partial_caption_keeps_filled_party() {
        let fields = base().with("plaintiffName", "Jane Plaintiff");
        let text = render_clauses(CLAUSES, &ctx(&fields));

        assert!(text.contains("Case No: 24STCV01234\n\nJane Plaintiff, Plaintiff\n\n"));
        assert!(!text.contains("v.\n"));
        assert!(!text.contains(", Defendant"));
    }

    #[test]
    fn test_attorney_details_kept_without_attorney_name() {
        let fields = base()
            .with("attorneyBarNumber", "BAR-998877")
            .with("attorneyFirm", "Rivera Law");
        let text = render_clauses(CLAUSES, &ctx(&fields));

        assert!(text.contains("Issued by:\n           BAR-998877\n           Rivera Law"));
    }

    #[test]
    fn test_proof_of_service_is_dated() {
        let fields = base();
        let text = render_clauses(CLAUSES, &ctx(&fields));
        assert!(text.contains("Date: April 10, 2024\n\n---\nPROOF OF SERVICE"));
        assert!(text.contains("I certify that on April 10, 2024, I served this subpoena"));
        assert!(!text.contains("Issued by:"));
    }
}
