//! Pre-suit notice of claim against a government entity

use super::clause::{lines, Clause, Condition, RenderContext};

pub const REQUIRED_FIELDS: &[&str] = &["governmentEntity", "claimantName", "incidentDescription"];

pub const OPTIONAL_FIELDS: &[&str] = &[
    "entityAddress",
    "claimantAddress",
    "claimantEmail",
    "claimantPhone",
    "dateOfBirth",
    "claimType",
    "applicableStatute",
    "incidentDate",
    "incidentTime",
    "incidentLocation",
    "injuriesDescription",
    "employeesInvolved",
    "legalBasis",
    "damagesAmount",
    "damageCategories",
    "witnesses",
    "evidence",
];

const DEFAULT_DAMAGE_CATEGORIES: &str = "- Medical expenses (past and future)
- Lost wages and earning capacity
- Pain and suffering
- Property damage
- Other consequential damages";

pub const CLAUSES: &[Clause] = &[
    Clause::always("title", title),
    Clause::always("to", to),
    Clause::always("from", from),
    Clause::always("date", date),
    Clause::always("subject", subject),
    Clause::always("notice", notice),
    Clause::always("claimant", claimant),
    Clause::always("incident", incident),
    Clause::always("description", description),
    Clause::when(
        "injuries",
        Condition::Present("injuriesDescription"),
        injuries,
    ),
    Clause::always("employees", employees),
    Clause::when("legal_basis", Condition::Present("legalBasis"), legal_basis),
    Clause::always("damages", damages),
    Clause::always("damage_categories", damage_categories),
    Clause::always("witnesses", witnesses),
    Clause::always("evidence", evidence),
    Clause::always("preservation", preservation),
    Clause::always("signature", signature),
    Clause::always("legal_notice", legal_notice),
];

fn title(_: &RenderContext<'_>) -> String {
    "NOTICE OF CLAIM".to_string()
}

fn to(ctx: &RenderContext<'_>) -> String {
    lines(&[
        format!("TO: {}", ctx.text_or_blank("governmentEntity")),
        ctx.text_or_blank("entityAddress").into_owned(),
    ])
}

fn from(ctx: &RenderContext<'_>) -> String {
    lines(&[
        format!("FROM: {}", ctx.text_or_blank("claimantName")),
        ctx.text_or_blank("claimantAddress").into_owned(),
        ctx.text_or_blank("claimantEmail").into_owned(),
        ctx.text_or_blank("claimantPhone").into_owned(),
    ])
}

fn date(ctx: &RenderContext<'_>) -> String {
    format!("DATE: {}", ctx.date_stamp())
}

fn subject(ctx: &RenderContext<'_>) -> String {
    match ctx.text("claimType") {
        Some(claim_type) => format!("RE: Notice of Claim - {claim_type}"),
        None => "RE: Notice of Claim".to_string(),
    }
}

fn notice(ctx: &RenderContext<'_>) -> String {
    format!(
        "Pursuant to {}, please accept this as formal notice of claim against {}.",
        ctx.text_or(
            "applicableStatute",
            "applicable state tort claims notice requirements"
        ),
        ctx.text_or_blank("governmentEntity")
    )
}

/// `Label: value` when the field is filled, otherwise nothing
fn labelled(ctx: &RenderContext<'_>, label: &str, key: &str) -> String {
    ctx.text(key)
        .map(|value| format!("{label}: {value}"))
        .unwrap_or_default()
}

fn claimant(ctx: &RenderContext<'_>) -> String {
    lines(&[
        "CLAIMANT INFORMATION:".to_string(),
        format!("Name: {}", ctx.text_or_blank("claimantName")),
        format!("Date of Birth: {}", ctx.text_or("dateOfBirth", "N/A")),
        labelled(ctx, "Address", "claimantAddress"),
    ])
}

fn incident(ctx: &RenderContext<'_>) -> String {
    lines(&[
        "INCIDENT INFORMATION:".to_string(),
        labelled(ctx, "Date of Incident", "incidentDate"),
        format!("Time of Incident: {}", ctx.text_or("incidentTime", "Unknown")),
        labelled(ctx, "Location", "incidentLocation"),
    ])
}

fn description(ctx: &RenderContext<'_>) -> String {
    format!(
        "DETAILED DESCRIPTION OF INCIDENT:\n{}",
        ctx.text_or_blank("incidentDescription")
    )
}

fn injuries(ctx: &RenderContext<'_>) -> String {
    format!(
        "NATURE OF INJURIES/DAMAGES:\n{}",
        ctx.text_or_blank("injuriesDescription")
    )
}

fn employees(ctx: &RenderContext<'_>) -> String {
    format!(
        "GOVERNMENT EMPLOYEES/AGENTS INVOLVED:\n{}",
        ctx.text_or("employeesInvolved", "To be determined through discovery")
    )
}

fn legal_basis(ctx: &RenderContext<'_>) -> String {
    format!("LEGAL BASIS FOR CLAIM:\n{}", ctx.text_or_blank("legalBasis"))
}

fn damages(ctx: &RenderContext<'_>) -> String {
    let amount = match ctx.text("damagesAmount") {
        Some(amount) => format!("${}", amount.trim_start_matches('$')),
        None => "To be determined".to_string(),
    };
    format!("DAMAGES CLAIMED:\n{amount}")
}

fn damage_categories(ctx: &RenderContext<'_>) -> String {
    format!(
        "Categories of damages include:\n{}",
        ctx.text_or("damageCategories", DEFAULT_DAMAGE_CATEGORIES)
    )
}

fn witnesses(ctx: &RenderContext<'_>) -> String {
    format!(
        "WITNESSES:\n{}",
        ctx.text_or("witnesses", "Available upon request")
    )
}

fn evidence(ctx: &RenderContext<'_>) -> String {
    format!(
        "EVIDENCE:\n{}",
        ctx.text_or("evidence", "Preserved and available for inspection")
    )
}

fn preservation(_: &RenderContext<'_>) -> String {
    "This notice is provided within the statutory timeframe and preserves all rights under applicable law. Please direct all correspondence to the contact information above.".to_string()
}

fn signature(ctx: &RenderContext<'_>) -> String {
    ctx.text_or_blank("claimantName").into_owned()
}

fn legal_notice(_: &RenderContext<'_>) -> String {
    "---\nLEGAL NOTICE: This constitutes formal notice under tort claims statutes. Failure of the government entity to properly handle this claim may waive governmental immunity defenses.".to_string()
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
            .with("governmentEntity", "City of Springfield")
            .with("claimantName", "Maria Lopez")
            .with("incidentDescription", "Officers damaged my camera during a lawful recording.")
    }

    #[test]
    fn test_defaults_fill_unknowns() {
        let fields = base();
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let ctx = RenderContext::new(DocumentType::NoticeOfClaim, &fields, date);
        let text = render_clauses(CLAUSES, &ctx);

        assert!(text.starts_with("NOTICE OF CLAIM\n\nTO: City of Springfield\n\nFROM: Maria Lopez\n\nDATE: February 29, 2024"));
        assert!(text.contains("Pursuant to applicable state tort claims notice requirements"));
        assert!(text.contains("Date of Birth: N/A"));
        assert!(text.contains("Time of Incident: Unknown"));
        assert!(text.contains("DAMAGES CLAIMED:\nTo be determined"));
        assert!(text.contains("- Lost wages and earning capacity"));
        assert!(!text.contains("Date of Incident:"));
        assert!(!text.contains("NATURE OF INJURIES"));
        assert!(!text.contains("LEGAL BASIS FOR CLAIM"));
    }

    #[test]
    fn test_damages_amount_is_prefixed_once() {
        let fields = base()
            .with("damagesAmount", "$12,500")
            .with("injuriesDescription", "Broken camera");
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let ctx = RenderContext::new(DocumentType::NoticeOfClaim, &fields, date);
        let text = render_clauses(CLAUSES, &ctx);

        assert!(text.contains("DAMAGES CLAIMED:\n$12,500"));
        assert!(included_clauses(CLAUSES, &ctx).contains(&"injuries"));
    }
}
