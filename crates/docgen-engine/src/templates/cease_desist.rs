use super::clause::{lines, Clause, Condition, RenderContext};

pub const REQUIRED_FIELDS: &[&str] = &["senderName", "recipientName", "conductDescription"];

pub const OPTIONAL_FIELDS: &[&str] = &[
    "senderAddress",
    "senderEmail",
    "senderPhone",
    "recipientAddress",
    "violationType",
    "legalBasis",
    "specificViolations",
    "evidence",
    "additionalDemands",
    "additionalConsequences",
    "complianceDeadline",
];

pub const DEFAULT_COMPLIANCE_DEADLINE: &str = "10 business days from receipt";

pub const CLAUSES: &[Clause] = &[
    Clause::always("sender", sender),
    Clause::always("date", date),
    Clause::always("recipient", recipient),
    Clause::always("subject", subject),
    Clause::always("salutation", salutation),
    Clause::always("demand_intro", demand_intro),
    Clause::always("conduct", conduct),
    Clause::always("legal_basis", legal_basis),
    Clause::when(
        "specific_violations",
        Condition::Present("specificViolations"),
        specific_violations,
    ),
    Clause::always("evidence", evidence),
    Clause::always("demand", demand),
    Clause::always("consequences", consequences),
    Clause::always("formal_notice", formal_notice),
    Clause::always("time_to_comply", time_to_comply),
    Clause::always("sign_off", sign_off),
    Clause::always("signature", signature),
    Clause::always("legal_notice", legal_notice),
];

fn sender(ctx: &RenderContext<'_>) -> String {
    lines(&[
        ctx.text_or_blank("senderName"),
        ctx.text_or_blank("senderAddress"),
        ctx.text_or_blank("senderEmail"),
        ctx.text_or_blank("senderPhone"),
    ])
}

fn date(ctx: &RenderContext<'_>) -> String {
    ctx.date_stamp()
}

fn recipient(ctx: &RenderContext<'_>) -> String {
    lines(&[
        ctx.text_or_blank("recipientName"),
        ctx.text_or_blank("recipientAddress"),
    ])
}

fn subject(ctx: &RenderContext<'_>) -> String {
    match ctx.text("violationType") {
        Some(violation) => format!("RE: CEASE AND DESIST - {violation}"),
        None => "RE: CEASE AND DESIST".to_string(),
    }
}

fn salutation(ctx: &RenderContext<'_>) -> String {
    format!("Dear {}:", ctx.text_or_blank("recipientName"))
}

fn demand_intro(_: &RenderContext<'_>) -> String {
    "I am writing to demand that you immediately CEASE AND DESIST from the following conduct:"
        .to_string()
}

fn conduct(ctx: &RenderContext<'_>) -> String {
    ctx.text_or_blank("conductDescription").into_owned()
}

fn legal_basis(ctx: &RenderContext<'_>) -> String {
    format!(
        "LEGAL BASIS:\n{}",
        ctx.text_or(
            "legalBasis",
            "Your conduct violates my legal rights including, but not limited to, applicable state and federal law."
        )
    )
}

fn specific_violations(ctx: &RenderContext<'_>) -> String {
    format!(
        "SPECIFIC VIOLATIONS:\n{}",
        ctx.text_or_blank("specificViolations")
    )
}

fn evidence(ctx: &RenderContext<'_>) -> String {
    format!(
        "EVIDENCE:\n{}",
        ctx.text_or(
            "evidence",
            "I have documented evidence of these violations which will be preserved for legal proceedings if necessary."
        )
    )
}

fn demand(ctx: &RenderContext<'_>) -> String {
    format!(
        "DEMAND:\nYou are hereby directed to immediately:\n1. CEASE all conduct described above\n2. DESIST from any future similar conduct\n3. {}",
        ctx.text_or(
            "additionalDemands",
            "Provide written confirmation of compliance within 10 business days"
        )
    )
}

fn consequences(ctx: &RenderContext<'_>) -> String {
    format!(
        "CONSEQUENCES OF NON-COMPLIANCE:\nFailure to comply with this demand will result in:\n- Formal legal action without further notice\n- Claims for injunctive relief\n- Claims for damages, costs, and attorney's fees\n- {}",
        ctx.text_or(
            "additionalConsequences",
            "All other remedies available under law"
        )
    )
}

fn formal_notice(_: &RenderContext<'_>) -> String {
    "This letter serves as formal legal notice. Your failure to respond or comply will be used as evidence of willful misconduct in any subsequent legal proceedings.".to_string()
}

fn time_to_comply(ctx: &RenderContext<'_>) -> String {
    format!(
        "TIME TO COMPLY: {}",
        ctx.text_or("complianceDeadline", DEFAULT_COMPLIANCE_DEADLINE)
    )
}

fn sign_off(_: &RenderContext<'_>) -> String {
    "Govern yourself accordingly.".to_string()
}

fn signature(ctx: &RenderContext<'_>) -> String {
    ctx.text_or_blank("senderName").into_owned()
}

fn legal_notice(_: &RenderContext<'_>) -> String {
    "---\nLEGAL NOTICE: This is a formal cease and desist demand. Preservation of all relevant evidence is required. Any destruction of evidence may constitute spoliation.".to_string()
}
