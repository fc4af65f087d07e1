use std::borrow::Cow;

use super::clause::{lines, Clause, Condition, RenderContext};

pub const REQUIRED_FIELDS: &[&str] = &["courtName", "caseNumber", "requestingParty", "requests"];

pub const OPTIONAL_FIELDS: &[&str] = &[
    "requestType",
    "partyDesignation",
    "respondingParty",
    "responseTime",
    "detailedRequests",
    "requestingAttorney",
    "attorneyBarNumber",
    "attorneyFirm",
    "attorneyAddress",
    "attorneyPhone",
    "attorneyEmail",
];

const DEFAULT_RESPONSE_TIME: &str = "30 days";

/// The three written-discovery devices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryKind {
    Interrogatories,
    RequestsForProduction,
    RequestsForAdmission,
}

impl DiscoveryKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "interrogatories" => Some(DiscoveryKind::Interrogatories),
            "requests for production" | "production" => Some(DiscoveryKind::RequestsForProduction),
            "requests for admission" | "admission" | "admissions" => {
                Some(DiscoveryKind::RequestsForAdmission)
            }
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiscoveryKind::Interrogatories => "Interrogatories",
            DiscoveryKind::RequestsForProduction => "Requests for Production",
            DiscoveryKind::RequestsForAdmission => "Requests for Admission",
        }
    }
}

pub const CLAUSES: &[Clause] = &[
    Clause::always("court", court),
    Clause::always("case_number", case_number),
    Clause::always("requesting_party", requesting_party),
    Clause::always("title", title),
    Clause::always("addressee", addressee),
    Clause::always("instruction", instruction),
    Clause::when("heading", Condition::Custom(has_known_kind), heading),
    Clause::always("requests", requests),
    Clause::always("definitions", definitions),
    Clause::always("specific_requests", specific_requests),
    Clause::when(
        "deemed_admitted",
        Condition::Custom(is_admission),
        deemed_admitted,
    ),
    Clause::always("submitted", submitted),
    Clause::always("date", date),
    Clause::always("certificate_of_service", certificate_of_service),
];

fn request_type<'a>(ctx: &RenderContext<'a>) -> Cow<'a, str> {
    ctx.text_or("requestType", DiscoveryKind::Interrogatories.label())
}

fn kind(ctx: &RenderContext<'_>) -> Option<DiscoveryKind> {
    DiscoveryKind::parse(&request_type(ctx))
}

fn responding_party<'a>(ctx: &RenderContext<'a>) -> Cow<'a, str> {
    ctx.text_or("respondingParty", "Responding Party")
}

fn response_time<'a>(ctx: &RenderContext<'a>) -> Cow<'a, str> {
    ctx.text_or("responseTime", DEFAULT_RESPONSE_TIME)
}

fn court(ctx: &RenderContext<'_>) -> String {
    ctx.text_or_blank("courtName").into_owned()
}

fn case_number(ctx: &RenderContext<'_>) -> String {
    format!("Case No: {}", ctx.text_or_blank("caseNumber"))
}

fn requesting_party(ctx: &RenderContext<'_>) -> String {
    format!(
        "{}, {}",
        ctx.text_or_blank("requestingParty"),
        ctx.text_or("partyDesignation", "Plaintiff")
    )
}

fn title(ctx: &RenderContext<'_>) -> String {
    request_type(ctx).to_uppercase()
}

fn addressee(ctx: &RenderContext<'_>) -> String {
    format!(
        "TO: {} and their attorney of record",
        responding_party(ctx)
    )
}

fn instruction(ctx: &RenderContext<'_>) -> String {
    format!(
        "{} requests that {} respond to the following {} within {} of service:",
        ctx.text_or_blank("requestingParty"),
        responding_party(ctx),
        request_type(ctx),
        response_time(ctx)
    )
}

fn has_known_kind(ctx: &RenderContext<'_>) -> bool {
    kind(ctx).is_some()
}

fn heading(ctx: &RenderContext<'_>) -> String {
    kind(ctx)
        .map(|kind| format!("{}:", kind.label().to_uppercase()))
        .unwrap_or_default()
}

fn requests(ctx: &RenderContext<'_>) -> String {
    ctx.text_or_blank("requests").into_owned()
}

fn definitions(ctx: &RenderContext<'_>) -> String {
    format!(
        r#"DEFINITIONS AND INSTRUCTIONS:

1. "You" and "Your" refer to {} and any agents, employees, representatives, or persons acting on their behalf.

2. "Document" means any written, recorded, or graphic matter, including electronically stored information, as defined in the applicable rules of civil procedure.

3. "Communication" means any transmittal of information, whether oral, written, or electronic.

4. "Identify" when referring to a person means to state their full name, current or last known address, telephone number, and job title or relationship to this matter.

5. "Identify" when referring to a document means to state its date, type, title, author, recipient(s), and current custodian.

6. These requests are continuing in nature. You are required to supplement your responses if you obtain additional responsive information.

7. If you object to any request, state the specific grounds for each objection and answer to the extent you do not object.

8. If you claim privilege for any document or information, provide a privilege log identifying:
   - Document date and type
   - Author and recipient(s)
   - Subject matter
   - Specific privilege claimed
   - Factual basis for privilege claim"#,
        responding_party(ctx)
    )
}

fn specific_requests(ctx: &RenderContext<'_>) -> String {
    let detailed = ctx
        .text("detailedRequests")
        .unwrap_or_else(|| ctx.text_or_blank("requests"));
    format!("SPECIFIC REQUESTS:\n\n{detailed}")
}

fn is_admission(ctx: &RenderContext<'_>) -> bool {
    kind(ctx) == Some(DiscoveryKind::RequestsForAdmission)
}

fn deemed_admitted(ctx: &RenderContext<'_>) -> String {
    format!(
        "NOTICE: Failure to respond to these requests for admission within {} will result in the matters being deemed admitted pursuant to applicable rules of civil procedure.",
        response_time(ctx)
    )
}

fn submitted(ctx: &RenderContext<'_>) -> String {
    let attorney_for = if ctx.fields.is_filled("requestingAttorney") {
        format!("Attorney for {}", ctx.text_or_blank("requestingParty"))
    } else {
        String::new()
    };
    let signature = lines(&[
        ctx.text_or_blank("requestingAttorney").into_owned(),
        ctx.text_or_blank("attorneyBarNumber").into_owned(),
        attorney_for,
        ctx.text_or_blank("attorneyFirm").into_owned(),
        ctx.text_or_blank("attorneyAddress").into_owned(),
        ctx.text_or_blank("attorneyPhone").into_owned(),
        ctx.text_or_blank("attorneyEmail").into_owned(),
    ]);

    if signature.is_empty() {
        "Respectfully submitted,".to_string()
    } else {
        format!("Respectfully submitted,\n\n{signature}")
    }
}

fn date(ctx: &RenderContext<'_>) -> String {
    format!("Date: {}", ctx.date_stamp())
}

fn certificate_of_service(ctx: &RenderContext<'_>) -> String {
    format!(
        "---\nCERTIFICATE OF SERVICE\nI certify that on {}, I served a true copy of this {} on all parties via [method of service].\n\n___________________",
        ctx.date_stamp(),
        request_type(ctx)
    )
}
