//! Declarative clause lists
//!
//! A template is an ordered slice of [`Clause`]s. Each clause names the
//! condition under which it appears; excluded clauses leave no trace in the
//! output, not even a blank line.

use std::borrow::Cow;

use chrono::NaiveDate;
use shared_types::DocumentType;
use state_law::StateLawFact;

use crate::fields::FieldBag;

/// Long-form date used in every document ("March 5, 2024")
pub const DATE_FORMAT: &str = "%B %-d, %Y";

/// Everything a clause may read while rendering
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub document_type: DocumentType,
    pub fields: &'a FieldBag,
    /// Resolved state facts; only set for state-dependent documents
    pub law: Option<&'a StateLawFact>,
    pub date: NaiveDate,
}

impl<'a> RenderContext<'a> {
    pub fn new(document_type: DocumentType, fields: &'a FieldBag, date: NaiveDate) -> Self {
        Self {
            document_type,
            fields,
            law: None,
            date,
        }
    }

    pub fn with_law(mut self, law: &'a StateLawFact) -> Self {
        self.law = Some(law);
        self
    }

    pub fn text(&self, key: &str) -> Option<Cow<'a, str>> {
        self.fields.text(key)
    }

    /// Field text, or the empty string. Only for lines that go through
    /// [`lines`], which drops blanks.
    pub fn text_or_blank(&self, key: &str) -> Cow<'a, str> {
        self.text_or(key, "")
    }

    pub fn text_or(&self, key: &str, default: &'static str) -> Cow<'a, str> {
        self.text(key).unwrap_or(Cow::Borrowed(default))
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.fields.flag(key)
    }

    /// Statute citation from the resolved state, or `fallback`
    pub fn statute_or(&self, fallback: &'static str) -> &'a str {
        self.law.map(|law| law.statute()).unwrap_or(fallback)
    }

    pub fn date_stamp(&self) -> String {
        format_date(self.date)
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// When a clause is part of the document
#[derive(Clone, Copy)]
pub enum Condition {
    Always,
    /// Field has non-blank text
    Present(&'static str),
    /// Checkbox is ticked; absent means off
    Flag(&'static str),
    /// Checkbox is ticked; absent means on
    FlagDefaultOn(&'static str),
    Custom(fn(&RenderContext<'_>) -> bool),
}

impl Condition {
    pub fn holds(&self, ctx: &RenderContext<'_>) -> bool {
        match self {
            Condition::Always => true,
            Condition::Present(key) => ctx.fields.is_filled(key),
            Condition::Flag(key) => ctx.flag(key).unwrap_or(false),
            Condition::FlagDefaultOn(key) => ctx.flag(key).unwrap_or(true),
            Condition::Custom(check) => check(ctx),
        }
    }
}

#[derive(Clone, Copy)]
pub struct Clause {
    pub name: &'static str,
    pub condition: Condition,
    pub render: fn(&RenderContext<'_>) -> String,
}

impl Clause {
    pub const fn always(name: &'static str, render: fn(&RenderContext<'_>) -> String) -> Self {
        Self {
            name,
            condition: Condition::Always,
            render,
        }
    }

    pub const fn when(
        name: &'static str,
        condition: Condition,
        render: fn(&RenderContext<'_>) -> String,
    ) -> Self {
        Self {
            name,
            condition,
            render,
        }
    }

    pub fn applies(&self, ctx: &RenderContext<'_>) -> bool {
        self.condition.holds(ctx)
    }
}

impl std::fmt::Debug for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clause").field("name", &self.name).finish()
    }
}

/// Render the clauses that apply, separated by one blank line
pub fn render_clauses(clauses: &[Clause], ctx: &RenderContext<'_>) -> String {
    clauses
        .iter()
        .filter(|clause| clause.applies(ctx))
        .map(|clause| (clause.render)(ctx))
        .filter(|block| !block.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Names of the clauses that apply, in document order
pub fn included_clauses(clauses: &[Clause], ctx: &RenderContext<'_>) -> Vec<&'static str> {
    clauses
        .iter()
        .filter(|clause| clause.applies(ctx))
        .map(|clause| clause.name)
        .collect()
}

/// Join the non-blank parts with newlines
pub fn lines<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|part| part.as_ref().trim_end())
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
