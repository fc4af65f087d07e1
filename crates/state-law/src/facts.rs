//! Per-state legal fact types

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::calendar::FederalBusinessCalendar;
use crate::jurisdiction::State;

lazy_static! {
    /// "10 business days", "7-10 business days", "30 calendar days"
    static ref COUNTED_TIMEFRAME: Regex =
        Regex::new(r"(?i)^\s*(?:\d+\s*-\s*)?(\d+)\s+(business|calendar)\s+days?\s*$").unwrap();
}

/// How a public-records response period is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeframeClass {
    Business,
    Calendar,
    /// No fixed number of days; the statute requires a "reasonable time"
    Reasonable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicRecordsLaw {
    pub statute: &'static str,
    pub response_timeframe: &'static str,
    pub timeframe_class: TimeframeClass,
}

impl PublicRecordsLaw {
    /// Number of days the agency has to respond, if the timeframe is countable.
    /// Ranges ("7-10 business days") use the upper bound.
    pub fn response_days(&self) -> Option<u32> {
        if self.timeframe_class == TimeframeClass::Reasonable {
            return None;
        }
        COUNTED_TIMEFRAME
            .captures(self.response_timeframe)
            .and_then(|caps| caps[1].parse().ok())
    }

    /// Latest date a response is due for a request sent on `sent_on`
    pub fn response_due(&self, sent_on: NaiveDate) -> Option<NaiveDate> {
        let days = self.response_days()?;
        match self.timeframe_class {
            TimeframeClass::Business => FederalBusinessCalendar::add_business_days(sent_on, days),
            TimeframeClass::Calendar => FederalBusinessCalendar::add_calendar_days(sent_on, days),
            TimeframeClass::Reasonable => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopAndIdentify {
    /// Whether the state has a stop-and-identify statute
    pub required: bool,
    /// Statute citation, or "None"
    pub statute: &'static str,
    /// What must be disclosed ("Name only", "Name and address", "No requirement")
    pub id_requirement: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordingConsent {
    OneParty,
    AllParty,
}

impl RecordingConsent {
    pub fn label(&self) -> &'static str {
        match self {
            RecordingConsent::OneParty => "One-party",
            RecordingConsent::AllParty => "All-party",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingLaw {
    pub consent: RecordingConsent,
    /// Video recording of police in public
    pub video_legal: bool,
    /// Audio recording without every party's consent
    pub audio_legal: bool,
    pub exceptions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CannabisStatus {
    Illegal,
    #[serde(rename = "CBDOnly")]
    CbdOnly,
    MedicalOnly,
    Recreational,
}

impl CannabisStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CannabisStatus::Illegal => "Illegal",
            CannabisStatus::CbdOnly => "CBD only",
            CannabisStatus::MedicalOnly => "Medical only",
            CannabisStatus::Recreational => "Recreational",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CannabisLaw {
    pub status: CannabisStatus,
    pub possession_limit: &'static str,
    /// Year the current regime was enacted, or "N/A"
    pub enacted_year: &'static str,
    pub penalties: &'static str,
    pub medical_info: Option<&'static str>,
}

/// Everything the document generator and the browsing views know about one
/// jurisdiction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateLawFact {
    pub state: State,
    pub public_records: PublicRecordsLaw,
    pub stop_and_identify: StopAndIdentify,
    pub recording: RecordingLaw,
    pub cannabis: CannabisLaw,
}

impl StateLawFact {
    pub fn name(&self) -> &'static str {
        self.state.name()
    }

    /// Public-records statute citation
    pub fn statute(&self) -> &'static str {
        self.public_records.statute
    }

    pub fn response_timeframe(&self) -> &'static str {
        self.public_records.response_timeframe
    }

    pub fn recording_consent(&self) -> RecordingConsent {
        self.recording.consent
    }

    pub fn cannabis_status(&self) -> CannabisStatus {
        self.cannabis.status
    }
}

/// A court decision worth knowing about in a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseLaw {
    pub name: &'static str,
    pub year: u16,
    pub citation: &'static str,
    pub description: &'static str,
    pub significance: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdvisoryLevel {
    Moderate,
    High,
}

/// Documented hostile responses to auditors, journalists and records
/// requesters in a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateAdvisory {
    pub level: AdvisoryLevel,
    pub issues: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn law(timeframe: &'static str, class: TimeframeClass) -> PublicRecordsLaw {
        PublicRecordsLaw {
            statute: "Test Code § 1",
            response_timeframe: timeframe,
            timeframe_class: class,
        }
    }

    #[test]
    fn test_response_days() {
        assert_eq!(
            law("10 business days", TimeframeClass::Business).response_days(),
            Some(10)
        );
        assert_eq!(
            law("7-10 business days", TimeframeClass::Business).response_days(),
            Some(10)
        );
        assert_eq!(
            law("30 calendar days", TimeframeClass::Calendar).response_days(),
            Some(30)
        );
        assert_eq!(
            law("Reasonable time", TimeframeClass::Reasonable).response_days(),
            None
        );
    }

    #[test]
    fn test_response_due_calendar() {
        let sent = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let due = law("10 calendar days", TimeframeClass::Calendar).response_due(sent);
        assert_eq!(due, NaiveDate::from_ymd_opt(2024, 1, 12));
    }

    #[test]
    fn test_response_due_business() {
        // Friday + 3 business days
        let sent = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let due = law("3 business days", TimeframeClass::Business).response_due(sent);
        assert_eq!(due, NaiveDate::from_ymd_opt(2024, 1, 10));
    }

    #[test]
    fn test_reasonable_time_has_no_due_date() {
        let sent = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(
            law("Reasonable time", TimeframeClass::Reasonable).response_due(sent),
            None
        );
    }
}
