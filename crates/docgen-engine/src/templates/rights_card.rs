//! Know-your-rights ID card
//!
//! Unlike the letters, the card has no form fields. It is a view over one
//! state's facts plus a fixed list of rights and a script to say aloud.

use serde::Serialize;
use state_law::{State, StateLawFact};

pub const RIGHTS: [&str; 4] = [
    "You have the right to remain silent",
    "You have the right to refuse searches",
    "You have the right to record police in public",
    "You have the right to leave if not detained",
];

pub const SCRIPT: &str = "\"Officer, am I free to leave? Am I being detained? I am exercising my right to remain silent and do not consent to any searches.\"";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RightsCard {
    pub state: State,
    pub state_name: &'static str,
    pub rights: [&'static str; 4],
    pub stop_and_id_statement: String,
    pub recording_statement: String,
    pub cannabis_statement: String,
    pub script: &'static str,
    /// Stop-and-identify statute, or "No Stop & ID statute"
    pub statute: &'static str,
}

impl RightsCard {
    pub fn for_state(fact: &StateLawFact) -> Self {
        let name = fact.name();
        let stop = &fact.stop_and_identify;

        let stop_and_id_statement = if stop.required {
            format!("{name} is a Stop & ID state. {}", stop.id_requirement)
        } else {
            format!("{name} is NOT a Stop & ID state")
        };

        Self {
            state: fact.state,
            state_name: name,
            rights: RIGHTS,
            stop_and_id_statement,
            recording_statement: format!(
                "Recording consent: {}",
                fact.recording_consent().label()
            ),
            cannabis_statement: format!(
                "Cannabis: {} ({})",
                fact.cannabis_status().label(),
                fact.cannabis.possession_limit
            ),
            script: SCRIPT,
            statute: if stop.required {
                stop.statute
            } else {
                "No Stop & ID statute"
            },
        }
    }

    /// Plain-text card for printing or saving
    pub fn to_text(&self) -> String {
        let mut out = format!("KNOW YOUR RIGHTS - {}\n\n", self.state_name.to_uppercase());
        for right in self.rights {
            out.push_str("- ");
            out.push_str(right);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.stop_and_id_statement);
        out.push('\n');
        out.push_str(&self.recording_statement);
        out.push('\n');
        out.push_str(&self.cannabis_statement);
        out.push_str("\n\nSAY THIS:\n");
        out.push_str(self.script);
        out.push_str("\n\nStatute: ");
        out.push_str(self.statute);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use state_law::StateLawTable;

    #[test]
    fn test_stop_and_id_state() {
        let card = RightsCard::for_state(StateLawTable::global().get(State::CA));
        assert_eq!(
            card.stop_and_id_statement,
            "California is a Stop & ID state. Name only"
        );
        assert_eq!(card.recording_statement, "Recording consent: All-party");
        assert_eq!(card.cannabis_statement, "Cannabis: Recreational (1 oz)");
        assert_eq!(card.statute, "Cal. Penal Code § 647(e)");
    }

    #[test]
    fn test_non_stop_and_id_state() {
        let card = RightsCard::for_state(StateLawTable::global().get(State::AK));
        assert_eq!(card.stop_and_id_statement, "Alaska is NOT a Stop & ID state");
        assert_eq!(card.statute, "No Stop & ID statute");
    }

    #[test]
    fn test_text_rendering() {
        let card = RightsCard::for_state(StateLawTable::global().get(State::GA));
        let text = card.to_text();
        assert!(text.starts_with("KNOW YOUR RIGHTS - GEORGIA\n\n- You have the right to remain silent\n"));
        assert!(text.contains("Cannabis: CBD only (Low-THC oil only)"));
        assert!(text.ends_with("Statute: O.C.G.A. § 16-11-36"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let card = RightsCard::for_state(StateLawTable::global().get(State::NY));
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["state"], "NY");
        assert_eq!(json["stateName"], "New York");
        assert_eq!(json["rights"].as_array().map(Vec::len), Some(4));
        assert!(json["stopAndIdStatement"].is_string());
    }
}
