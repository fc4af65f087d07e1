use chrono::NaiveDate;
use serde::Serialize;
use shared_types::DocumentType;
use state_law::State;

/// A rendered document ready for display or export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDocument {
    pub document_type: DocumentType,
    /// Selected state, when it resolved to a known jurisdiction
    pub state: Option<State>,
    pub generated_on: NaiveDate,
    pub text: String,
}

impl GeneratedDocument {
    /// `<type>_<State_Name>_<YYYYMMDD>.txt`, with the state segment left out
    /// when no state applies
    pub fn suggested_filename(&self) -> String {
        let date = self.generated_on.format("%Y%m%d");
        match self.state {
            Some(state) => format!(
                "{}_{}_{}.txt",
                self.document_type.key(),
                state.name().replace(' ', "_"),
                date
            ),
            None => format!("{}_{}.txt", self.document_type.key(), date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(state: Option<State>) -> GeneratedDocument {
        GeneratedDocument {
            document_type: DocumentType::StatePrr,
            state,
            generated_on: NaiveDate::from_ymd_opt(2024, 11, 5).unwrap(),
            text: String::new(),
        }
    }

    #[test]
    fn test_filename_with_state() {
        assert_eq!(
            doc(Some(State::NH)).suggested_filename(),
            "state_prr_New_Hampshire_20241105.txt"
        );
    }

    #[test]
    fn test_filename_without_state() {
        assert_eq!(doc(None).suggested_filename(), "state_prr_20241105.txt");
    }
}
