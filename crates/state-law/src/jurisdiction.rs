//! U.S. jurisdictions covered by the state law table
//!
//! All fifty states plus the District of Columbia. Variants are declared in
//! alphabetical order of the full name (D.C. last), which is also the order
//! [`State::ALL`] and the table iterate in.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// US state (and D.C.) postal codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    AL,
    AK,
    AZ,
    AR,
    CA,
    CO,
    CT,
    DE,
    FL,
    GA,
    HI,
    ID,
    IL,
    IN,
    IA,
    KS,
    KY,
    LA,
    ME,
    MD,
    MA,
    MI,
    MN,
    MS,
    MO,
    MT,
    NE,
    NV,
    NH,
    NJ,
    NM,
    NY,
    NC,
    ND,
    OH,
    OK,
    OR,
    PA,
    RI,
    SC,
    SD,
    TN,
    TX,
    UT,
    VT,
    VA,
    WA,
    WV,
    WI,
    WY,
    DC,
}

/// Lookup of a state name or code that is not one of the 51 jurisdictions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown state: {state}")]
pub struct UnknownStateError {
    pub state: String,
}

lazy_static! {
    /// Lower-cased full names and postal codes -> State
    static ref STATE_INDEX: HashMap<String, State> = {
        let mut index = HashMap::with_capacity(State::ALL.len() * 2);
        for state in State::ALL {
            index.insert(state.name().to_lowercase(), state);
            index.insert(state.code().to_lowercase(), state);
        }
        index.insert("washington dc".to_string(), State::DC);
        index.insert("washington d.c.".to_string(), State::DC);
        index.insert("d.c.".to_string(), State::DC);
        index
    };
}

impl State {
    pub const ALL: [State; 51] = [
        State::AL,
        State::AK,
        State::AZ,
        State::AR,
        State::CA,
        State::CO,
        State::CT,
        State::DE,
        State::FL,
        State::GA,
        State::HI,
        State::ID,
        State::IL,
        State::IN,
        State::IA,
        State::KS,
        State::KY,
        State::LA,
        State::ME,
        State::MD,
        State::MA,
        State::MI,
        State::MN,
        State::MS,
        State::MO,
        State::MT,
        State::NE,
        State::NV,
        State::NH,
        State::NJ,
        State::NM,
        State::NY,
        State::NC,
        State::ND,
        State::OH,
        State::OK,
        State::OR,
        State::PA,
        State::RI,
        State::SC,
        State::SD,
        State::TN,
        State::TX,
        State::UT,
        State::VT,
        State::VA,
        State::WA,
        State::WV,
        State::WI,
        State::WY,
        State::DC,
    ];

    /// Position in [`State::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Get the full state name
    pub fn name(&self) -> &'static str {
        match self {
            State::AL => "Alabama",
            State::AK => "Alaska",
            State::AZ => "Arizona",
            State::AR => "Arkansas",
            State::CA => "California",
            State::CO => "Colorado",
            State::CT => "Connecticut",
            State::DE => "Delaware",
            State::FL => "Florida",
            State::GA => "Georgia",
            State::HI => "Hawaii",
            State::ID => "Idaho",
            State::IL => "Illinois",
            State::IN => "Indiana",
            State::IA => "Iowa",
            State::KS => "Kansas",
            State::KY => "Kentucky",
            State::LA => "Louisiana",
            State::ME => "Maine",
            State::MD => "Maryland",
            State::MA => "Massachusetts",
            State::MI => "Michigan",
            State::MN => "Minnesota",
            State::MS => "Mississippi",
            State::MO => "Missouri",
            State::MT => "Montana",
            State::NE => "Nebraska",
            State::NV => "Nevada",
            State::NH => "New Hampshire",
            State::NJ => "New Jersey",
            State::NM => "New Mexico",
            State::NY => "New York",
            State::NC => "North Carolina",
            State::ND => "North Dakota",
            State::OH => "Ohio",
            State::OK => "Oklahoma",
            State::OR => "Oregon",
            State::PA => "Pennsylvania",
            State::RI => "Rhode Island",
            State::SC => "South Carolina",
            State::SD => "South Dakota",
            State::TN => "Tennessee",
            State::TX => "Texas",
            State::UT => "Utah",
            State::VT => "Vermont",
            State::VA => "Virginia",
            State::WA => "Washington",
            State::WV => "West Virginia",
            State::WI => "Wisconsin",
            State::WY => "Wyoming",
            State::DC => "District of Columbia",
        }
    }

    /// Two-letter postal code
    pub fn code(&self) -> &'static str {
        // Variant names are the postal codes.
        match self {
            State::AL => "AL",
            State::AK => "AK",
            State::AZ => "AZ",
            State::AR => "AR",
            State::CA => "CA",
            State::CO => "CO",
            State::CT => "CT",
            State::DE => "DE",
            State::FL => "FL",
            State::GA => "GA",
            State::HI => "HI",
            State::ID => "ID",
            State::IL => "IL",
            State::IN => "IN",
            State::IA => "IA",
            State::KS => "KS",
            State::KY => "KY",
            State::LA => "LA",
            State::ME => "ME",
            State::MD => "MD",
            State::MA => "MA",
            State::MI => "MI",
            State::MN => "MN",
            State::MS => "MS",
            State::MO => "MO",
            State::MT => "MT",
            State::NE => "NE",
            State::NV => "NV",
            State::NH => "NH",
            State::NJ => "NJ",
            State::NM => "NM",
            State::NY => "NY",
            State::NC => "NC",
            State::ND => "ND",
            State::OH => "OH",
            State::OK => "OK",
            State::OR => "OR",
            State::PA => "PA",
            State::RI => "RI",
            State::SC => "SC",
            State::SD => "SD",
            State::TN => "TN",
            State::TX => "TX",
            State::UT => "UT",
            State::VT => "VT",
            State::VA => "VA",
            State::WA => "WA",
            State::WV => "WV",
            State::WI => "WI",
            State::WY => "WY",
            State::DC => "DC",
        }
    }

    /// Parse from state code or full name (case-insensitive, surrounding
    /// whitespace ignored)
    pub fn parse(s: &str) -> Option<Self> {
        STATE_INDEX.get(&s.trim().to_lowercase()).copied()
    }
}

impl FromStr for State {
    type Err = UnknownStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        State::parse(s).ok_or_else(|| UnknownStateError {
            state: s.to_string(),
        })
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_state_parsing() {
        assert_eq!(State::parse("FL"), Some(State::FL));
        assert_eq!(State::parse("florida"), Some(State::FL));
        assert_eq!(State::parse("TX"), Some(State::TX));
        assert_eq!(State::parse("  New York "), Some(State::NY));
        assert_eq!(State::parse("NORTH CAROLINA"), Some(State::NC));
        assert_eq!(State::parse("District of Columbia"), Some(State::DC));
        assert_eq!(State::parse("Washington DC"), Some(State::DC));
    }

    #[test]
    fn test_unknown_state() {
        assert_eq!(State::parse("Atlantis"), None);
        assert_eq!(State::parse(""), None);
        assert_eq!(
            "Atlantis".parse::<State>(),
            Err(UnknownStateError {
                state: "Atlantis".to_string()
            })
        );
    }

    #[test]
    fn test_all_is_alphabetical_with_dc_last() {
        let names: Vec<&str> = State::ALL[..50].iter().map(|s| s.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(State::ALL[50], State::DC);
    }

    #[test]
    fn test_index_matches_position() {
        for (position, state) in State::ALL.iter().enumerate() {
            assert_eq!(state.index(), position);
        }
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&State::CA).unwrap();
        assert_eq!(json, "\"CA\"");
    }

    proptest! {
        /// Property: every state round-trips through its name and its code
        #[test]
        fn names_and_codes_round_trip(i in 0usize..51) {
            let state = State::ALL[i];
            prop_assert_eq!(State::parse(state.name()), Some(state));
            prop_assert_eq!(State::parse(state.code()), Some(state));
            prop_assert_eq!(State::parse(&state.name().to_uppercase()), Some(state));
        }
    }
}
