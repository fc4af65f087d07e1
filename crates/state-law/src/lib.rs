//! Static legal facts for all fifty U.S. states and the District of Columbia
//!
//! The table covers public-records statutes and response timeframes,
//! stop-and-identify rules, recording-consent rules and cannabis law, plus
//! notable case law and hostile-state advisories for reference views.
//!
//! The table is built once per process and never mutated, so it can be read
//! from any number of threads without locking.

pub mod calendar;
pub mod facts;
pub mod jurisdiction;
pub mod states;

use lazy_static::lazy_static;

pub use calendar::FederalBusinessCalendar;
pub use facts::{
    AdvisoryLevel, CannabisLaw, CannabisStatus, CaseLaw, PublicRecordsLaw, RecordingConsent,
    RecordingLaw, StateAdvisory, StateLawFact, StopAndIdentify, TimeframeClass,
};
pub use jurisdiction::{State, UnknownStateError};

lazy_static! {
    static ref GLOBAL_TABLE: StateLawTable = StateLawTable::new();
}

/// One [`StateLawFact`] per jurisdiction, indexed by [`State::index`]
#[derive(Debug, Clone)]
pub struct StateLawTable {
    facts: [StateLawFact; 51],
}

impl StateLawTable {
    pub fn new() -> Self {
        Self {
            facts: State::ALL.map(states::fact_for),
        }
    }

    /// Process-wide shared table
    pub fn global() -> &'static StateLawTable {
        &GLOBAL_TABLE
    }

    /// Look up a state by full name or postal code.
    ///
    /// Unrecognized names fail with [`UnknownStateError`] instead of yielding
    /// an empty record.
    pub fn lookup(&self, state_name: &str) -> Result<&StateLawFact, UnknownStateError> {
        let state: State = state_name.parse()?;
        Ok(self.get(state))
    }

    pub fn get(&self, state: State) -> &StateLawFact {
        &self.facts[state.index()]
    }

    /// All facts in alphabetical order of state name (D.C. last)
    pub fn all(&self) -> impl Iterator<Item = &StateLawFact> {
        self.facts.iter()
    }

    pub fn case_law(&self, state: State) -> &'static [CaseLaw] {
        states::notable_cases(state)
    }

    pub fn advisory(&self, state: State) -> Option<StateAdvisory> {
        states::advisory(state)
    }
}

impl Default for StateLawTable {
    fn default() -> Self {
        Self::new()
    }
}
