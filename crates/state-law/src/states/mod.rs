//! State-specific statute data
//!
//! Each module holds one concern as an exhaustive `match` over [`State`], so
//! adding a jurisdiction without data for every concern fails to compile.

mod advisories;
mod cannabis;
mod case_law;
mod public_records;
mod recording;
mod stop_and_identify;

use crate::facts::{CaseLaw, StateAdvisory, StateLawFact};
use crate::jurisdiction::State;

/// Assemble the full fact record for one state
pub(crate) fn fact_for(state: State) -> StateLawFact {
    StateLawFact {
        state,
        public_records: public_records::public_records_law(state),
        stop_and_identify: stop_and_identify::stop_and_identify(state),
        recording: recording::recording_law(state),
        cannabis: cannabis::cannabis_law(state),
    }
}

pub(crate) fn notable_cases(state: State) -> &'static [CaseLaw] {
    case_law::notable_cases(state)
}

pub(crate) fn advisory(state: State) -> Option<StateAdvisory> {
    advisories::advisory(state)
}
