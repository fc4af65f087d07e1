//! Recording-consent rules

use crate::facts::{RecordingConsent, RecordingLaw};
use crate::jurisdiction::State;

const ONE_PARTY_EXCEPTIONS: &[&str] = &["Confidential communications", "Private conversations"];

const ALL_PARTY_EXCEPTIONS: &[&str] = &["All parties must consent to audio recording"];

const CALIFORNIA_EXCEPTIONS: &[&str] = &[
    "All parties must consent to audio recording",
    "Video recording in public is legal",
];

pub(crate) fn recording_law(state: State) -> RecordingLaw {
    let all_party = matches!(
        state,
        State::AR
            | State::CA
            | State::CT
            | State::DE
            | State::FL
            | State::IL
            | State::MD
            | State::MA
            | State::MT
            | State::NV
            | State::NH
            | State::PA
            | State::WA
    );

    if !all_party {
        return RecordingLaw {
            consent: RecordingConsent::OneParty,
            video_legal: true,
            audio_legal: true,
            exceptions: ONE_PARTY_EXCEPTIONS,
        };
    }

    let exceptions = match state {
        State::CA => CALIFORNIA_EXCEPTIONS,
        _ => ALL_PARTY_EXCEPTIONS,
    };

    RecordingLaw {
        consent: RecordingConsent::AllParty,
        video_legal: true,
        audio_legal: false,
        exceptions,
    }
}
