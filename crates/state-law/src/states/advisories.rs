//! Hostile-state advisories
//!
//! Based on documented aggressive responses to auditors and journalists.
//! States not listed here carry no advisory.

use crate::facts::{AdvisoryLevel, StateAdvisory};
use crate::jurisdiction::State;

pub(crate) fn advisory(state: State) -> Option<StateAdvisory> {
    let advisory = match state {
        State::TX => StateAdvisory {
            level: AdvisoryLevel::High,
            issues: &[
                "Aggressive police response to auditors",
                "Frequent arrests for photography in public",
                "Heavy-handed trespassing enforcement",
            ],
            recommendations: &[
                "Document everything",
                "Have backup recording",
                "Know local ordinances",
            ],
        },
        State::FL => StateAdvisory {
            level: AdvisoryLevel::High,
            issues: &[
                "Anti-photography local ordinances",
                "Aggressive prosecution of public records requesters",
                "Felony charges for auditors",
            ],
            recommendations: &[
                "Review municipal codes carefully",
                "Consider legal representation",
                "Document all interactions",
            ],
        },
        State::LA => StateAdvisory {
            level: AdvisoryLevel::High,
            issues: &[
                "Frequent arrests of journalists",
                "Obstruction charges for auditors",
                "All-party consent recording laws",
            ],
            recommendations: &[
                "Two-party consent required for recording",
                "High arrest risk",
                "Legal backup advised",
            ],
        },
        State::GA => StateAdvisory {
            level: AdvisoryLevel::Moderate,
            issues: &[
                "Inconsistent enforcement",
                "Some hostile police departments",
                "Trespassing charges common",
            ],
            recommendations: &[
                "Research specific jurisdiction",
                "Stay on clearly public property",
                "Document clearly",
            ],
        },
        State::TN => StateAdvisory {
            level: AdvisoryLevel::Moderate,
            issues: &[
                "Some hostile municipalities",
                "Photography restrictions in certain areas",
            ],
            recommendations: &[
                "Check local ordinances",
                "Document authority for access",
            ],
        },
        State::AR => StateAdvisory {
            level: AdvisoryLevel::Moderate,
            issues: &[
                "All-party consent recording",
                "Some aggressive police departments",
            ],
            recommendations: &[
                "Two-party consent required",
                "Avoid private property",
            ],
        },
        State::CA => StateAdvisory {
            level: AdvisoryLevel::Moderate,
            issues: &[
                "All-party consent recording",
                "Complex local ordinances",
                "Aggressive private security",
            ],
            recommendations: &[
                "Two-party consent required for recording",
                "Know municipal codes",
                "Private property issues",
            ],
        },
        _ => return None,
    };

    Some(advisory)
}
