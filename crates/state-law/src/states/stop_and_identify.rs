//! Stop-and-identify statutes

use crate::facts::StopAndIdentify;
use crate::jurisdiction::State;

pub(crate) fn stop_and_identify(state: State) -> StopAndIdentify {
    let (required, statute, id_requirement) = match state {
        State::AL => (true, "Ala. Code § 15-5-30", "Name only"),
        State::AK => (false, "None", "No requirement"),
        State::AZ => (true, "A.R.S. § 13-2412", "Name and address"),
        State::AR => (true, "Ark. Code Ann. § 5-71-213", "Name only"),
        State::CA => (true, "Cal. Penal Code § 647(e)", "Name only"),
        State::CO => (true, "C.R.S. § 16-3-103", "Name and address"),
        State::CT => (true, "Conn. Gen. Stat. § 54-1f", "Name only"),
        State::DE => (true, "11 Del. C. § 1902", "Name only"),
        State::FL => (true, "Fla. Stat. § 856.021", "Name only"),
        State::GA => (true, "O.C.G.A. § 16-11-36", "Name and address"),
        State::HI => (false, "None", "No requirement"),
        State::ID => (false, "None", "No requirement"),
        State::IL => (true, "725 ILCS 5/107-14", "Name only"),
        State::IN => (true, "Ind. Code § 34-28-5-3.5", "Name and address"),
        State::IA => (false, "None", "No requirement"),
        State::KS => (true, "K.S.A. § 22-2402", "Name only"),
        State::KY => (false, "None", "No requirement"),
        State::LA => (true, "La. Code Crim. Proc. Art. 215.1", "Name only"),
        State::ME => (false, "None", "No requirement"),
        State::MD => (false, "None", "No requirement"),
        State::MA => (false, "None", "No requirement"),
        State::MI => (false, "None", "No requirement"),
        State::MN => (false, "None", "No requirement"),
        State::MS => (false, "None", "No requirement"),
        State::MO => (true, "Mo. Rev. Stat. § 84.710", "Name only"),
        State::MT => (true, "Mont. Code Ann. § 46-5-401", "Name only"),
        State::NE => (true, "Neb. Rev. Stat. § 29-829", "Name only"),
        State::NV => (true, "Nev. Rev. Stat. § 171.123", "Name only"),
        State::NH => (true, "N.H. Rev. Stat. Ann. § 594:2", "Name only"),
        State::NJ => (false, "None", "No requirement"),
        State::NM => (true, "NMSA § 30-22-3", "Name only"),
        State::NY => (false, "None", "No requirement"),
        State::NC => (false, "None", "No requirement"),
        State::ND => (true, "N.D.C.C. § 29-29-21", "Name only"),
        State::OH => (true, "Ohio Rev. Code § 2921.29", "Name only"),
        State::OK => (false, "None", "No requirement"),
        State::OR => (false, "None", "No requirement"),
        State::PA => (false, "None", "No requirement"),
        State::RI => (true, "R.I. Gen. Laws § 12-7-1", "Name only"),
        State::SC => (false, "None", "No requirement"),
        State::SD => (false, "None", "No requirement"),
        State::TN => (false, "None", "No requirement"),
        State::TX => (true, "Tex. Penal Code § 38.02", "Name and address"),
        State::UT => (true, "Utah Code § 77-7-15", "Name only"),
        State::VT => (true, "13 V.S.A. § 5511", "Name only"),
        State::VA => (false, "None", "No requirement"),
        State::WA => (false, "None", "No requirement"),
        State::WV => (false, "None", "No requirement"),
        State::WI => (true, "Wis. Stat. § 968.24", "Name only"),
        State::WY => (false, "None", "No requirement"),
        State::DC => (false, "None", "No requirement"),
    };

    StopAndIdentify {
        required,
        statute,
        id_requirement,
    }
}
