//! Public records statutes and response timeframes

use crate::facts::{PublicRecordsLaw, TimeframeClass};
use crate::jurisdiction::State;

pub(crate) fn public_records_law(state: State) -> PublicRecordsLaw {
    use TimeframeClass::{Business, Calendar, Reasonable};

    let (statute, response_timeframe, timeframe_class) = match state {
        State::AL => ("Ala. Code § 36-12-40", "7-10 business days", Business),
        State::AK => ("Alaska Stat. § 40.25.110", "10 business days", Business),
        State::AZ => ("A.R.S. § 39-121", "Reasonable time", Reasonable),
        State::AR => ("Ark. Code Ann. § 25-19-105", "3 business days", Business),
        State::CA => ("Cal. Gov. Code § 6253", "10 calendar days", Calendar),
        State::CO => ("C.R.S. § 24-72-203", "3 business days", Business),
        State::CT => ("Conn. Gen. Stat. § 1-210", "4 business days", Business),
        State::DE => ("29 Del. C. § 10003", "15 business days", Business),
        State::FL => ("Fla. Stat. § 119.07", "Reasonable time", Reasonable),
        State::GA => ("O.C.G.A. § 50-18-71", "3 business days", Business),
        State::HI => ("Haw. Rev. Stat. § 92F-11", "10 business days", Business),
        State::ID => ("Idaho Code § 74-102", "3 business days", Business),
        State::IL => ("5 ILCS 140/3", "5 business days", Business),
        State::IN => ("Ind. Code § 5-14-3-9", "7 calendar days", Calendar),
        State::IA => ("Iowa Code § 22.8", "Reasonable time", Reasonable),
        State::KS => ("K.S.A. § 45-218", "3 business days", Business),
        State::KY => ("KRS § 61.872", "5 business days", Business),
        State::LA => ("La. R.S. 44:32", "3 business days", Business),
        State::ME => ("1 M.R.S. § 408-A", "5 business days", Business),
        State::MD => ("Md. Code, Gen. Prov. § 4-203", "30 calendar days", Calendar),
        State::MA => ("M.G.L. c. 66, § 10", "10 business days", Business),
        State::MI => ("MCL § 15.233", "5 business days", Business),
        State::MN => ("Minn. Stat. § 13.03", "Reasonable time", Reasonable),
        State::MS => ("Miss. Code Ann. § 25-61-5", "7 business days", Business),
        State::MO => ("Mo. Rev. Stat. § 610.023", "3 business days", Business),
        State::MT => ("Mont. Code Ann. § 2-6-102", "Reasonable time", Reasonable),
        State::NE => ("Neb. Rev. Stat. § 84-712", "4 business days", Business),
        State::NV => ("Nev. Rev. Stat. § 239.0107", "5 business days", Business),
        State::NH => ("N.H. Rev. Stat. Ann. § 91-A:4", "5 business days", Business),
        State::NJ => ("N.J.S.A. 47:1A-5", "7 business days", Business),
        State::NM => ("NMSA § 14-2-8", "3 business days", Business),
        State::NY => ("N.Y. Pub. Off. Law § 89", "5 business days", Business),
        State::NC => ("N.C.G.S. § 132-6", "Reasonable time", Reasonable),
        State::ND => ("N.D.C.C. § 44-04-18", "Reasonable time", Reasonable),
        State::OH => ("Ohio Rev. Code § 149.43", "Reasonable time", Reasonable),
        State::OK => ("51 Okla. Stat. § 24A.5", "Reasonable time", Reasonable),
        State::OR => ("ORS § 192.329", "Reasonable time", Reasonable),
        State::PA => ("65 P.S. § 67.901", "5 business days", Business),
        State::RI => ("R.I. Gen. Laws § 38-2-3", "10 business days", Business),
        State::SC => ("S.C. Code Ann. § 30-4-30", "10 business days", Business),
        State::SD => ("SDCL § 1-27-1", "Reasonable time", Reasonable),
        State::TN => ("Tenn. Code Ann. § 10-7-503", "7 business days", Business),
        State::TX => ("Tex. Gov't Code § 552.221", "10 business days", Business),
        State::UT => ("Utah Code § 63G-2-204", "10 business days", Business),
        State::VT => ("1 V.S.A. § 318", "3 business days", Business),
        State::VA => ("Va. Code Ann. § 2.2-3704", "5 business days", Business),
        State::WA => ("RCW § 42.56.520", "5 business days", Business),
        State::WV => ("W. Va. Code § 29B-1-3", "5 business days", Business),
        State::WI => ("Wis. Stat. § 19.35", "Reasonable time", Reasonable),
        State::WY => ("Wyo. Stat. § 16-4-203", "Reasonable time", Reasonable),
        State::DC => ("D.C. Code § 2-532", "15 business days", Business),
    };

    PublicRecordsLaw {
        statute,
        response_timeframe,
        timeframe_class,
    }
}
