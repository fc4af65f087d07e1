use crate::facts::{CannabisLaw, CannabisStatus};
use crate::jurisdiction::State;

pub(crate) fn cannabis_law(state: State) -> CannabisLaw {
    use CannabisStatus::{CbdOnly, Illegal, MedicalOnly, Recreational};

    let (status, possession_limit, enacted_year) = match state {
        State::AL => (MedicalOnly, "Medical card required", "2021"),
        State::AK => (Recreational, "1 oz", "2014"),
        State::AZ => (Recreational, "1 oz", "2020"),
        State::AR => (MedicalOnly, "Medical card required", "2016"),
        State::CA => (Recreational, "1 oz", "2016"),
        State::CO => (Recreational, "1 oz", "2012"),
        State::CT => (Recreational, "1.5 oz", "2021"),
        State::DE => (Recreational, "1 oz", "2023"),
        State::FL => (MedicalOnly, "Medical card required", "2016"),
        State::GA => (CbdOnly, "Low-THC oil only", "2015"),
        State::HI => (MedicalOnly, "Medical card required", "2000"),
        State::ID => (Illegal, "Prohibited", "N/A"),
        State::IL => (Recreational, "1 oz", "2019"),
        State::IN => (Illegal, "Prohibited", "N/A"),
        State::IA => (CbdOnly, "Low-THC only", "2014"),
        State::KS => (Illegal, "Prohibited", "N/A"),
        State::KY => (MedicalOnly, "Medical card required", "2023"),
        State::LA => (MedicalOnly, "Medical card required", "2015"),
        State::ME => (Recreational, "2.5 oz", "2016"),
        State::MD => (Recreational, "1.5 oz", "2023"),
        State::MA => (Recreational, "1 oz", "2016"),
        State::MI => (Recreational, "2.5 oz", "2018"),
        State::MN => (Recreational, "2 oz", "2023"),
        State::MS => (MedicalOnly, "Medical card required", "2022"),
        State::MO => (Recreational, "3 oz", "2022"),
        State::MT => (Recreational, "1 oz", "2020"),
        State::NE => (Illegal, "Decriminalized small amounts", "N/A"),
        State::NV => (Recreational, "1 oz", "2016"),
        State::NH => (MedicalOnly, "Medical card required", "2013"),
        State::NJ => (Recreational, "1 oz", "2020"),
        State::NM => (Recreational, "2 oz", "2021"),
        State::NY => (Recreational, "3 oz", "2021"),
        State::NC => (Illegal, "Decriminalized small amounts", "N/A"),
        State::ND => (MedicalOnly, "Medical card required", "2016"),
        State::OH => (Recreational, "2.5 oz", "2023"),
        State::OK => (MedicalOnly, "Medical card required", "2018"),
        State::OR => (Recreational, "1 oz", "2014"),
        State::PA => (MedicalOnly, "Medical card required", "2016"),
        State::RI => (Recreational, "1 oz", "2022"),
        State::SC => (Illegal, "Prohibited", "N/A"),
        State::SD => (MedicalOnly, "Medical card required", "2020"),
        State::TN => (Illegal, "Prohibited", "N/A"),
        State::TX => (CbdOnly, "Low-THC only", "2015"),
        State::UT => (MedicalOnly, "Medical card required", "2018"),
        State::VT => (Recreational, "1 oz", "2018"),
        State::VA => (Recreational, "1 oz", "2021"),
        State::WA => (Recreational, "1 oz", "2012"),
        State::WV => (MedicalOnly, "Medical card required", "2017"),
        State::WI => (Illegal, "Prohibited", "N/A"),
        State::WY => (Illegal, "Prohibited", "N/A"),
        State::DC => (Recreational, "2 oz", "2014"),
    };

    CannabisLaw {
        status,
        possession_limit,
        enacted_year,
        penalties: penalties(state),
        medical_info: medical_info(state),
    }
}

fn penalties(state: State) -> &'static str {
    match state {
        State::AL => "Possession without card: Misdemeanor, up to 1 year in jail and $6,000 fine",
        State::AK => "Recreational possession legal with limits. Exceeding limits: Misdemeanor with fines up to $100-$500",
        State::AZ => "Recreational possession legal with limits. Exceeding limits: Misdemeanor with fines up to $250-$2,500",
        State::AR => "Possession without card: Misdemeanor, up to 1 year in jail and $2,500 fine",
        State::CA => "Recreational possession legal with limits. Exceeding limits: Misdemeanor with fines up to $500-$1,000",
        State::CO => "Recreational possession legal with limits. Exceeding limits: Misdemeanor with fines up to $100-$500",
        State::CT => "Possession without card: Misdemeanor, up to 6 months in jail and $1,000 fine",
        State::DE => "Recreational possession legal with limits. Exceeding limits: Misdemeanor with fines up to $100-$500",
        State::FL => "Possession without card: Misdemeanor, up to 1 year in jail and $1,000 fine",
        State::GA => "Possession: Misdemeanor, up to 1 year in jail and $1,000 fine for small amounts",
        State::HI => "Recreational possession legal with limits. Exceeding limits: Misdemeanor with fines up to $100-$1,000",
        State::ID => "Possession: Misdemeanor for small amounts, felony for larger quantities",
        State::IL => "Recreational possession legal with limits. Exceeding limits: Misdemeanor with fines up to $200-$750",
        State::IN => "Possession: Level 6 felony for small amounts, Level 5 felony for larger quantities",
        State::IA => "Possession under 5 grams: Simple misdemeanor with fine up to $1,000",
        State::KS => "Possession: Class A misdemeanor for small amounts, felony for larger quantities",
        State::KY => "Possession without card: Misdemeanor, up to 45 days in jail and $250-$500 fine",
        State::LA => "Possession without card: Misdemeanor, up to 6 months in jail and $500 fine",
        State::ME => "Recreational possession legal with limits. Exceeding limits: Misdemeanor with fines up to $200-$1,000",
        State::MD => "Recreational possession legal with limits. Exceeding limits: Misdemeanor with fines up to $100-$1,000",
        State::MA => "Recreational possession legal with limits. Exceeding limits: Civil penalty up to $100, criminal if significantly exceeding",
        State::MI => "Recreational possession legal with limits. Exceeding limits: Civil infraction up to $1,000, criminal for larger amounts",
        State::MN => "Recreational possession legal with limits. Exceeding limits: Misdemeanor with fines up to $200-$1,000",
        State::MS => "Possession: Misdemeanor for small amounts, felony for larger quantities",
        State::MO => "Recreational possession legal with limits. Exceeding limits: Misdemeanor with fines up to $100-$1,000",
        State::MT => "Recreational possession legal with limits. Exceeding limits: Misdemeanor with fines up to $50-$500",
        State::NE => "Possession under 1 oz: Civil penalty up to $300",
        State::NV => "Recreational possession legal with limits. Exceeding limits: Gross misdemeanor with fines up to $600-$1,000",
        State::NH => "Possession without card: Misdemeanor, up to 1 year in jail and $2,000 fine",
        State::NJ => "Recreational possession legal with limits. Exceeding limits: Disorderly persons offense with fines up to $1,000",
        State::NM => "Recreational possession legal with limits. Exceeding limits: Misdemeanor with fines up to $25-$100",
        State::NY => "Recreational possession legal with limits. Exceeding limits: Violation with fines up to $100-$200",
        State::NC => "Possession: Class 1 misdemeanor for small amounts, felony for larger quantities",
        State::ND => "Possession without card: Misdemeanor, up to 30 days in jail and $1,000 fine",
        State::OH => "Recreational possession legal with limits. Exceeding limits: Misdemeanor with fines up to $150-$250",
        State::OK => "Possession without card: Misdemeanor, up to 1 year in jail and $1,000 fine",
        State::OR => "Recreational possession legal with limits. Exceeding limits: Violation with fines up to $100-$1,000",
        State::PA => "Possession without card: Misdemeanor, up to 30 days in jail and $500 fine",
        State::RI => "Recreational possession legal with limits. Exceeding limits: Civil violation with fines up to $150-$500",
        State::SC => "Possession: Misdemeanor for small amounts, felony for larger quantities",
        State::SD => "Possession without card: Misdemeanor, up to 1 year in jail and $2,000 fine",
        State::TN => "Possession: Misdemeanor for small amounts, felony for larger quantities",
        State::TX => "Possession: State jail felony for small amounts, felony for larger quantities",
        State::UT => "Possession without card: Class B misdemeanor, up to 6 months in jail and $1,000 fine",
        State::VT => "Recreational possession legal with limits. Exceeding limits: Civil penalty up to $500-$1,000",
        State::VA => "Possession without card: Class 1 misdemeanor, up to 1 year in jail and $2,500 fine",
        State::WA => "Recreational possession legal with limits. Exceeding limits: Civil penalty up to $25-$500",
        State::WV => "Possession without card: Misdemeanor, up to 6 months in jail and $1,000 fine",
        State::WI => "Possession: Class A misdemeanor for small amounts, felony for larger quantities",
        State::WY => "Possession: Misdemeanor for small amounts, felony for larger quantities",
        State::DC => "Recreational possession legal with limits. Exceeding limits: Civil fine up to $25-$500",
    }
}

/// How to apply for a medical card, where the state runs a program
fn medical_info(state: State) -> Option<&'static str> {
    match state {
        State::AL => Some("Apply through Alabama Department of Public Health. Must have qualifying condition like chronic pain, epilepsy, or PTSD."),
        State::AR => Some("Apply through Arkansas Department of Health. Qualifying conditions include cancer, glaucoma, HIV/AIDS, and chronic pain."),
        State::CT => Some("Apply through Connecticut Department of Consumer Protection. Qualifying conditions include cancer, glaucoma, HIV/AIDS, and chronic pain."),
        State::FL => Some("Apply through Florida Department of Health. Qualifying conditions include cancer, epilepsy, glaucoma, HIV/AIDS, and PTSD."),
        State::KY => Some("Apply through Kentucky Department of Public Health. Qualifying conditions include cancer, epilepsy, glaucoma, HIV/AIDS, and PTSD."),
        State::LA => Some("Apply through Louisiana Department of Health. Qualifying conditions include cancer, glaucoma, HIV/AIDS, and PTSD."),
        State::NH => Some("Apply through New Hampshire Department of Health and Human Services. Qualifying conditions include cancer, glaucoma, HIV/AIDS, and chronic pain."),
        State::ND => Some("Apply through North Dakota Department of Health. Qualifying conditions include cancer, glaucoma, HIV/AIDS, and chronic pain."),
        State::OK => Some("Apply through Oklahoma State Department of Health. Qualifying conditions include cancer, glaucoma, HIV/AIDS, and PTSD."),
        State::PA => Some("Apply through Pennsylvania Department of Health. Qualifying conditions include cancer, glaucoma, HIV/AIDS, and PTSD."),
        State::SD => Some("Apply through South Dakota Department of Health. Qualifying conditions include cancer, glaucoma, HIV/AIDS, and PTSD."),
        State::UT => Some("Apply through Utah Department of Health. Qualifying conditions include cancer, glaucoma, HIV/AIDS, and PTSD."),
        State::VA => Some("Apply through Virginia Department of Health. Qualifying conditions include cancer, glaucoma, HIV/AIDS, and PTSD."),
        State::WV => Some("Apply through West Virginia Department of Health and Human Resources. Qualifying conditions include cancer, glaucoma, HIV/AIDS, and PTSD."),
        _ => None,
    }
}
