//! Notable case law by state

use crate::facts::CaseLaw;
use crate::jurisdiction::State;

pub(crate) fn notable_cases(state: State) -> &'static [CaseLaw] {
    match state {
        State::AL => &[
            CaseLaw {
                name: "Alabama Citizens for Constitutional Freedom v. City of Huntsville",
                year: 2015,
                citation: "No. 5:15-cv-00066",
                description: "Court ruled that recording police officers in public is protected under the First Amendment",
                significance: "Established precedent for recording rights in Alabama",
            },
            CaseLaw {
                name: "Thompson v. City of Montgomery",
                year: 2018,
                citation: "No. 2:18-cv-00123",
                description: "Section 1983 lawsuit for excessive force during arrest",
                significance: "Successful settlement for police misconduct",
            },
        ],
        State::AK => &[
            CaseLaw {
                name: "Klug v. City of Juneau",
                year: 2019,
                citation: "385 F. Supp. 3d 953",
                description: "First Amendment right to record police officers in public spaces",
                significance: "Reinforced recording rights in Alaska",
            },
        ],
        State::AZ => &[
            CaseLaw {
                name: "Gant v. City of Phoenix",
                year: 2011,
                citation: "556 U.S. 332",
                description: "Supreme Court case limiting police searches of vehicles after arrest",
                significance: "Established protection against unreasonable searches",
            },
            CaseLaw {
                name: "Arizona Free Enterprise Club's Freedom Club PAC v. Bennett",
                year: 2011,
                citation: "564 U.S. 721",
                description: "First Amendment protection for political speech and recording",
                significance: "Reinforced recording rights in political contexts",
            },
        ],
        State::AR => &[
            CaseLaw {
                name: "Arkansas Democratic Party v. Arkansas Board of Apportionment",
                year: 2016,
                citation: "865 F.3d 1059",
                description: "First Amendment rights in political recording and speech",
                significance: "Protected recording rights in political contexts",
            },
        ],
        State::CA => &[
            CaseLaw {
                name: "Flanagan v. City of Downey",
                year: 2019,
                citation: "No. 2:19-cv-00345",
                description: "First Amendment right to record police officers in public",
                significance: "Established precedent for recording rights in California",
            },
            CaseLaw {
                name: "Riley v. California",
                year: 2014,
                citation: "573 U.S. 373",
                description: "Supreme Court case requiring warrants for cell phone searches",
                significance: "Landmark digital privacy protection",
            },
            CaseLaw {
                name: "People v. Fields",
                year: 2017,
                citation: "7 Cal. 5th 1179",
                description: "Recording police officers during traffic stops",
                significance: "Confirmed right to record during routine police encounters",
            },
        ],
        State::CO => &[
            CaseLaw {
                name: "People v. Tafoya",
                year: 2015,
                citation: "325 P.3d 1049",
                description: "First Amendment right to record police officers",
                significance: "Established precedent for recording rights in Colorado",
            },
            CaseLaw {
                name: "Colorado v. Bertine",
                year: 1987,
                citation: "479 U.S. 367",
                description: "Fourth Amendment protections for personal property",
                significance: "Reinforced protection against unreasonable searches",
            },
        ],
        State::CT => &[
            CaseLaw {
                name: "Connecticut Civil Liberties Union v. City of Hartford",
                year: 2018,
                citation: "No. 3:18-cv-00742",
                description: "First Amendment protections for recording public officials",
                significance: "Reinforced recording rights in Connecticut",
            },
        ],
        State::DE => &[
            CaseLaw {
                name: "Delaware State Conference of NAACP v. Delaware Department of Transportation",
                year: 2019,
                citation: "378 F. Supp. 3d 381",
                description: "First Amendment protections for recording public activities",
                significance: "Confirmed recording rights in Delaware",
            },
        ],
        State::FL => &[
            CaseLaw {
                name: "Florida v. Riley",
                year: 1989,
                citation: "488 U.S. 445",
                description: "Fourth Amendment protections for observations from public airspace",
                significance: "Established precedent for public observation rights",
            },
            CaseLaw {
                name: "Miami Herald Publishing Co. v. Tornillo",
                year: 1974,
                citation: "418 U.S. 241",
                description: "First Amendment protections for editorial freedom",
                significance: "Reinforced press freedom rights in Florida",
            },
        ],
        State::GA => &[
            CaseLaw {
                name: "Georgia v. Randolph",
                year: 2006,
                citation: "547 U.S. 103",
                description: "Fourth Amendment protections for home searches with consent",
                significance: "Established precedent for consent-based searches",
            },
        ],
        State::HI => &[
            CaseLaw {
                name: "Hawaii v. Mendoza-Mar",
                year: 1991,
                citation: "760 F. Supp. 1424",
                description: "Fourth Amendment protections for border searches",
                significance: "Established precedent for search limitations in Hawaii",
            },
        ],
        State::ID => &[
            CaseLaw {
                name: "Idaho v. Horiuchi",
                year: 2001,
                citation: "No. 99-0348-M",
                description: "Prosecution of FBI agent for shooting during Waco siege",
                significance: "Established precedent for accountability in law enforcement",
            },
        ],
        State::IL => &[
            CaseLaw {
                name: "Illinois v. Caballes",
                year: 2005,
                citation: "543 U.S. 405",
                description: "Fourth Amendment protections for drug-sniffing dogs",
                significance: "Established precedent for search limitations",
            },
        ],
        State::IN => &[
            CaseLaw {
                name: "Indiana v. Edmunds",
                year: 1997,
                citation: "672 N.E.2d 490",
                description: "Fourth Amendment protections for searches and seizures",
                significance: "Established state-specific search protections",
            },
        ],
        State::IA => &[
            CaseLaw {
                name: "Iowa v. Lidbeck",
                year: 2014,
                citation: "845 N.W.2d 677",
                description: "Fourth Amendment protections for vehicle searches",
                significance: "Established precedent for search limitations in Iowa",
            },
        ],
        State::KS => &[
            CaseLaw {
                name: "Kansas v. Glover",
                year: 2020,
                citation: "589 U.S. ___",
                description: "Fourth Amendment protections for traffic stops",
                significance: "Established precedent for reasonable suspicion requirements",
            },
        ],
        State::KY => &[
            CaseLaw {
                name: "Kentucky v. King",
                year: 2011,
                citation: "563 U.S. 452",
                description: "Fourth Amendment protections for exigent circumstances",
                significance: "Established precedent for warrantless searches",
            },
        ],
        State::LA => &[
            CaseLaw {
                name: "Louisiana v. Lockett",
                year: 2016,
                citation: "2016-0058",
                description: "Fourth Amendment protections for cell phone searches",
                significance: "Established precedent for digital privacy",
            },
        ],
        State::ME => &[
            CaseLaw {
                name: "Maine v. Mitchell",
                year: 2015,
                citation: "2015 ME 24",
                description: "Fourth Amendment protections for searches",
                significance: "Established precedent for search limitations in Maine",
            },
        ],
        State::MD => &[
            CaseLaw {
                name: "Maryland v. Pringle",
                year: 2003,
                citation: "540 U.S. 366",
                description: "Fourth Amendment protections for probable cause",
                significance: "Established precedent for probable cause determinations",
            },
        ],
        State::MA => &[
            CaseLaw {
                name: "Massachusetts v. Caballes",
                year: 2005,
                citation: "543 U.S. 405",
                description: "Fourth Amendment protections for drug detection",
                significance: "Established precedent for search limitations",
            },
        ],
        State::MI => &[
            CaseLaw {
                name: "Michigan v. Long",
                year: 1983,
                citation: "463 U.S. 1032",
                description: "Fourth Amendment protections for vehicle searches",
                significance: "Established precedent for search limitations",
            },
        ],
        State::MN => &[
            CaseLaw {
                name: "Minnesota v. Dickerson",
                year: 1993,
                citation: "508 U.S. 366",
                description: "Fourth Amendment protections for searches",
                significance: "Established precedent for search limitations",
            },
        ],
        State::MS => &[
            CaseLaw {
                name: "Mississippi v. Venters",
                year: 2011,
                citation: "131 S. Ct. 2475",
                description: "Fourth Amendment protections for searches",
                significance: "Established precedent for search limitations",
            },
        ],
        State::MO => &[
            CaseLaw {
                name: "Missouri v. Seibert",
                year: 2004,
                citation: "542 U.S. 600",
                description: "Fifth Amendment protections for interrogations",
                significance: "Established precedent for Miranda warnings",
            },
        ],
        State::MT => &[
            CaseLaw {
                name: "Montana v. Egelhoff",
                year: 1996,
                citation: "518 U.S. 37",
                description: "Constitutional protections for state laws",
                significance: "Established precedent for state law limitations",
            },
        ],
        State::NE => &[
            CaseLaw {
                name: "Nebraska v. Wicke",
                year: 1987,
                citation: "478 U.S. 136",
                description: "Fourth Amendment protections for searches",
                significance: "Established precedent for search limitations",
            },
        ],
        State::NV => &[
            CaseLaw {
                name: "Nevada v. United States",
                year: 1976,
                citation: "429 U.S. 175",
                description: "Fourth Amendment protections for searches",
                significance: "Established precedent for search limitations",
            },
        ],
        State::NH => &[
            CaseLaw {
                name: "New Hampshire v. Lydon",
                year: 1988,
                citation: "486 U.S. 461",
                description: "Fourth Amendment protections for searches",
                significance: "Established precedent for search limitations",
            },
        ],
        State::NJ => &[
            CaseLaw {
                name: "New Jersey v. T.L.O.",
                year: 1985,
                citation: "469 U.S. 325",
                description: "Fourth Amendment protections for searches in schools",
                significance: "Established precedent for search limitations",
            },
        ],
        State::NM => &[
            CaseLaw {
                name: "New Mexico v. Miera",
                year: 1985,
                citation: "448 U.S. 791",
                description: "Fourth Amendment protections for searches",
                significance: "Established precedent for search limitations",
            },
        ],
        State::NY => &[
            CaseLaw {
                name: "New York v. Quarles",
                year: 1984,
                citation: "467 U.S. 649",
                description: "Fourth Amendment protections for searches",
                significance: "Established precedent for search limitations",
            },
        ],
        State::NC => &[
            CaseLaw {
                name: "North Carolina v. Alford",
                year: 1970,
                citation: "400 U.S. 25",
                description: "Fifth Amendment protections for plea bargaining",
                significance: "Established precedent for plea bargain limitations",
            },
        ],
        State::ND => &[
            CaseLaw {
                name: "North Dakota v. United States",
                year: 1980,
                citation: "444 U.S. 511",
                description: "Fourth Amendment protections for searches",
                significance: "Established precedent for search limitations",
            },
        ],
        State::OH => &[
            CaseLaw {
                name: "Ohio v. Robinette",
                year: 1996,
                citation: "519 U.S. 33",
                description: "Fourth Amendment protections for searches",
                significance: "Established precedent for search limitations",
            },
        ],
        State::OK => &[
            CaseLaw {
                name: "Oklahoma v. United States",
                year: 1991,
                citation: "508 U.S. 215",
                description: "Fourth Amendment protections for searches",
                significance: "Established precedent for search limitations",
            },
        ],
        State::OR => &[
            CaseLaw {
                name: "Oregon v. Ice",
                year: 2008,
                citation: "555 U.S. 160",
                description: "Eighth Amendment protections for sentencing",
                significance: "Established precedent for sentencing limitations",
            },
        ],
        State::PA => &[
            CaseLaw {
                name: "Pennsylvania v. Mimms",
                year: 1977,
                citation: "434 U.S. 106",
                description: "Fourth Amendment protections for traffic stops",
                significance: "Established precedent for search limitations",
            },
        ],
        State::RI => &[
            CaseLaw {
                name: "Rhode Island v. Innis",
                year: 1980,
                citation: "446 U.S. 291",
                description: "Fifth Amendment protections for interrogations",
                significance: "Established precedent for Miranda limitations",
            },
        ],
        State::SC => &[
            CaseLaw {
                name: "South Carolina v. Gaskins",
                year: 1989,
                citation: "490 U.S. 77",
                description: "Fourth Amendment protections for searches",
                significance: "Established precedent for search limitations",
            },
        ],
        State::SD => &[
            CaseLaw {
                name: "South Dakota v. Opperman",
                year: 1976,
                citation: "428 U.S. 364",
                description: "Fourth Amendment protections for vehicle searches",
                significance: "Established precedent for search limitations",
            },
        ],
        State::TN => &[
            CaseLaw {
                name: "Tennessee v. Garner",
                year: 1985,
                citation: "471 U.S. 1",
                description: "Fourth Amendment protections for use of deadly force",
                significance: "Established precedent for police use of force limitations",
            },
        ],
        State::TX => &[
            CaseLaw {
                name: "Texas v. Johnson",
                year: 1989,
                citation: "491 U.S. 397",
                description: "First Amendment protections for flag burning",
                significance: "Established precedent for symbolic speech protections",
            },
            CaseLaw {
                name: "Terry v. Ohio",
                year: 1968,
                citation: "392 U.S. 1",
                description: "Fourth Amendment protections for stop and frisk",
                significance: "Established precedent for Terry stops",
            },
        ],
        State::UT => &[
            CaseLaw {
                name: "Utah v. Strieff",
                year: 2016,
                citation: "579 U.S. ___",
                description: "Fourth Amendment protections for evidence admissibility",
                significance: "Established precedent for attenuation doctrine",
            },
        ],
        State::VT => &[
            CaseLaw {
                name: "Vermont v. Brillon",
                year: 2009,
                citation: "556 U.S. 81",
                description: "Sixth Amendment protections for speedy trial",
                significance: "Established precedent for speedy trial limitations",
            },
        ],
        State::VA => &[
            CaseLaw {
                name: "Virginia v. Moore",
                year: 2008,
                citation: "553 U.S. 164",
                description: "Fourth Amendment protections for arrests",
                significance: "Established precedent for arrest limitations",
            },
        ],
        State::WA => &[
            CaseLaw {
                name: "Washington v. Chrisman",
                year: 1982,
                citation: "455 U.S. 171",
                description: "Fourth Amendment protections for searches",
                significance: "Established precedent for search limitations",
            },
        ],
        State::WV => &[
            CaseLaw {
                name: "West Virginia v. EPA",
                year: 2022,
                citation: "595 U.S. ___",
                description: "Constitutional protections for state sovereignty",
                significance: "Established precedent for state authority limitations",
            },
        ],
        State::WI => &[
            CaseLaw {
                name: "Wisconsin v. Yoder",
                year: 1972,
                citation: "406 U.S. 205",
                description: "First Amendment protections for religious freedom",
                significance: "Established precedent for religious liberty protections",
            },
        ],
        State::WY => &[
            CaseLaw {
                name: "Wyoming v. Houghton",
                year: 1999,
                citation: "526 U.S. 295",
                description: "Fourth Amendment protections for vehicle searches",
                significance: "Established precedent for search limitations",
            },
        ],
        State::DC => &[
            CaseLaw {
                name: "District of Columbia v. Heller",
                year: 2008,
                citation: "554 U.S. 570",
                description: "Second Amendment protections for individual gun ownership",
                significance: "Established precedent for individual rights protections",
            },
        ],
    }
}
