//! Campuses, program branches and the alias vocabulary used to detect them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three campuses. Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Campus {
    Pilani,
    Goa,
    Hyderabad,
}

impl Campus {
    pub const ALL: [Campus; 3] = [Campus::Pilani, Campus::Goa, Campus::Hyderabad];

    pub fn key(&self) -> &'static str {
        match self {
            Campus::Pilani => "pilani",
            Campus::Goa => "goa",
            Campus::Hyderabad => "hyderabad",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Campus::Pilani => "Pilani",
            Campus::Goa => "Goa",
            Campus::Hyderabad => "Hyderabad",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Campus::Pilani => "🏛️ **PILANI CAMPUS**",
            Campus::Goa => "🏖️ **GOA CAMPUS**",
            Campus::Hyderabad => "🏙️ **HYDERABAD CAMPUS**",
        }
    }

    pub fn flavor(&self) -> &'static str {
        match self {
            Campus::Pilani => "OG campus vibes",
            Campus::Goa => "Beach life + studies",
            Campus::Hyderabad => "Tech city energy",
        }
    }

    /// Lower-case detection aliases.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Campus::Pilani => &["pilani", "pilani campus", "bits pilani"],
            Campus::Goa => &["goa", "goa campus", "bits goa", "k k birla goa", "kk birla goa"],
            Campus::Hyderabad => &[
                "hyderabad",
                "hyd",
                "hyderabad campus",
                "bits hyderabad",
                "bits hyd",
            ],
        }
    }
}

impl fmt::Display for Campus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Program family a branch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramType {
    Engineering,
    Msc,
    Pharmacy,
}

impl ProgramType {
    pub const ALL: [ProgramType; 3] = [ProgramType::Engineering, ProgramType::Msc, ProgramType::Pharmacy];

    pub fn heading(&self) -> &'static str {
        match self {
            ProgramType::Engineering => "**Engineering:**",
            ProgramType::Msc => "**M.Sc Programs:**",
            ProgramType::Pharmacy => "**Pharmacy:**",
        }
    }
}

/// A program of study. Declaration order doubles as the deterministic
/// tie-break order for alias resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Cse,
    Ece,
    Eee,
    Mechanical,
    Chemical,
    Civil,
    Manufacturing,
    Mnc,
    Instrumentation,
    Pharmacy,
    Biology,
    Chemistry,
    Economics,
    Physics,
    MscMathematics,
}

impl Branch {
    pub const ALL: [Branch; 15] = [
        Branch::Cse,
        Branch::Ece,
        Branch::Eee,
        Branch::Mechanical,
        Branch::Chemical,
        Branch::Civil,
        Branch::Manufacturing,
        Branch::Mnc,
        Branch::Instrumentation,
        Branch::Pharmacy,
        Branch::Biology,
        Branch::Chemistry,
        Branch::Economics,
        Branch::Physics,
        Branch::MscMathematics,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Branch::Cse => "cse",
            Branch::Ece => "ece",
            Branch::Eee => "eee",
            Branch::Mechanical => "mechanical",
            Branch::Chemical => "chemical",
            Branch::Civil => "civil",
            Branch::Manufacturing => "manufacturing",
            Branch::Mnc => "mnc",
            Branch::Instrumentation => "instrumentation",
            Branch::Pharmacy => "pharmacy",
            Branch::Biology => "biology",
            Branch::Chemistry => "chemistry",
            Branch::Economics => "economics",
            Branch::Physics => "physics",
            Branch::MscMathematics => "msc_mathematics",
        }
    }

    /// Short upper-case label used in tables.
    pub fn label(&self) -> &'static str {
        match self {
            Branch::Cse => "CSE",
            Branch::Ece => "ECE",
            Branch::Eee => "EEE",
            Branch::Mechanical => "MECHANICAL",
            Branch::Chemical => "CHEMICAL",
            Branch::Civil => "CIVIL",
            Branch::Manufacturing => "MANUFACTURING",
            Branch::Mnc => "MATH & COMPUTING",
            Branch::Instrumentation => "INSTRUMENTATION",
            Branch::Pharmacy => "B.PHARM",
            Branch::Biology => "MSC BIOLOGY",
            Branch::Chemistry => "MSC CHEMISTRY",
            Branch::Economics => "MSC ECONOMICS",
            Branch::Physics => "MSC PHYSICS",
            Branch::MscMathematics => "MSC MATHEMATICS",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Branch::Cse => "Computer Science",
            Branch::Ece => "Electronics and Communication",
            Branch::Eee => "Electrical and Electronics",
            Branch::Mechanical => "Mechanical Engineering",
            Branch::Chemical => "Chemical Engineering",
            Branch::Civil => "Civil Engineering",
            Branch::Manufacturing => "Manufacturing Engineering",
            Branch::Mnc => "Mathematics and Computing",
            Branch::Instrumentation => "Electronics and Instrumentation",
            Branch::Pharmacy => "Pharmacy",
            Branch::Biology => "M.Sc. Biological Sciences",
            Branch::Chemistry => "M.Sc. Chemistry",
            Branch::Economics => "M.Sc. Economics",
            Branch::Physics => "M.Sc. Physics",
            Branch::MscMathematics => "M.Sc. Mathematics",
        }
    }

    pub fn program_type(&self) -> ProgramType {
        match self {
            Branch::Pharmacy => ProgramType::Pharmacy,
            Branch::Biology
            | Branch::Chemistry
            | Branch::Economics
            | Branch::Physics
            | Branch::MscMathematics => ProgramType::Msc,
            _ => ProgramType::Engineering,
        }
    }

    /// Lower-case detection aliases. Aliases are not unique as raw substrings
    /// across branches; resolution is the extractor's job.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Branch::Cse => &["computer science", "cse", "cs", "computer"],
            Branch::Ece => &["electronics and communication", "ece", "electronics", "communication"],
            Branch::Eee => &["electrical and electronics", "eee", "electrical"],
            Branch::Mechanical => &["mechanical engineering", "mechanical", "mech"],
            Branch::Chemical => &["chemical engineering", "chemical", "chem"],
            Branch::Civil => &["civil engineering", "civil"],
            Branch::Manufacturing => &["manufacturing engineering", "manufacturing", "manuf"],
            Branch::Mnc => &["mathematics and computing", "math and computing", "mnc", "mathematics", "maths", "math"],
            Branch::Instrumentation => &["electronics and instrumentation", "instrumentation", "instru", "eni"],
            Branch::Pharmacy => &["pharmacy", "b.pharm", "bpharm", "pharm"],
            Branch::Biology => &["biological sciences", "msc biology", "msc bio", "biology", "biological", "bio"],
            Branch::Chemistry => &["msc chemistry", "chemistry msc", "chemistry"],
            Branch::Economics => &["msc economics", "economics msc", "economics", "econ", "eco"],
            Branch::Physics => &["msc physics", "physics msc", "physics", "phy"],
            Branch::MscMathematics => &["msc mathematics", "mathematics msc", "msc maths", "msc math"],
        }
    }

    /// Branch a bare subject word means once an M.Sc. marker is present.
    pub fn msc_subject(word: &str) -> Option<Branch> {
        match word {
            "economics" | "eco" | "econ" => Some(Branch::Economics),
            "physics" | "phy" => Some(Branch::Physics),
            "chemistry" | "chem" => Some(Branch::Chemistry),
            "biology" | "bio" | "biological" => Some(Branch::Biology),
            "mathematics" | "maths" | "math" => Some(Branch::MscMathematics),
            _ => None,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
