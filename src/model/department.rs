use eyre::{Error, bail};
use std::fmt;
use std::str::FromStr;

/// Subject exams every applicant sits.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Subject {
    Physics,
    Chemistry,
    Mathematics,
    ComputerScience,
}

/// Which score a department ranks its candidates on, before the admission
/// exam score is taken into account.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RankingRule {
    Subject(Subject),
    Average(Subject, Subject),
}

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub enum Department {
    Biotech,
    Chemistry,
    Engineering,
    Mathematics,
    Physics,
}

impl Department {
    /// All departments, in the order rounds process them.
    pub const ALL: [Department; 5] = [
        Department::Biotech,
        Department::Chemistry,
        Department::Engineering,
        Department::Mathematics,
        Department::Physics,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Department::Biotech => "Biotech",
            Department::Chemistry => "Chemistry",
            Department::Engineering => "Engineering",
            Department::Mathematics => "Mathematics",
            Department::Physics => "Physics",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn ranking_rule(self) -> RankingRule {
        match self {
            Department::Biotech => RankingRule::Average(Subject::Chemistry, Subject::Physics),
            Department::Chemistry => RankingRule::Subject(Subject::Chemistry),
            Department::Engineering => {
                RankingRule::Average(Subject::ComputerScience, Subject::Mathematics)
            }
            Department::Mathematics => RankingRule::Subject(Subject::Mathematics),
            Department::Physics => RankingRule::Average(Subject::Physics, Subject::Mathematics),
        }
    }

    pub fn is_composite(self) -> bool {
        matches!(self.ranking_rule(), RankingRule::Average(..))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Department {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Department::ALL.iter().find(|d| d.name() == s) {
            Some(&d) => Ok(d),
            None => bail!("unknown department {s:?}"),
        }
    }
}
