use super::{Department, RankingRule, Subject};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct ApplicantId(pub usize);

/// Raw subject exam results.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Scores {
    pub physics: f64,
    pub chemistry: f64,
    pub mathematics: f64,
    pub computer_science: f64,
}

impl Scores {
    pub fn get(&self, subject: Subject) -> f64 {
        match subject {
            Subject::Physics => self.physics,
            Subject::Chemistry => self.chemistry,
            Subject::Mathematics => self.mathematics,
            Subject::ComputerScience => self.computer_science,
        }
    }

    /// Score obtained by applying a ranking rule to the raw results.
    pub fn apply(&self, rule: RankingRule) -> f64 {
        match rule {
            RankingRule::Subject(s) => self.get(s),
            RankingRule::Average(a, b) => (self.get(a) + self.get(b)) / 2.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Applicant {
    pub id: ApplicantId,
    pub first_name: String,
    pub last_name: String,
    pub scores: Scores,
    pub admission_exam: f64,
    pub preferences: Vec<Department>,
    composites: BTreeMap<Department, f64>,
}

impl Applicant {
    pub fn new(
        id: ApplicantId,
        first_name: String,
        last_name: String,
        scores: Scores,
        admission_exam: f64,
        preferences: Vec<Department>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            scores,
            admission_exam,
            preferences,
            composites: BTreeMap::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Key used to break ties between equal effective scores.
    pub fn sort_name(&self) -> String {
        format!("{}{}", self.first_name, self.last_name)
    }

    pub fn set_composite(&mut self, department: Department, score: f64) {
        self.composites.insert(department, score);
    }

    pub fn composite(&self, department: Department) -> Option<f64> {
        self.composites.get(&department).copied()
    }

    /// Score for the department's own ranking rule, without the admission exam.
    ///
    /// Composite departments read the score attached by
    /// `scores::derive_composites`, which `Admissions::new` runs for everyone.
    pub fn department_score(&self, department: Department) -> f64 {
        match department.ranking_rule() {
            RankingRule::Subject(subject) => self.scores.get(subject),
            RankingRule::Average(..) => self
                .composite(department)
                .expect("composite scores are derived before ranking"),
        }
    }

    /// The greater of the department score and the admission exam score.
    pub fn effective_score(&self, department: Department) -> f64 {
        self.department_score(department).max(self.admission_exam)
    }

    pub fn preference_at(&self, rank: usize) -> Option<Department> {
        self.preferences.get(rank).copied()
    }
}

impl fmt::Display for Applicant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
pub(crate) fn applicant(
    id: usize,
    name: &str,
    scores: [f64; 4],
    admission_exam: f64,
    preferences: &[Department],
) -> Applicant {
    let (first, last) = name.split_once(' ').unwrap_or((name, ""));
    Applicant::new(
        ApplicantId(id),
        first.to_owned(),
        last.to_owned(),
        Scores {
            physics: scores[0],
            chemistry: scores[1],
            mathematics: scores[2],
            computer_science: scores[3],
        },
        admission_exam,
        preferences.to_vec(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores;

    #[test]
    fn effective_score_takes_the_greater() {
        let mut a = applicant(0, "Ada Lovelace", [60.0, 70.0, 90.0, 80.0], 75.0, &[]);
        scores::derive_composites(&mut a);
        assert_eq!(a.effective_score(Department::Mathematics), 90.0);
        assert_eq!(a.effective_score(Department::Chemistry), 75.0);
        assert_eq!(a.effective_score(Department::Engineering), 85.0);
    }

    #[test]
    fn composite_score_is_the_attached_one() {
        let mut a = applicant(0, "Ada Lovelace", [60.0, 70.0, 90.0, 80.0], 0.0, &[]);
        a.set_composite(Department::Physics, 10.0);
        assert_eq!(a.department_score(Department::Physics), 10.0);
        assert_eq!(a.department_score(Department::Chemistry), 70.0);
    }

    #[test]
    #[should_panic(expected = "composite scores are derived before ranking")]
    fn composite_score_requires_derivation() {
        let a = applicant(0, "Ada Lovelace", [60.0, 70.0, 90.0, 80.0], 0.0, &[]);
        a.department_score(Department::Biotech);
    }

    #[test]
    fn names() {
        let a = applicant(3, "Alan Turing", [0.0; 4], 0.0, &[]);
        assert_eq!(a.full_name(), "Alan Turing");
        assert_eq!(a.sort_name(), "AlanTuring");
        assert_eq!(a.to_string(), "Alan Turing");
    }
}
