use crate::model::{Applicant, ApplicantId, Department, Scores};
use eyre::{Error, WrapErr, ensure};

pub mod csv_file;
pub mod database;
pub mod text;

/// Fields of one applicant record, still as text.
pub(crate) struct RawRecord<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    /// Physics, chemistry, mathematics, computer science, admission exam.
    pub scores: [&'a str; 5],
    pub preferences: Vec<&'a str>,
}

const SCORE_FIELDS: [&str; 5] = [
    "physics",
    "chemistry",
    "mathematics",
    "computer science",
    "admission exam",
];

impl RawRecord<'_> {
    pub fn into_applicant(self, id: ApplicantId) -> Result<Applicant, Error> {
        let mut scores = [0.0; 5];
        for (score, (value, field)) in scores.iter_mut().zip(self.scores.iter().zip(SCORE_FIELDS)) {
            *score = value
                .trim()
                .parse::<f64>()
                .wrap_err_with(|| format!("cannot parse {field} score {value:?}"))?;
        }
        build_applicant(
            id,
            self.first_name,
            self.last_name,
            scores,
            &self.preferences,
        )
    }
}

/// Build an applicant from already decoded fields. Scores are physics,
/// chemistry, mathematics, computer science and admission exam.
pub(crate) fn build_applicant(
    id: ApplicantId,
    first_name: &str,
    last_name: &str,
    scores: [f64; 5],
    preferences: &[&str],
) -> Result<Applicant, Error> {
    ensure!(
        !first_name.is_empty() && !last_name.is_empty(),
        "applicant name is incomplete"
    );
    let mut checked = [0.0; 5];
    for (score, (&value, field)) in checked.iter_mut().zip(scores.iter().zip(SCORE_FIELDS)) {
        *score = check_score(value, field)?;
    }
    let preferences = parse_preferences(preferences)
        .wrap_err_with(|| format!("invalid preferences for {first_name} {last_name}"))?;
    Ok(Applicant::new(
        id,
        first_name.to_owned(),
        last_name.to_owned(),
        Scores {
            physics: checked[0],
            chemistry: checked[1],
            mathematics: checked[2],
            computer_science: checked[3],
        },
        checked[4],
        preferences,
    ))
}

/// Reject non-finite scores and fold `-0.0` into `0.0`.
fn check_score(score: f64, field: &str) -> Result<f64, Error> {
    ensure!(score.is_finite(), "{field} score {score} is not a finite number");
    Ok(score + 0.0)
}

fn parse_preferences(names: &[&str]) -> Result<Vec<Department>, Error> {
    ensure!(!names.is_empty(), "no department preference");
    let mut preferences = Vec::with_capacity(names.len());
    for name in names {
        let department = name.trim().parse::<Department>()?;
        ensure!(
            !preferences.contains(&department),
            "department {department} is listed more than once"
        );
        preferences.push(department);
    }
    Ok(preferences)
}

/// Render a score the way result files show it: at least one decimal.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(scores: [&'a str; 5], preferences: Vec<&'a str>) -> RawRecord<'a> {
        RawRecord {
            first_name: "Ada",
            last_name: "Lovelace",
            scores,
            preferences,
        }
    }

    #[test]
    fn builds_applicant() {
        let a = record(["60", "70.5", "80", "90", "75"], vec!["Physics", "Biotech"])
            .into_applicant(ApplicantId(4))
            .unwrap();
        assert_eq!(a.id, ApplicantId(4));
        assert_eq!(a.scores.chemistry, 70.5);
        assert_eq!(a.admission_exam, 75.0);
        assert_eq!(a.preferences, vec![Department::Physics, Department::Biotech]);
    }

    #[test]
    fn malformed_score() {
        let err = record(["60", "x", "80", "90", "75"], vec!["Physics"])
            .into_applicant(ApplicantId(0))
            .unwrap_err();
        assert!(err.to_string().contains("chemistry"));
        assert!(
            record(["60", "70", "NaN", "90", "75"], vec!["Physics"])
                .into_applicant(ApplicantId(0))
                .is_err()
        );
    }

    #[test]
    fn bad_preferences() {
        assert!(
            record(["1", "2", "3", "4", "5"], vec!["Physics", "Law"])
                .into_applicant(ApplicantId(0))
                .is_err()
        );
        assert!(
            record(["1", "2", "3", "4", "5"], vec!["Physics", "Physics"])
                .into_applicant(ApplicantId(0))
                .is_err()
        );
        assert!(
            record(["1", "2", "3", "4", "5"], vec![])
                .into_applicant(ApplicantId(0))
                .is_err()
        );
    }

    #[test]
    fn negative_zero_is_folded() {
        let a = record(["-0", "-0.0", "0", "1", "-0"], vec!["Physics"])
            .into_applicant(ApplicantId(0))
            .unwrap();
        assert!(a.scores.physics.is_sign_positive());
        assert!(a.scores.chemistry.is_sign_positive());
        assert!(a.admission_exam.is_sign_positive());
    }

    #[test]
    fn decoded_scores() {
        let a = build_applicant(
            ApplicantId(1),
            "Alan",
            "Turing",
            [50.0, 60.0, 40.0, -0.0, 85.0],
            &["Engineering"],
        )
        .unwrap();
        assert_eq!(a.scores.mathematics, 40.0);
        assert!(a.scores.computer_science.is_sign_positive());
        assert_eq!(a.preferences, vec![Department::Engineering]);
        let err = build_applicant(
            ApplicantId(1),
            "Alan",
            "Turing",
            [50.0, f64::INFINITY, 40.0, 0.0, 85.0],
            &["Engineering"],
        )
        .unwrap_err();
        assert!(err.to_string().contains("chemistry"));
        assert!(
            build_applicant(ApplicantId(1), "", "Turing", [0.0; 5], &["Physics"]).is_err()
        );
    }

    #[test]
    fn score_format() {
        assert_eq!(format_score(85.0), "85.0");
        assert_eq!(format_score(82.5), "82.5");
        assert_eq!(format_score(100.0), "100.0");
    }
}
