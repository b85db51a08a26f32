use crate::model::{Applicant, ApplicantId, Department};
use std::cmp::Ordering;

/// Order two applicants for a department: higher effective score first,
/// then concatenated full name in ascending order. `0.0` and `-0.0` are the
/// same score.
pub fn compare(a: &Applicant, b: &Applicant, department: Department) -> Ordering {
    let score = |x: &Applicant| x.effective_score(department) + 0.0;
    score(b)
        .total_cmp(&score(a))
        .then_with(|| a.sort_name().cmp(&b.sort_name()))
}

/// Stable sort of `ids` in ranking order for `department`.
pub fn rank(ids: &mut [ApplicantId], applicants: &[Applicant], department: Department) {
    ids.sort_by(|&ApplicantId(a), &ApplicantId(b)| {
        compare(&applicants[a], &applicants[b], department)
    });
}

/// Check that `ids` already are in ranking order for `department`.
pub fn is_ranked(ids: &[ApplicantId], applicants: &[Applicant], department: Department) -> bool {
    ids.windows(2).all(|w| {
        compare(&applicants[w[0].0], &applicants[w[1].0], department) != Ordering::Greater
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::applicant;

    #[test]
    fn higher_score_first() {
        let applicants = vec![
            applicant(0, "Zoe Adams", [0.0, 90.0, 0.0, 0.0], 50.0, &[]),
            applicant(1, "Ann Brown", [0.0, 95.0, 0.0, 0.0], 50.0, &[]),
        ];
        let mut ids = vec![ApplicantId(0), ApplicantId(1)];
        rank(&mut ids, &applicants, Department::Chemistry);
        assert_eq!(ids, vec![ApplicantId(1), ApplicantId(0)]);
    }

    #[test]
    fn ties_broken_by_name() {
        let applicants = vec![
            applicant(0, "Mary Smith", [0.0, 0.0, 70.0, 0.0], 40.0, &[]),
            applicant(1, "John Smith", [0.0, 0.0, 70.0, 0.0], 40.0, &[]),
            applicant(2, "Zed Alpha", [0.0, 0.0, 80.0, 0.0], 40.0, &[]),
        ];
        let mut ids = vec![ApplicantId(0), ApplicantId(1), ApplicantId(2)];
        rank(&mut ids, &applicants, Department::Mathematics);
        assert_eq!(ids, vec![ApplicantId(2), ApplicantId(1), ApplicantId(0)]);
        assert!(is_ranked(&ids, &applicants, Department::Mathematics));
        assert!(!is_ranked(
            &[ApplicantId(0), ApplicantId(2)],
            &applicants,
            Department::Mathematics
        ));
    }

    #[test]
    fn admission_exam_can_dominate() {
        let applicants = vec![
            applicant(0, "Low Subject", [0.0, 60.0, 0.0, 0.0], 99.0, &[]),
            applicant(1, "High Subject", [0.0, 98.0, 0.0, 0.0], 10.0, &[]),
        ];
        assert_eq!(
            compare(&applicants[0], &applicants[1], Department::Chemistry),
            Ordering::Less
        );
    }

    #[test]
    fn tie_key_is_concatenation() {
        let applicants = vec![
            applicant(0, "Ab Cd", [0.0, 0.0, 50.0, 0.0], 0.0, &[]),
            applicant(1, "A Ccd", [0.0, 0.0, 50.0, 0.0], 0.0, &[]),
        ];
        // "ACcd" sorts before "AbCd" in byte order.
        assert_eq!(
            compare(&applicants[1], &applicants[0], Department::Mathematics),
            Ordering::Less
        );
    }

    #[test]
    fn signed_zeros_tie() {
        let applicants = vec![
            applicant(0, "Zed Z", [0.0; 4], 0.0, &[]),
            applicant(1, "Ann A", [-0.0; 4], -0.0, &[]),
        ];
        assert_eq!(
            compare(&applicants[1], &applicants[0], Department::Mathematics),
            Ordering::Less
        );
        let mut ids = vec![ApplicantId(0), ApplicantId(1)];
        rank(&mut ids, &applicants, Department::Mathematics);
        assert_eq!(ids, vec![ApplicantId(1), ApplicantId(0)]);
    }
}
