use crate::model::{Applicant, Department};

/// Attach the composite score of every department which ranks on an average
/// of two subjects. Must run before the first round.
pub fn derive_composites(applicant: &mut Applicant) {
    for department in Department::ALL {
        if department.is_composite() {
            let score = applicant.scores.apply(department.ranking_rule());
            applicant.set_composite(department, score);
        }
    }
}
