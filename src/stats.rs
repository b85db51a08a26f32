use crate::model::Admissions;

/// Number of admitted applicants per preference rank, trailing empty ranks
/// removed.
pub fn statistics(a: &Admissions) -> Vec<usize> {
    let mut ranks = Vec::new();
    for applicant in a.all_applicants() {
        if let Some(rank) = a.admitted_rank(applicant) {
            if ranks.len() <= rank {
                ranks.resize(rank + 1, 0);
            }
            ranks[rank] += 1;
        }
    }
    ranks
}
