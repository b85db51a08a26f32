use crate::model::{Admissions, ApplicantId};
use crate::ranking;
use eyre::{Error, bail, ensure};
use std::collections::HashMap;

/// Verify the admission invariants once the accepted lists are final:
/// no department above capacity, nobody admitted twice, every list in
/// ranking order.
pub fn ensure_consistent(a: &Admissions) -> Result<(), Error> {
    let mut seen: HashMap<ApplicantId, _> = HashMap::new();
    for pool in a.pools() {
        let department = pool.department();
        ensure!(
            pool.accepted().len() <= a.capacity(),
            "department {department} accepted {} applicants for a capacity of {}",
            pool.accepted().len(),
            a.capacity()
        );
        for &id in pool.accepted() {
            if let Some(other) = seen.insert(id, department) {
                bail!(
                    "applicant {} is admitted to both {other} and {department}",
                    a.applicant(id)
                );
            }
        }
        ensure!(
            ranking::is_ranked(pool.accepted(), &a.applicants, department),
            "accepted list of department {department} is not in ranking order"
        );
    }
    Ok(())
}
