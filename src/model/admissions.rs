use super::*;
use crate::scores;
use eyre::{Error, ensure};

/// Allocation context shared by every step of the admission rounds.
#[derive(Debug)]
pub struct Admissions {
    pub applicants: Vec<Applicant>,
    capacity: usize,
    pools: Vec<DepartmentPool>,
    tried: Vec<usize>,
    admitted_to: Vec<Option<Department>>,
    pending: Vec<ApplicantId>,
}

impl Admissions {
    /// Build the context. Applicants are renumbered in order so that their
    /// identifier is also their index, and get their composite scores
    /// attached before any round runs.
    pub fn new(mut applicants: Vec<Applicant>, capacity: usize) -> Result<Admissions, Error> {
        ensure!(capacity > 0, "department capacity must be positive");
        for (idx, applicant) in applicants.iter_mut().enumerate() {
            applicant.id = ApplicantId(idx);
            scores::derive_composites(applicant);
        }
        let len = applicants.len();
        Ok(Admissions {
            pending: applicants.iter().map(|a| a.id).collect(),
            applicants,
            capacity,
            pools: Department::ALL
                .iter()
                .map(|&d| DepartmentPool::new(d, capacity))
                .collect(),
            tried: vec![0; len],
            admitted_to: vec![None; len],
        })
    }

    pub fn applicant(&self, ApplicantId(applicant): ApplicantId) -> &Applicant {
        &self.applicants[applicant]
    }

    pub fn all_applicants(&self) -> Vec<ApplicantId> {
        (0..self.applicants.len()).map(ApplicantId).collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn pool(&self, department: Department) -> &DepartmentPool {
        &self.pools[department.index()]
    }

    pub fn pools(&self) -> &[DepartmentPool] {
        &self.pools
    }

    pub fn accepted(&self, department: Department) -> &[ApplicantId] {
        self.pool(department).accepted()
    }

    /// Number of preferences already tried and discarded.
    pub fn tried(&self, ApplicantId(applicant): ApplicantId) -> usize {
        self.tried[applicant]
    }

    /// Front of the remaining preference list.
    pub fn current_preference(&self, applicant: ApplicantId) -> Option<Department> {
        self.applicant(applicant)
            .preference_at(self.tried(applicant))
    }

    pub fn department_for(&self, ApplicantId(applicant): ApplicantId) -> Option<Department> {
        self.admitted_to[applicant]
    }

    /// Rank (starting at 0) of the preference the applicant was admitted to.
    pub fn admitted_rank(&self, applicant: ApplicantId) -> Option<usize> {
        self.department_for(applicant)
            .map(|_| self.tried(applicant))
    }

    pub fn pending(&self) -> &[ApplicantId] {
        &self.pending
    }

    pub fn take_pending(&mut self) -> Vec<ApplicantId> {
        std::mem::take(&mut self.pending)
    }

    /// Put applicants back into the pending pool for the next round.
    pub fn defer(&mut self, applicants: Vec<ApplicantId>) {
        self.pending.extend(applicants);
    }

    /// Place an applicant into the pool of its current preference. Return
    /// `false` if the applicant has no preference left.
    pub fn distribute(&mut self, applicant: ApplicantId) -> bool {
        match self.current_preference(applicant) {
            Some(department) => {
                self.pools[department.index()].collect(applicant);
                true
            }
            None => false,
        }
    }

    /// Rank the department candidates, admit as many as the remaining capacity
    /// allows and return the others.
    pub fn rank_and_admit(&mut self, department: Department) -> Admission {
        let pool = &mut self.pools[department.index()];
        pool.rank(&self.applicants);
        let admission = pool.admit();
        for &ApplicantId(a) in &admission.admitted {
            assert!(
                self.admitted_to[a].is_none(),
                "applicant is already admitted to a department"
            );
            self.admitted_to[a] = Some(department);
        }
        admission
    }

    /// Discard the front preference of every pending applicant.
    pub fn advance_preferences(&mut self) {
        for &ApplicantId(a) in &self.pending {
            self.tried[a] += 1;
        }
    }

    /// Re-sort every accepted list in ranking order.
    pub fn sort_accepted(&mut self) {
        for pool in &mut self.pools {
            pool.sort_accepted(&self.applicants);
        }
    }

    pub fn admitted_count(&self) -> usize {
        self.admitted_to.iter().filter(|d| d.is_some()).count()
    }

    pub fn rejected(&self) -> Vec<ApplicantId> {
        self.admitted_to
            .iter()
            .enumerate()
            .filter_map(|(id, admission)| {
                if admission.is_none() {
                    Some(ApplicantId(id))
                } else {
                    None
                }
            })
            .collect()
    }
}
