use super::{Applicant, ApplicantId, Department};
use crate::ranking;

/// Outcome of one admitting step.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Admission {
    pub admitted: Vec<ApplicantId>,
    pub overflow: Vec<ApplicantId>,
}

/// Per-department state across rounds.
///
/// Each round the pool goes through collecting (`collect`), ranking (`rank`)
/// and admitting (`admit`). Only the accepted list and the remaining capacity
/// survive from one round to the next.
#[derive(Clone, Debug)]
pub struct DepartmentPool {
    department: Department,
    capacity: usize,
    remaining: usize,
    candidates: Vec<ApplicantId>,
    accepted: Vec<ApplicantId>,
}

impl DepartmentPool {
    pub fn new(department: Department, capacity: usize) -> Self {
        Self {
            department,
            capacity,
            remaining: capacity,
            candidates: Vec::new(),
            accepted: Vec::new(),
        }
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_full(&self) -> bool {
        self.remaining == 0
    }

    pub fn candidates(&self) -> &[ApplicantId] {
        &self.candidates
    }

    pub fn accepted(&self) -> &[ApplicantId] {
        &self.accepted
    }

    pub fn collect(&mut self, applicant: ApplicantId) {
        self.candidates.push(applicant);
    }

    pub fn rank(&mut self, applicants: &[Applicant]) {
        ranking::rank(&mut self.candidates, applicants, self.department);
    }

    /// Accept ranked candidates up to the remaining capacity. The candidate
    /// queue is emptied; candidates beyond capacity are returned as overflow.
    pub fn admit(&mut self) -> Admission {
        let take = self.remaining.min(self.candidates.len());
        let overflow = self.candidates.split_off(take);
        let admitted = std::mem::take(&mut self.candidates);
        self.accepted.extend_from_slice(&admitted);
        self.remaining = self.capacity - self.accepted.len();
        Admission { admitted, overflow }
    }

    /// Re-sort the whole accepted list in ranking order.
    pub fn sort_accepted(&mut self, applicants: &[Applicant]) {
        ranking::rank(&mut self.accepted, applicants, self.department);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::applicant;

    fn chemists() -> Vec<Applicant> {
        [90.0, 95.0, 70.0, 80.0]
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                applicant(
                    i,
                    &format!("Name{i} Last"),
                    [0.0, c, 0.0, 0.0],
                    0.0,
                    &[Department::Chemistry],
                )
            })
            .collect()
    }

    #[test]
    fn admits_up_to_capacity() {
        let applicants = chemists();
        let mut pool = DepartmentPool::new(Department::Chemistry, 2);
        for a in &applicants {
            pool.collect(a.id);
        }
        pool.rank(&applicants);
        assert_eq!(
            pool.candidates(),
            &[ApplicantId(1), ApplicantId(0), ApplicantId(3), ApplicantId(2)]
        );
        let admission = pool.admit();
        assert_eq!(admission.admitted, vec![ApplicantId(1), ApplicantId(0)]);
        assert_eq!(admission.overflow, vec![ApplicantId(3), ApplicantId(2)]);
        assert!(pool.candidates().is_empty());
        assert_eq!(pool.remaining(), 0);
        assert!(pool.is_full());
    }

    #[test]
    fn full_pool_admits_nothing() {
        let applicants = chemists();
        let mut pool = DepartmentPool::new(Department::Chemistry, 1);
        pool.collect(ApplicantId(2));
        pool.admit();
        pool.collect(ApplicantId(1));
        pool.rank(&applicants);
        let admission = pool.admit();
        assert!(admission.admitted.is_empty());
        assert_eq!(admission.overflow, vec![ApplicantId(1)]);
        assert_eq!(pool.accepted(), &[ApplicantId(2)]);
    }

    #[test]
    fn remaining_capacity_spans_rounds() {
        let applicants = chemists();
        let mut pool = DepartmentPool::new(Department::Chemistry, 3);
        pool.collect(ApplicantId(2));
        assert_eq!(pool.admit().admitted, vec![ApplicantId(2)]);
        assert_eq!(pool.remaining(), 2);
        for id in [0, 1, 3] {
            pool.collect(ApplicantId(id));
        }
        pool.rank(&applicants);
        let admission = pool.admit();
        assert_eq!(admission.admitted, vec![ApplicantId(1), ApplicantId(0)]);
        assert_eq!(admission.overflow, vec![ApplicantId(3)]);
        assert_eq!(
            pool.accepted(),
            &[ApplicantId(2), ApplicantId(1), ApplicantId(0)]
        );
        pool.sort_accepted(&applicants);
        assert_eq!(
            pool.accepted(),
            &[ApplicantId(1), ApplicantId(0), ApplicantId(2)]
        );
        assert_eq!(pool.capacity(), 3);
    }
}
