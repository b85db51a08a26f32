use crate::model::*;
use tracing::{debug, info, instrument, trace};

pub const DEFAULT_ROUNDS: usize = 3;

/// Round-based admission: every round distributes pending applicants to their
/// current preference, lets each department admit its best candidates up to
/// its remaining capacity, and moves the others to their next preference.
///
/// Admission is final: nobody accepted in a round is displaced later.
pub struct Rounds<'a> {
    admissions: &'a mut Admissions,
    rounds: usize,
}

impl<'a> Rounds<'a> {
    pub fn new(admissions: &'a mut Admissions, rounds: usize) -> Rounds<'a> {
        Rounds { admissions, rounds }
    }

    #[instrument(skip_all, fields(rounds = self.rounds))]
    pub fn run(&mut self) {
        for round in 1..=self.rounds {
            if self.admissions.pending().is_empty() {
                debug!(round, "No pending applicant left");
                break;
            }
            self.round(round);
        }
        info!(
            admitted = self.admissions.admitted_count(),
            rejected = self.admissions.rejected().len(),
            "Admission rounds complete"
        );
    }

    fn round(&mut self, round: usize) {
        let distributed = self.distribute();
        let mut admitted = 0;
        for department in Department::ALL {
            let candidates = self.admissions.pool(department).candidates().len();
            let admission = self.admissions.rank_and_admit(department);
            if candidates > 0 {
                let pool = self.admissions.pool(department);
                debug!(
                    round,
                    %department,
                    candidates,
                    admitted = admission.admitted.len(),
                    overflow = admission.overflow.len(),
                    remaining = pool.remaining(),
                    full = pool.is_full(),
                    "Department processed"
                );
            }
            admitted += admission.admitted.len();
            self.admissions.defer(admission.overflow);
        }
        self.admissions.advance_preferences();
        info!(
            round,
            distributed,
            admitted,
            pending = self.admissions.pending().len(),
            "Round complete"
        );
    }

    /// Move every pending applicant into the pool of its current preference.
    /// Applicants without any preference left drop out of the process.
    fn distribute(&mut self) -> usize {
        let mut distributed = 0;
        for applicant in self.admissions.take_pending() {
            if self.admissions.distribute(applicant) {
                distributed += 1;
            } else {
                trace!(
                    applicant = %self.admissions.applicant(applicant),
                    "No preference left"
                );
            }
        }
        distributed
    }
}
