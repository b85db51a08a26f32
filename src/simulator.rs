use crate::algos::Rounds;
use crate::checks;
use crate::model::{Admissions, Applicant, ApplicantId, Department};
use eyre::{Error, ensure};
use tracing::info;

#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub capacity: usize,
    pub rounds: usize,
}

/// One accepted applicant as handed to the output sinks.
#[derive(Clone, Debug, PartialEq)]
pub struct Admitted {
    pub id: ApplicantId,
    pub first_name: String,
    pub last_name: String,
    pub score: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DepartmentList {
    pub department: Department,
    pub accepted: Vec<Admitted>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rejected {
    pub id: ApplicantId,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub departments: Vec<DepartmentList>,
    pub rejected: Vec<Rejected>,
}

/// Run a full admission cycle: build the context (which derives composite
/// scores), run the rounds, sort the accepted lists and check the result.
pub fn simulate(applicants: Vec<Applicant>, settings: Settings) -> Result<Admissions, Error> {
    ensure!(settings.rounds > 0, "at least one admission round is required");
    info!(
        applicants = applicants.len(),
        capacity = settings.capacity,
        rounds = settings.rounds,
        "Starting admission"
    );
    let mut admissions = Admissions::new(applicants, settings.capacity)?;
    Rounds::new(&mut admissions, settings.rounds).run();
    admissions.sort_accepted();
    checks::ensure_consistent(&admissions)?;
    Ok(admissions)
}

/// Final accepted lists with effective scores, in department order.
pub fn outcome(a: &Admissions) -> Outcome {
    Outcome {
        departments: Department::ALL
            .iter()
            .map(|&department| DepartmentList {
                department,
                accepted: a
                    .accepted(department)
                    .iter()
                    .map(|&id| {
                        let applicant = a.applicant(id);
                        Admitted {
                            id,
                            first_name: applicant.first_name.clone(),
                            last_name: applicant.last_name.clone(),
                            score: applicant.effective_score(department),
                        }
                    })
                    .collect(),
            })
            .collect(),
        rejected: a
            .rejected()
            .into_iter()
            .map(|id| {
                let applicant = a.applicant(id);
                Rejected {
                    id,
                    first_name: applicant.first_name.clone(),
                    last_name: applicant.last_name.clone(),
                }
            })
            .collect(),
    }
}
