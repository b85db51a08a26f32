pub use self::admissions::Admissions;
#[cfg(test)]
pub(crate) use self::applicant::applicant;
pub use self::applicant::{Applicant, ApplicantId, Scores};
pub use self::department::{Department, RankingRule, Subject};
pub use self::pool::{Admission, DepartmentPool};

mod admissions;
mod applicant;
mod department;
mod pool;
