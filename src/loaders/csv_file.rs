//! CSV applicant lists and CSV result files.

use super::RawRecord;
use crate::model::{Applicant, ApplicantId};
use crate::simulator::{DepartmentList, Outcome, Rejected};
use eyre::{Error, WrapErr};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ApplicantRecord {
    first_name: String,
    last_name: String,
    physics: String,
    chemistry: String,
    mathematics: String,
    computer_science: String,
    admission_exam: String,
    preference1: String,
    #[serde(default)]
    preference2: Option<String>,
    #[serde(default)]
    preference3: Option<String>,
}

#[derive(Debug, Serialize)]
struct AdmittedRecord<'a> {
    first_name: &'a str,
    last_name: &'a str,
    score: f64,
}

#[derive(Debug, Serialize)]
struct RejectedRecord<'a> {
    first_name: &'a str,
    last_name: &'a str,
}

pub fn load(path: &Path) -> Result<Vec<Applicant>, Error> {
    let file = std::fs::File::open(path)
        .wrap_err_with(|| format!("cannot read applicants from {}", path.display()))?;
    let applicants =
        parse(file).wrap_err_with(|| format!("invalid applicant file {}", path.display()))?;
    debug!(path = %path.display(), applicants = applicants.len(), "Applicants loaded");
    Ok(applicants)
}

pub fn parse<R: Read>(reader: R) -> Result<Vec<Applicant>, Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut applicants = Vec::new();
    for (row, record) in reader.deserialize::<ApplicantRecord>().enumerate() {
        let record = record.wrap_err_with(|| format!("record {}", row + 1))?;
        let preferences = [
            Some(record.preference1.as_str()),
            record.preference2.as_deref(),
            record.preference3.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect();
        let applicant = RawRecord {
            first_name: record.first_name.as_str(),
            last_name: record.last_name.as_str(),
            scores: [
                record.physics.as_str(),
                record.chemistry.as_str(),
                record.mathematics.as_str(),
                record.computer_science.as_str(),
                record.admission_exam.as_str(),
            ],
            preferences,
        }
        .into_applicant(ApplicantId(applicants.len()))
        .wrap_err_with(|| format!("record {}", row + 1))?;
        applicants.push(applicant);
    }
    Ok(applicants)
}

pub fn write_department<W: Write>(w: W, list: &DepartmentList) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(w);
    for admitted in &list.accepted {
        writer.serialize(AdmittedRecord {
            first_name: &admitted.first_name,
            last_name: &admitted.last_name,
            score: admitted.score,
        })?;
    }
    if list.accepted.is_empty() {
        writer.write_record(["first_name", "last_name", "score"])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_rejected<W: Write>(w: W, rejected: &[Rejected]) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(w);
    for r in rejected {
        writer.serialize(RejectedRecord {
            first_name: &r.first_name,
            last_name: &r.last_name,
        })?;
    }
    if rejected.is_empty() {
        writer.write_record(["first_name", "last_name"])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write one `<Department>.csv` file per department and `rejected.csv`.
pub fn save(directory: &Path, outcome: &Outcome) -> Result<(), Error> {
    std::fs::create_dir_all(directory)
        .wrap_err_with(|| format!("cannot create output directory {}", directory.display()))?;
    for list in &outcome.departments {
        let path = directory.join(format!("{}.csv", list.department));
        let file = std::fs::File::create(&path)
            .wrap_err_with(|| format!("cannot create {}", path.display()))?;
        write_department(file, list).wrap_err_with(|| format!("cannot write {}", path.display()))?;
    }
    let path = directory.join("rejected.csv");
    let file =
        std::fs::File::create(&path).wrap_err_with(|| format!("cannot create {}", path.display()))?;
    write_rejected(file, &outcome.rejected)
        .wrap_err_with(|| format!("cannot write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Department;
    use crate::simulator::Admitted;

    const APPLICANTS: &str = "\
first_name,last_name,physics,chemistry,mathematics,computer_science,admission_exam,preference1,preference2,preference3
Jermaine,Farr,60,70,80,90,55,Physics,Chemistry,Mathematics
Mira,Hughes,90,85,70,60,40,Chemistry,,
";

    #[test]
    fn parses_records() {
        let applicants = parse(APPLICANTS.as_bytes()).unwrap();
        assert_eq!(applicants.len(), 2);
        assert_eq!(applicants[0].scores.computer_science, 90.0);
        assert_eq!(applicants[1].preferences, vec![Department::Chemistry]);
        assert_eq!(applicants[1].id, ApplicantId(1));
    }

    #[test]
    fn rejects_bad_records() {
        let bad_score = APPLICANTS.replace("85", "eighty");
        let err = parse(bad_score.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "record 2");
        let bad_department = APPLICANTS.replace("Chemistry,,", "Alchemy,,");
        assert!(parse(bad_department.as_bytes()).is_err());
    }

    #[test]
    fn writes_departments() {
        let list = DepartmentList {
            department: Department::Physics,
            accepted: vec![Admitted {
                id: ApplicantId(0),
                first_name: "Jermaine".into(),
                last_name: "Farr".into(),
                score: 70.5,
            }],
        };
        let mut out = Vec::new();
        write_department(&mut out, &list).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "first_name,last_name,score\nJermaine,Farr,70.5\n"
        );
        let mut out = Vec::new();
        write_rejected(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "first_name,last_name\n");
    }
}
