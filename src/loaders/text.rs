//! Whitespace separated applicant lists and plain text result files.
//!
//! Each applicant line reads
//! `first last physics chemistry mathematics computer_science exam pref...`.

use super::{RawRecord, format_score};
use crate::model::{Applicant, ApplicantId};
use crate::simulator::{DepartmentList, Outcome, Rejected};
use eyre::{Error, WrapErr, ensure};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

const FIXED_FIELDS: usize = 7;

pub fn load(path: &Path) -> Result<Vec<Applicant>, Error> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot read applicants from {}", path.display()))?;
    let applicants =
        parse(&content).wrap_err_with(|| format!("invalid applicant file {}", path.display()))?;
    debug!(path = %path.display(), applicants = applicants.len(), "Applicants loaded");
    Ok(applicants)
}

pub fn parse(content: &str) -> Result<Vec<Applicant>, Error> {
    let mut applicants = Vec::new();
    for (line_number, line) in content.lines().enumerate() {
        let fields = line.split_whitespace().collect::<Vec<_>>();
        if fields.is_empty() {
            continue;
        }
        let applicant = parse_record(&fields, ApplicantId(applicants.len()))
            .wrap_err_with(|| format!("line {}", line_number + 1))?;
        applicants.push(applicant);
    }
    Ok(applicants)
}

fn parse_record(fields: &[&str], id: ApplicantId) -> Result<Applicant, Error> {
    ensure!(
        fields.len() > FIXED_FIELDS,
        "expected at least {} fields, found {}",
        FIXED_FIELDS + 1,
        fields.len()
    );
    RawRecord {
        first_name: fields[0],
        last_name: fields[1],
        scores: [fields[2], fields[3], fields[4], fields[5], fields[6]],
        preferences: fields[FIXED_FIELDS..].to_vec(),
    }
    .into_applicant(id)
}

pub fn write_department<W: Write>(w: &mut W, list: &DepartmentList) -> std::io::Result<()> {
    for admitted in &list.accepted {
        writeln!(
            w,
            "{} {} {}",
            admitted.first_name,
            admitted.last_name,
            format_score(admitted.score)
        )?;
    }
    Ok(())
}

pub fn write_rejected<W: Write>(w: &mut W, rejected: &[Rejected]) -> std::io::Result<()> {
    for r in rejected {
        writeln!(w, "{} {}", r.first_name, r.last_name)?;
    }
    Ok(())
}

/// Write one `<Department>.txt` file per department and `rejected.txt`.
pub fn save(directory: &Path, outcome: &Outcome) -> Result<(), Error> {
    std::fs::create_dir_all(directory)
        .wrap_err_with(|| format!("cannot create output directory {}", directory.display()))?;
    for list in &outcome.departments {
        let path = directory.join(format!("{}.txt", list.department));
        write_file(&path, |w| write_department(w, list))?;
    }
    write_file(&directory.join("rejected.txt"), |w| {
        write_rejected(w, &outcome.rejected)
    })
}

fn write_file<F>(path: &Path, write: F) -> Result<(), Error>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let mut w = BufWriter::new(
        File::create(path).wrap_err_with(|| format!("cannot create {}", path.display()))?,
    );
    write(&mut w)
        .and_then(|()| w.flush())
        .wrap_err_with(|| format!("cannot write {}", path.display()))?;
    debug!(path = %path.display(), "Results written");
    Ok(())
}
