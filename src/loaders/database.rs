use super::build_applicant;
use crate::model::{Applicant, ApplicantId};
use crate::simulator::Outcome;
use eyre::{Error, WrapErr};
use sqlx::any::{AnyConnectOptions, AnyRow};
use sqlx::{AnyConnection, Connection, Row};
use std::str::FromStr;
use tracing::{debug, trace};

const SCORE_COLUMNS: [&str; 5] = [
    "physics",
    "chemistry",
    "mathematics",
    "computer_science",
    "admission_exam",
];

/// Applicants stored in an `applicants` table. Results are written back to
/// the `department` and `score` columns of the same table.
pub struct Loader {
    conn: AnyConnection,
    ids: Vec<i64>,
}

impl Loader {
    pub async fn new(url: &str) -> Result<Self, Error> {
        sqlx::any::install_default_drivers();
        Ok(Self {
            conn: AnyConnection::connect_with(&AnyConnectOptions::from_str(url)?)
                .await
                .wrap_err("cannot connect to the applicants database")?,
            ids: Vec::new(),
        })
    }

    pub async fn load(&mut self) -> Result<Vec<Applicant>, Error> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, physics, chemistry, mathematics, \
             computer_science, admission_exam, preference1, preference2, preference3 \
             FROM applicants ORDER BY id",
        )
        .fetch_all(&mut self.conn)
        .await
        .wrap_err("cannot load applicants")?;
        self.ids.clear();
        let mut applicants = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row.try_get("id")?;
            let applicant = Self::applicant(&row, ApplicantId(applicants.len()))
                .wrap_err_with(|| format!("invalid applicant with id {id}"))?;
            trace!(id, applicant = %applicant, "Applicant loaded");
            self.ids.push(id);
            applicants.push(applicant);
        }
        debug!(applicants = applicants.len(), "Applicants loaded");
        Ok(applicants)
    }

    fn applicant(row: &AnyRow, id: ApplicantId) -> Result<Applicant, Error> {
        let first_name: String = row.try_get("first_name")?;
        let last_name: String = row.try_get("last_name")?;
        let mut scores = [0.0; 5];
        for (score, column) in scores.iter_mut().zip(SCORE_COLUMNS) {
            *score = Self::score(row, column)?;
        }
        let mut preferences = Vec::with_capacity(3);
        for column in ["preference1", "preference2", "preference3"] {
            if let Some(p) = row.try_get::<Option<String>, _>(column)? {
                if !p.trim().is_empty() {
                    preferences.push(p);
                }
            }
        }
        let preferences = preferences.iter().map(String::as_str).collect::<Vec<_>>();
        build_applicant(id, &first_name, &last_name, scores, &preferences)
    }

    /// Scores may be stored as double, single precision or integer columns.
    fn score(row: &AnyRow, column: &str) -> Result<f64, Error> {
        if let Ok(score) = row.try_get::<f64, _>(column) {
            return Ok(score);
        }
        if let Ok(score) = row.try_get::<f32, _>(column) {
            return Ok(f64::from(score));
        }
        let score: i64 = row
            .try_get(column)
            .wrap_err_with(|| format!("{column} score is not a number"))?;
        Ok(score as f64)
    }

    pub async fn save(&mut self, outcome: &Outcome) -> Result<(), Error> {
        let mut trans = self.conn.begin().await?;
        for list in &outcome.departments {
            for admitted in &list.accepted {
                sqlx::query("UPDATE applicants SET department=?, score=? WHERE id=?")
                    .bind(list.department.name())
                    .bind(admitted.score)
                    .bind(self.ids[admitted.id.0])
                    .execute(&mut *trans)
                    .await
                    .wrap_err("cannot save admissions")?;
            }
        }
        for rejected in &outcome.rejected {
            sqlx::query("UPDATE applicants SET department=NULL, score=NULL WHERE id=?")
                .bind(self.ids[rejected.id.0])
                .execute(&mut *trans)
                .await
                .wrap_err("cannot clear admission for rejected applicant")?;
        }
        trans
            .commit()
            .await
            .wrap_err("error when committing transaction")?;
        Ok(())
    }
}
