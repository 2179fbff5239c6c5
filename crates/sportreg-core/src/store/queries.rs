//! Record insertion and filtered queries over the document collection.

use rusqlite::params;
use serde_json::Value;

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Record, RecordFilter, SortOrder},
};

const INSERT_RECORD_SQL: &str =
    "INSERT INTO records (username, kind, date, completed, document) VALUES (?1, ?2, ?3, ?4, ?5)";

impl super::Store {
    /// Inserts a record into the user's partition and returns the
    /// generated id. The caller never depends on the id beyond echoing it
    /// back.
    pub fn insert_record(&mut self, username: &str, record: &Record) -> Result<u64> {
        let document = serde_json::to_string(&record.to_document()?)?;

        self.connection
            .execute(
                INSERT_RECORD_SQL,
                params![
                    username,
                    record.kind().as_str(),
                    record.date().to_string(),
                    record.completed_flag(),
                    document,
                ],
            )
            .db_context("Failed to insert record")?;

        Ok(self.connection.last_insert_rowid() as u64)
    }

    /// Finds records in the user's partition matching the filter, sorted
    /// by date in the requested direction.
    ///
    /// Ties on `date` come back in insertion order regardless of
    /// direction, which gives callers a stable retrieval order to
    /// preserve through later merges. Plans store no completion flag, so
    /// a `completed` predicate never matches them.
    pub fn find_records(
        &self,
        username: &str,
        filter: &RecordFilter,
        order: SortOrder,
        limit: Option<u32>,
    ) -> Result<Vec<Record>> {
        let mut query = String::from("SELECT document FROM records WHERE username = ?");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(username.to_string())];

        if let Some(completed) = filter.completed {
            query.push_str(" AND completed = ?");
            params_vec.push(Box::new(completed));
        }

        if let Some(kind) = filter.kind {
            query.push_str(" AND kind = ?");
            params_vec.push(Box::new(kind.as_str().to_string()));
        }

        query.push_str(&format!(" ORDER BY date {}, id ASC", order.as_sql()));

        if let Some(limit) = limit {
            query.push_str(" LIMIT ?");
            params_vec.push(Box::new(limit));
        }

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| TrackerError::database("Failed to prepare query").with_source(e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let documents: Vec<String> = stmt
            .query_map(&params_refs[..], |row| row.get(0))
            .map_err(|e| TrackerError::database("Failed to query records").with_source(e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TrackerError::database("Failed to fetch records").with_source(e))?;

        documents
            .into_iter()
            .map(|body| {
                let value: Value = serde_json::from_str(&body)?;
                Record::from_document(value)
            })
            .collect()
    }
}
