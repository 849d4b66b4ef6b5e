//! Thin DuckDB wrapper for the deck table.
//!
//! All values go through parameter binding, never string interpolation.
//! Rows come back as `serde_json` values so callers can deserialize into
//! typed rows with serde.

use std::collections::HashMap;
use std::path::Path;

use duckdb::{types::ValueRef, Connection};
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Embedded database holding the durable per-account decks.
pub struct DeckDb {
    conn: Connection,
}

impl DeckDb {
    /// Open (or create) the database file and ensure the schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// In-memory database, used by tests.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        // Card entries live in `cards` as a JSON-encoded string; timestamps
        // as RFC 3339 strings, which also sort chronologically.
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS decks (
                 id          VARCHAR PRIMARY KEY,
                 owner       VARCHAR NOT NULL,
                 name        VARCHAR NOT NULL,
                 description VARCHAR,
                 cards       VARCHAR NOT NULL,
                 createdAt   VARCHAR NOT NULL,
                 updatedAt   VARCHAR NOT NULL
             )",
        )?;
        Ok(())
    }

    /// Run a SELECT and return each row as a column-name -> value map.
    pub fn query(
        &self,
        sql: &str,
        params: &[&dyn duckdb::ToSql],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;

        // Column metadata is only valid after query execution.
        let column_names: Vec<String> = rows
            .as_ref()
            .expect("statement has rows after query")
            .column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();

        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut map = HashMap::new();
            for (i, name) in column_names.iter().enumerate() {
                map.insert(name.clone(), value_ref_to_json(row.get_ref(i)?));
            }
            out.push(map);
        }
        Ok(out)
    }

    /// Run a SELECT and deserialize each row into `T`.
    pub fn query_into<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: &[&dyn duckdb::ToSql],
    ) -> Result<Vec<T>> {
        let rows = self.query(sql, params)?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let value = serde_json::Value::Object(row.into_iter().collect());
            results.push(serde_json::from_value(value)?);
        }
        Ok(results)
    }

    /// Run an INSERT/UPDATE/DELETE and return the number of affected rows.
    pub fn exec(&self, sql: &str, params: &[&dyn duckdb::ToSql]) -> Result<usize> {
        Ok(self.conn.execute(sql, params)?)
    }
}

/// Convert a DuckDB value to `serde_json::Value`. The deck table only holds
/// VARCHAR columns, but integer and float conversions are kept so ad-hoc
/// aggregates (COUNT, etc.) deserialize too.
fn value_ref_to_json(val: ValueRef<'_>) -> serde_json::Value {
    match val {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Boolean(b) => serde_json::Value::Bool(b),
        ValueRef::TinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::SmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::Int(n) => serde_json::Value::Number(n.into()),
        ValueRef::BigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::Float(f) => serde_json::Number::from_f64(f as f64)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Double(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Text(bytes) => serde_json::Value::String(String::from_utf8_lossy(bytes).to_string()),
        _ => serde_json::Value::Null,
    }
}
