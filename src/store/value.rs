use chrono::{DateTime, FixedOffset};
use rusqlite::Statement;

use crate::model::{Core, Launch, Rocket};
use crate::schema::{TableSchema, CORES, LAUNCHES, ROCKETS};

/// A single bound value of an insert
#[derive(Debug, Clone)]
pub enum SqlValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Timestamp(DateTime<FixedOffset>),
}

impl SqlValue {
    pub fn bind_to(&self, idx: usize, stmt: &mut Statement) -> rusqlite::Result<()> {
        match self {
            SqlValue::Integer(i) => stmt.raw_bind_parameter(idx, i)?,
            SqlValue::Real(f) => stmt.raw_bind_parameter(idx, f)?,
            SqlValue::Text(s) => stmt.raw_bind_parameter(idx, s.as_str())?,
            SqlValue::Timestamp(t) => stmt.raw_bind_parameter(idx, t)?,
        }
        Ok(())
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        SqlValue::Integer(i64::from(b))
    }
}

/// An entity that maps onto one row of a table, in column order
pub trait Persist {
    fn schema() -> &'static TableSchema;
    fn values(&self) -> Vec<SqlValue>;
}

impl Persist for Rocket {
    fn schema() -> &'static TableSchema {
        &ROCKETS
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.id.clone()),
            self.active.into(),
            SqlValue::Integer(self.stages),
            SqlValue::Integer(self.success_rate),
            SqlValue::Real(self.cost_per_launch),
            SqlValue::Real(self.diameter),
            SqlValue::Real(self.mass),
        ]
    }
}

impl Persist for Core {
    fn schema() -> &'static TableSchema {
        &CORES
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.id.clone()),
            SqlValue::Integer(self.block),
            SqlValue::Text(self.status.clone()),
            SqlValue::Integer(self.reuse_count),
            SqlValue::Integer(self.rtls_landings),
            SqlValue::Integer(self.asds_landings),
        ]
    }
}

impl Persist for Launch {
    fn schema() -> &'static TableSchema {
        &LAUNCHES
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.id.clone()),
            SqlValue::Text(self.rocket_id.clone()),
            SqlValue::Text(self.core_id.clone()),
            SqlValue::Timestamp(self.launch_date),
            SqlValue::Integer(self.flight_number),
            self.launch_success.into(),
        ]
    }
}
