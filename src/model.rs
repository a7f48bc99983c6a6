//! Entities persisted by ingestion and returned by the query service.
//!
//! Serialized field names match the JSON contract the dashboard reads.

use chrono::{DateTime, FixedOffset};
use rusqlite::Row;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rocket {
    pub id: String,
    pub active: bool,
    pub stages: i64,
    /// Percentage, 0 when upstream has no figure
    pub success_rate: i64,
    pub cost_per_launch: f64,
    /// Meters
    pub diameter: f64,
    /// Kilograms
    pub mass: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Core {
    pub id: String,
    pub block: i64,
    pub status: String,
    pub reuse_count: i64,
    pub rtls_landings: i64,
    pub asds_landings: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Launch {
    pub id: String,
    #[serde(rename = "rocketID")]
    pub rocket_id: String,
    #[serde(rename = "coreID")]
    pub core_id: String,
    pub launch_date: DateTime<FixedOffset>,
    pub flight_number: i64,
    pub launch_success: bool,
}

/// One row of the launch × rocket × core join.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchDetail {
    pub launch_id: String,
    #[serde(rename = "flightNumber")]
    pub flight_number: i64,
    #[serde(rename = "launchDate")]
    pub launch_date: DateTime<FixedOffset>,
    #[serde(rename = "launchSuccess")]
    pub launch_success: bool,
    pub rocket_id: String,
    pub stages: i64,
    #[serde(rename = "costPerLaunch")]
    pub cost_per_launch: f64,
    pub core_id: String,
    pub core_status: String,
    #[serde(rename = "reuseCount")]
    pub reuse_count: i64,
}

impl Rocket {
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            active: row.get("active")?,
            stages: row.get("stages")?,
            success_rate: row.get("successRate")?,
            cost_per_launch: row.get("costPerLaunch")?,
            diameter: row.get("diameter")?,
            mass: row.get("mass")?,
        })
    }
}

impl Core {
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            block: row.get("block")?,
            status: row.get("status")?,
            reuse_count: row.get("reuseCount")?,
            rtls_landings: row.get("rtlsLandings")?,
            asds_landings: row.get("asdsLandings")?,
        })
    }
}

impl Launch {
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            rocket_id: row.get("rocketID")?,
            core_id: row.get("coreID")?,
            launch_date: row.get("launchDate")?,
            flight_number: row.get("flightNumber")?,
            launch_success: row.get("launchSuccess")?,
        })
    }
}

impl LaunchDetail {
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            launch_id: row.get("launch_id")?,
            flight_number: row.get("flightNumber")?,
            launch_date: row.get("launchDate")?,
            launch_success: row.get("launchSuccess")?,
            rocket_id: row.get("rocket_id")?,
            stages: row.get("stages")?,
            cost_per_launch: row.get("costPerLaunch")?,
            core_id: row.get("core_id")?,
            core_status: row.get("core_status")?,
            reuse_count: row.get("reuseCount")?,
        })
    }
}
