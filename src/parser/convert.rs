//! Raw upstream record → entity conversion.
//!
//! Every conversion either yields an entity or a [`SkipReason`]; callers
//! count skips and move on.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use super::{Field, RawCore, RawLaunch, RawRecord, RawRocket};
use crate::model::{Core, Launch, Rocket};

/// Why a raw record was left out of the store
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// No string `id`
    MissingId,
    /// `cores` absent, null or empty
    NoCores,
    /// `rocket` absent, null or empty
    NoRocket,
    /// First entry of `cores` has no `core` id
    NoCoreId,
    /// `date_utc` absent, null or empty
    MissingDate,
    /// `date_utc` present but not an ISO-8601 timestamp
    InvalidDate(String),
    /// `rocket` names a rocket that was not stored in this run
    UnknownRocket(String),
    /// First core names a core that was not stored in this run
    UnknownCore(String),
}

impl SkipReason {
    /// Stable label used when tallying skips
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::MissingId => "missing id",
            SkipReason::NoCores => "no cores",
            SkipReason::NoRocket => "no rocket",
            SkipReason::NoCoreId => "no core id",
            SkipReason::MissingDate => "missing date",
            SkipReason::InvalidDate(_) => "invalid date",
            SkipReason::UnknownRocket(_) => "unknown rocket",
            SkipReason::UnknownCore(_) => "unknown core",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidDate(raw) => write!(f, "invalid date {raw:?}"),
            SkipReason::UnknownRocket(id) => write!(f, "unknown rocket {id:?}"),
            SkipReason::UnknownCore(id) => write!(f, "unknown core {id:?}"),
            other => f.write_str(other.label()),
        }
    }
}

/// Present and non-empty string, or `reason`
fn required<'a>(field: Field<&'a str>, reason: SkipReason) -> Result<&'a str, SkipReason> {
    match field {
        Field::Present(s) if !s.is_empty() => Ok(s),
        _ => Err(reason),
    }
}

pub fn convert_rocket(record: &RawRecord) -> Result<Rocket, SkipReason> {
    let raw = RawRocket(record);
    let id = required(raw.id(), SkipReason::MissingId)?;

    Ok(Rocket {
        id: id.to_string(),
        active: raw.active().or(false),
        stages: raw.stages().or(0),
        success_rate: raw.success_rate_pct().or(0),
        cost_per_launch: raw.cost_per_launch().or(0.0),
        diameter: raw.diameter_meters().or(0.0),
        mass: raw.mass_kg().or(0.0),
    })
}

pub fn convert_core(record: &RawRecord) -> Result<Core, SkipReason> {
    let raw = RawCore(record);
    let id = required(raw.id(), SkipReason::MissingId)?;

    // Upstream sends `"block": null` for unassigned cores; both that and an
    // omitted key store 0.
    let block = match raw.block() {
        Field::Present(block) => block,
        Field::Null | Field::Missing => 0,
    };

    Ok(Core {
        id: id.to_string(),
        block,
        status: raw.status().or("unknown").to_string(),
        reuse_count: raw.reuse_count().or(0),
        rtls_landings: raw.rtls_landings().or(0),
        asds_landings: raw.asds_landings().or(0),
    })
}

/// Checks run in order and stop at the first failure.
pub fn convert_launch(record: &RawRecord) -> Result<Launch, SkipReason> {
    let raw = RawLaunch(record);
    let id = required(raw.id(), SkipReason::MissingId)?;

    match raw.cores() {
        Field::Present(cores) if !cores.is_empty() => {}
        _ => return Err(SkipReason::NoCores),
    }
    let rocket_id = required(raw.rocket(), SkipReason::NoRocket)?;
    let core_id = required(raw.first_core_id(), SkipReason::NoCoreId)?;
    let date = required(raw.date_utc(), SkipReason::MissingDate)?;
    let launch_date = parse_launch_date(date)?;

    Ok(Launch {
        id: id.to_string(),
        rocket_id: rocket_id.to_string(),
        core_id: core_id.to_string(),
        launch_date,
        flight_number: raw.flight_number().or(0),
        launch_success: raw.success().or(false),
    })
}

/// Parse an upstream UTC timestamp, rewriting a trailing `Z` as `+00:00`.
///
/// Timestamps without an offset, and bare dates, are read as UTC.
pub fn parse_launch_date(raw: &str) -> Result<DateTime<FixedOffset>, SkipReason> {
    let normalized = match raw.strip_suffix('Z') {
        Some(stem) => format!("{stem}+00:00"),
        None => raw.to_string(),
    };

    if let Ok(date) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(date);
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN)))
        .map_err(|_| SkipReason::InvalidDate(raw.to_string()))?;
    Ok(naive.and_utc().fixed_offset())
}
