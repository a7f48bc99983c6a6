//! Read-only filter and aggregate queries behind the HTTP API.
//!
//! Each function borrows a connection for the duration of one request and
//! returns a flat, serializable result.

use rusqlite::{params, Connection, Row};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Core, Launch, LaunchDetail, Rocket};

pub const DEFAULT_ROCKET_LIMIT: i64 = 2;
pub const DEFAULT_CORE_LIMIT: i64 = 3;

#[derive(Debug, Serialize)]
pub struct LaunchList {
    pub count: usize,
    pub launches: Vec<Launch>,
}

#[derive(Debug, Serialize)]
pub struct LaunchDetailList {
    pub count: usize,
    pub launches: Vec<LaunchDetail>,
}

#[derive(Debug, Serialize)]
pub struct TotalCount {
    #[serde(rename = "totalCount")]
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct SuccessCount {
    #[serde(rename = "totalSuccessCount")]
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct FailCount {
    #[serde(rename = "totalFailCount")]
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct HighStageRockets {
    /// `None` when there are no rockets
    #[serde(rename = "highStage")]
    pub high_stage: Option<i64>,
    pub count: usize,
    pub rockets: Vec<Rocket>,
}

#[derive(Debug, Serialize)]
pub struct LimitedRockets {
    pub limit: i64,
    pub count: usize,
    pub rockets: Vec<Rocket>,
}

#[derive(Debug, Serialize)]
pub struct LimitedCores {
    pub limit: i64,
    pub count: usize,
    pub cores: Vec<Core>,
}

#[derive(Debug, Serialize)]
pub struct RocketLaunches {
    #[serde(rename = "rocketID")]
    pub rocket_id: String,
    pub count: usize,
    pub launches: Vec<Launch>,
}

fn collect<T, P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
    map: fn(&Row) -> rusqlite::Result<T>,
) -> Result<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, map)?;
    Ok(rows.collect::<rusqlite::Result<Vec<T>>>()?)
}

fn launches_with_outcome(conn: &Connection, success: bool) -> Result<LaunchList> {
    let launches = collect(
        conn,
        "SELECT * FROM launches WHERE launchSuccess = ?1 ORDER BY id",
        params![success],
        Launch::from_row,
    )?;
    Ok(LaunchList {
        count: launches.len(),
        launches,
    })
}

/// Launches with `launchSuccess = false`, by id
pub fn failed_launches(conn: &Connection) -> Result<LaunchList> {
    launches_with_outcome(conn, false)
}

/// Launches with `launchSuccess = true`, by id
pub fn succeeded_launches(conn: &Connection) -> Result<LaunchList> {
    launches_with_outcome(conn, true)
}

/// Inner join of every launch with its rocket and core
pub fn launch_details(conn: &Connection) -> Result<LaunchDetailList> {
    let launches = collect(
        conn,
        "SELECT l.id AS launch_id, l.flightNumber, l.launchDate, l.launchSuccess,
                r.id AS rocket_id, r.stages, r.costPerLaunch,
                c.id AS core_id, c.status AS core_status, c.reuseCount
         FROM launches l
         JOIN rockets r ON r.id = l.rocketID
         JOIN cores c ON c.id = l.coreID
         ORDER BY l.id",
        [],
        LaunchDetail::from_row,
    )?;
    Ok(LaunchDetailList {
        count: launches.len(),
        launches,
    })
}

pub fn count_launches(conn: &Connection) -> Result<TotalCount> {
    let total = conn.query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))?;
    Ok(TotalCount { total })
}

fn count_with_outcome(conn: &Connection, success: bool) -> Result<i64> {
    let total = conn.query_row(
        "SELECT COUNT(*) FROM launches WHERE launchSuccess = ?1",
        params![success],
        |row| row.get(0),
    )?;
    Ok(total)
}

pub fn count_successes(conn: &Connection) -> Result<SuccessCount> {
    Ok(SuccessCount {
        total: count_with_outcome(conn, true)?,
    })
}

pub fn count_failures(conn: &Connection) -> Result<FailCount> {
    Ok(FailCount {
        total: count_with_outcome(conn, false)?,
    })
}

/// Every rocket tied for the highest stage count
pub fn high_stage_rockets(conn: &Connection) -> Result<HighStageRockets> {
    let high_stage: Option<i64> =
        conn.query_row("SELECT MAX(stages) FROM rockets", [], |row| row.get(0))?;

    let rockets = match high_stage {
        Some(stages) => collect(
            conn,
            "SELECT * FROM rockets WHERE stages = ?1 ORDER BY id",
            params![stages],
            Rocket::from_row,
        )?,
        None => Vec::new(),
    };

    Ok(HighStageRockets {
        high_stage,
        count: rockets.len(),
        rockets,
    })
}

/// Rockets with the fewest stages first. A negative limit means no limit.
pub fn rockets_by_stages(conn: &Connection, limit: i64) -> Result<LimitedRockets> {
    let rockets = collect(
        conn,
        "SELECT * FROM rockets ORDER BY stages ASC, id ASC LIMIT ?1",
        params![limit],
        Rocket::from_row,
    )?;
    Ok(LimitedRockets {
        limit,
        count: rockets.len(),
        rockets,
    })
}

/// Least reused cores first. A negative limit means no limit.
pub fn cores_by_reuse(conn: &Connection, limit: i64) -> Result<LimitedCores> {
    let cores = collect(
        conn,
        "SELECT * FROM cores ORDER BY reuseCount ASC, id ASC LIMIT ?1",
        params![limit],
        Core::from_row,
    )?;
    Ok(LimitedCores {
        limit,
        count: cores.len(),
        cores,
    })
}

/// Launches flown by one rocket; an empty result is an error
pub fn launches_for_rocket(conn: &Connection, rocket_id: &str) -> Result<RocketLaunches> {
    let launches = collect(
        conn,
        "SELECT * FROM launches WHERE rocketID = ?1 ORDER BY id",
        params![rocket_id],
        Launch::from_row,
    )?;

    if launches.is_empty() {
        return Err(Error::NoLaunchesForRocket(rocket_id.to_string()));
    }

    Ok(RocketLaunches {
        rocket_id: rocket_id.to_string(),
        count: launches.len(),
        launches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{generate_create_table, ALL_TABLES};
    use chrono::{DateTime, FixedOffset};

    fn seeded() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        for schema in ALL_TABLES {
            conn.execute(&generate_create_table(schema), []).unwrap();
        }
        conn.execute_batch(
            "INSERT INTO rockets VALUES ('falcon1', 0, 2, 40, 6700000, 1.68, 30146);
             INSERT INTO rockets VALUES ('falcon9', 1, 2, 98, 50000000, 3.7, 549054);
             INSERT INTO rockets VALUES ('starship', 1, 3, 0, 7000000, 9.0, 1335000);
             INSERT INTO rockets VALUES ('heavy', 1, 3, 100, 90000000, 12.2, 1420788);
             INSERT INTO cores VALUES ('c1', 0, 'lost', 0, 0, 0);
             INSERT INTO cores VALUES ('c2', 5, 'active', 9, 3, 6);
             INSERT INTO cores VALUES ('c3', 4, 'inactive', 2, 1, 1);",
        )
        .unwrap();

        let date: DateTime<FixedOffset> =
            DateTime::parse_from_rfc3339("2006-03-24T22:30:00+00:00").unwrap();
        for (id, rocket, core, flight, success) in [
            ("l3", "falcon9", "c2", 3, true),
            ("l1", "falcon1", "c1", 1, false),
            ("l2", "falcon9", "c3", 2, true),
            ("l4", "heavy", "c1", 4, true),
        ] {
            conn.execute(
                "INSERT INTO launches VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![id, rocket, core, date, flight, success],
            )
            .unwrap();
        }
        conn
    }

    #[test]
    fn test_outcome_lists_are_ordered_by_id() {
        let conn = seeded();
        let failed = failed_launches(&conn).unwrap();
        assert_eq!(failed.count, 1);
        assert_eq!(failed.launches[0].id, "l1");

        let succeeded = succeeded_launches(&conn).unwrap();
        let ids: Vec<_> = succeeded.launches.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["l2", "l3", "l4"]);
    }

    #[test]
    fn test_success_and_failure_counts_sum_to_total() {
        let conn = seeded();
        let total = count_launches(&conn).unwrap().total;
        let succeeded = count_successes(&conn).unwrap().total;
        let failed = count_failures(&conn).unwrap().total;
        assert_eq!(total, 4);
        assert_eq!(succeeded + failed, total);
    }

    #[test]
    fn test_launch_details_is_an_inner_join() {
        let conn = seeded();
        conn.execute_batch("PRAGMA foreign_keys = OFF;").unwrap();
        let date = DateTime::parse_from_rfc3339("2007-03-21T01:10:00+00:00").unwrap();
        conn.execute(
            "INSERT INTO launches VALUES ('l5', 'falcon1', 'missing-core', ?1, 5, 0)",
            params![date],
        )
        .unwrap();

        let details = launch_details(&conn).unwrap();
        assert_eq!(count_launches(&conn).unwrap().total, 5);
        assert_eq!(details.count, 4);
        assert!(details.launches.iter().all(|d| d.launch_id != "l5"));
        let l3 = details.launches.iter().find(|d| d.launch_id == "l3").unwrap();
        assert_eq!(l3.rocket_id, "falcon9");
        assert_eq!(l3.core_status, "active");
        assert_eq!(l3.reuse_count, 9);
        assert_eq!(l3.cost_per_launch, 50_000_000.0);
    }

    #[test]
    fn test_high_stage_returns_all_ties() {
        let conn = seeded();
        let result = high_stage_rockets(&conn).unwrap();
        assert_eq!(result.high_stage, Some(3));
        assert_eq!(result.count, 2);
        let ids: Vec<_> = result.rockets.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["heavy", "starship"]);
    }

    #[test]
    fn test_limits() {
        let conn = seeded();
        let rockets = rockets_by_stages(&conn, 1).unwrap();
        assert_eq!(rockets.count, 1);
        assert_eq!(rockets.rockets[0].stages, 2);

        let rockets = rockets_by_stages(&conn, 100).unwrap();
        assert_eq!(rockets.limit, 100);
        assert_eq!(rockets.count, 4);

        let cores = cores_by_reuse(&conn, DEFAULT_CORE_LIMIT).unwrap();
        let reuse: Vec<_> = cores.cores.iter().map(|c| c.reuse_count).collect();
        assert_eq!(reuse, vec![0, 2, 9]);
    }

    #[test]
    fn test_launches_for_rocket() {
        let conn = seeded();
        let result = launches_for_rocket(&conn, "falcon9").unwrap();
        assert_eq!(result.rocket_id, "falcon9");
        assert_eq!(result.count, 2);

        let err = launches_for_rocket(&conn, "starship").unwrap_err();
        assert!(matches!(err, Error::NoLaunchesForRocket(id) if id == "starship"));
    }

    #[test]
    fn test_empty_store_yields_zeroes() {
        let conn = Connection::open_in_memory().unwrap();
        for schema in ALL_TABLES {
            conn.execute(&generate_create_table(schema), []).unwrap();
        }
        assert_eq!(count_launches(&conn).unwrap().total, 0);
        assert_eq!(failed_launches(&conn).unwrap().count, 0);
        assert_eq!(launch_details(&conn).unwrap().count, 0);

        let high = high_stage_rockets(&conn).unwrap();
        assert_eq!(high.high_stage, None);
        assert!(high.rockets.is_empty());
    }
}
