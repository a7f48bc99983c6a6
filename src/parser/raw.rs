//! Named accessors over the upstream rocket, core and launch payloads.

use serde_json::Value;

use super::{Field, RawRecord};

#[derive(Debug, Clone, Copy)]
pub struct RawRocket<'a>(pub &'a RawRecord);

impl<'a> RawRocket<'a> {
    pub fn id(&self) -> Field<&'a str> {
        self.0.str("id")
    }

    pub fn active(&self) -> Field<bool> {
        self.0.bool("active")
    }

    pub fn stages(&self) -> Field<i64> {
        self.0.int("stages")
    }

    pub fn success_rate_pct(&self) -> Field<i64> {
        self.0.int("success_rate_pct")
    }

    pub fn cost_per_launch(&self) -> Field<f64> {
        self.0.float("cost_per_launch")
    }

    pub fn diameter_meters(&self) -> Field<f64> {
        self.0.measure("diameter", "meters")
    }

    pub fn mass_kg(&self) -> Field<f64> {
        self.0.measure("mass", "kg")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RawCore<'a>(pub &'a RawRecord);

impl<'a> RawCore<'a> {
    pub fn id(&self) -> Field<&'a str> {
        self.0.str("id")
    }

    pub fn block(&self) -> Field<i64> {
        self.0.int("block")
    }

    pub fn status(&self) -> Field<&'a str> {
        self.0.str("status")
    }

    pub fn reuse_count(&self) -> Field<i64> {
        self.0.int("reuse_count")
    }

    pub fn rtls_landings(&self) -> Field<i64> {
        self.0.int("rtls_landings")
    }

    pub fn asds_landings(&self) -> Field<i64> {
        self.0.int("asds_landings")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RawLaunch<'a>(pub &'a RawRecord);

impl<'a> RawLaunch<'a> {
    pub fn id(&self) -> Field<&'a str> {
        self.0.str("id")
    }

    pub fn cores(&self) -> Field<&'a [Value]> {
        self.0.array("cores")
    }

    pub fn rocket(&self) -> Field<&'a str> {
        self.0.str("rocket")
    }

    /// The `core` id of the first entry in `cores`
    pub fn first_core_id(&self) -> Field<&'a str> {
        self.cores().and_then(|cores| match cores.first() {
            None => Field::Missing,
            Some(first) => RawRecord::nested_str(first, "core"),
        })
    }

    pub fn date_utc(&self) -> Field<&'a str> {
        self.0.str("date_utc")
    }

    pub fn flight_number(&self) -> Field<i64> {
        self.0.int("flight_number")
    }

    pub fn success(&self) -> Field<bool> {
        self.0.bool("success")
    }
}
