//! Table definitions for the launch telemetry store
//!
//! Column names keep the camelCase spelling the dashboard already reads.

use super::types::*;

pub static ROCKETS: TableSchema = TableSchema {
    name: "rockets",
    columns: &[
        Column::key("id"),
        Column::new("active", ColumnType::Boolean),
        Column::new("stages", ColumnType::Integer),
        Column::new("successRate", ColumnType::Integer),
        Column::new("costPerLaunch", ColumnType::Real),
        Column::new("diameter", ColumnType::Real),
        Column::new("mass", ColumnType::Real),
    ],
    foreign_keys: &[],
};

pub static CORES: TableSchema = TableSchema {
    name: "cores",
    columns: &[
        Column::key("id"),
        Column::new("block", ColumnType::Integer),
        Column::new("status", ColumnType::Text),
        Column::new("reuseCount", ColumnType::Integer),
        Column::new("rtlsLandings", ColumnType::Integer),
        Column::new("asdsLandings", ColumnType::Integer),
    ],
    foreign_keys: &[],
};

pub static LAUNCHES: TableSchema = TableSchema {
    name: "launches",
    columns: &[
        Column::key("id"),
        Column::new("rocketID", ColumnType::Text),
        Column::new("coreID", ColumnType::Text),
        Column::new("launchDate", ColumnType::Timestamp),
        Column::new("flightNumber", ColumnType::Integer),
        Column::new("launchSuccess", ColumnType::Boolean),
    ],
    foreign_keys: &[
        ForeignKey::new("rocketID", "rockets"),
        ForeignKey::new("coreID", "cores"),
    ],
};

/// All tables, parents before children
pub static ALL_TABLES: &[&TableSchema] = &[&ROCKETS, &CORES, &LAUNCHES];

pub fn get_table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES.iter().copied().find(|t| t.name == name)
}

pub fn table_names() -> Vec<&'static str> {
    ALL_TABLES.iter().map(|t| t.name).collect()
}
