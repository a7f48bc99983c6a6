use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::config::DEFAULT_BIND;
use crate::fetch::DEFAULT_API_BASE;

#[derive(Parser, Debug)]
#[command(name = "mission-logistics-db")]
#[command(version, about = "SpaceX launch telemetry in SQLite, with a read-only query API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// SQLite database path (default: mission-logistics.db in the user data directory)
    #[arg(short, long, env = "MISSION_DB_PATH")]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch rockets, cores and launches and load them into the database
    Ingest {
        #[command(flatten)]
        db: DatabaseArgs,

        /// Upstream API base URL
        #[arg(long, env = "MISSION_API_BASE", default_value = DEFAULT_API_BASE)]
        api_base: String,

        /// Delete an existing database before ingesting
        #[arg(short, long)]
        fresh: bool,
    },

    /// Serve the read-only query API
    Serve {
        #[command(flatten)]
        db: DatabaseArgs,

        /// Address to listen on
        #[arg(short, long, env = "MISSION_BIND", default_value = DEFAULT_BIND)]
        bind: SocketAddr,
    },

    /// Create the tables without loading any data
    InitDb {
        #[command(flatten)]
        db: DatabaseArgs,
    },

    /// List tables and their columns
    ListTables,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ingest_defaults() {
        let cli = Cli::try_parse_from(["mission-logistics-db", "ingest", "--fresh"]).unwrap();
        match cli.command {
            Commands::Ingest { api_base, fresh, .. } => {
                assert!(fresh);
                assert_eq!(api_base, DEFAULT_API_BASE);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_serve_bind() {
        let cli = Cli::try_parse_from([
            "mission-logistics-db",
            "serve",
            "--database",
            "x.db",
            "--bind",
            "0.0.0.0:9000",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve { db, bind } => {
                assert_eq!(db.database, Some(PathBuf::from("x.db")));
                assert_eq!(bind.port(), 9000);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
