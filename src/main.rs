use anyhow::{Context, Result};
use mission_logistics_db::{
    cli::{Cli, Commands},
    config::resolve_database_path,
    fetch::SpacexClient,
    ingest::run_ingestion,
    schema::ALL_TABLES,
    server, Store,
};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse_args();

    match cli.command {
        Commands::Ingest {
            db,
            api_base,
            fresh,
        } => {
            let start = Instant::now();
            let store = Store::new(resolve_database_path(db.database)?);

            if fresh {
                store.reset().context("Failed to remove existing database")?;
            }

            let client = SpacexClient::new(api_base)?;
            let report = run_ingestion(&client, &store).context("Ingestion failed")?;

            println!("\n{report}");
            println!(
                "Populated {:?} ({} records) in {:.1}s",
                store.path(),
                report.total_added(),
                start.elapsed().as_secs_f64()
            );
        }

        Commands::Serve { db, bind } => {
            let store = Store::new(resolve_database_path(db.database)?);
            let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
            runtime
                .block_on(server::serve(store, bind))
                .context("Server stopped")?;
        }

        Commands::InitDb { db } => {
            let store = Store::new(resolve_database_path(db.database)?);
            store.create_tables().context("Failed to create tables")?;
            println!("Database file created at: {:?}", store.path());
        }

        Commands::ListTables => {
            println!("Tables:\n");
            for table in ALL_TABLES {
                println!("  {} ({})", table.name, table.column_names().join(", "));
            }
        }
    }

    Ok(())
}
