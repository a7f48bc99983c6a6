//! One-shot batch ingestion: fetch rockets, cores and launches, convert the
//! leading sample of each, and commit them kind by kind.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::fetch::{RecordSource, ResourceKind};
use crate::model::Launch;
use crate::parser::{convert_core, convert_launch, convert_rocket, RawRecord, SkipReason};
use crate::store::{Persist, Store};

/// Counts for one resource kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KindReport {
    /// Records returned upstream
    pub found: usize,
    /// Records within the ingestion cap
    pub considered: usize,
    pub added: usize,
    /// Skipped records by [`SkipReason::label`]
    pub skipped: BTreeMap<&'static str, usize>,
}

impl KindReport {
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    pub rockets: KindReport,
    pub cores: KindReport,
    pub launches: KindReport,
}

impl IngestReport {
    pub fn total_added(&self) -> usize {
        self.rockets.added + self.cores.added + self.launches.added
    }
}

impl fmt::Display for IngestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, report) in [
            (ResourceKind::Rockets, &self.rockets),
            (ResourceKind::Cores, &self.cores),
            (ResourceKind::Launches, &self.launches),
        ] {
            write!(
                f,
                "{kind}: {} found, {} considered, {} added",
                report.found, report.considered, report.added
            )?;
            if !report.skipped.is_empty() {
                let reasons: Vec<String> = report
                    .skipped
                    .iter()
                    .map(|(reason, n)| format!("{reason}: {n}"))
                    .collect();
                write!(f, " (skipped {})", reasons.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Fetch all three kinds from `source` and load them into an empty `store`.
///
/// Every kind is fetched before anything is written, so a transport failure
/// leaves the store untouched.
pub fn run_ingestion(source: &impl RecordSource, store: &Store) -> Result<IngestReport> {
    store.create_tables()?;
    if !store.is_empty()? {
        return Err(Error::StoreNotEmpty(store.path().to_path_buf()));
    }

    let rockets = source.fetch(ResourceKind::Rockets)?;
    let cores = source.fetch(ResourceKind::Cores)?;
    let launches = source.fetch(ResourceKind::Launches)?;

    for (kind, records) in [
        (ResourceKind::Rockets, &rockets),
        (ResourceKind::Cores, &cores),
        (ResourceKind::Launches, &launches),
    ] {
        info!("Found {} {kind}", records.len());
    }

    load(store, &rockets, &cores, &launches)
}

/// Convert and persist already-fetched records.
///
/// Rockets, cores and launches are committed separately in that order; a
/// failure stops the run and leaves earlier kinds in place. Launches that
/// name a rocket or core not stored by this run are skipped.
pub fn load(
    store: &Store,
    rockets: &[RawRecord],
    cores: &[RawRecord],
    launches: &[RawRecord],
) -> Result<IngestReport> {
    let (rocket_rows, rockets) = load_kind(store, ResourceKind::Rockets, rockets, convert_rocket)?;
    let (core_rows, cores) = load_kind(store, ResourceKind::Cores, cores, convert_core)?;

    let rocket_ids: HashSet<&str> = rocket_rows.iter().map(|r| r.id.as_str()).collect();
    let core_ids: HashSet<&str> = core_rows.iter().map(|c| c.id.as_str()).collect();
    let (_, launches) = load_kind(store, ResourceKind::Launches, launches, |record| {
        convert_launch(record).and_then(|launch| check_references(launch, &rocket_ids, &core_ids))
    })?;

    Ok(IngestReport {
        rockets,
        cores,
        launches,
    })
}

fn check_references(
    launch: Launch,
    rocket_ids: &HashSet<&str>,
    core_ids: &HashSet<&str>,
) -> std::result::Result<Launch, SkipReason> {
    if !rocket_ids.contains(launch.rocket_id.as_str()) {
        return Err(SkipReason::UnknownRocket(launch.rocket_id));
    }
    if !core_ids.contains(launch.core_id.as_str()) {
        return Err(SkipReason::UnknownCore(launch.core_id));
    }
    Ok(launch)
}

fn load_kind<T: Persist>(
    store: &Store,
    kind: ResourceKind,
    records: &[RawRecord],
    convert: impl Fn(&RawRecord) -> std::result::Result<T, SkipReason>,
) -> Result<(Vec<T>, KindReport)> {
    info!("Adding {kind} to database...");

    let (rows, mut report) = convert_capped(kind, records, convert);
    report.added = store.insert_all(&rows)?;

    info!("Added {} {kind}", report.added);
    if report.skipped_total() > 0 {
        info!("Skipped {} {kind}: {:?}", report.skipped_total(), report.skipped);
    }

    Ok((rows, report))
}

/// Convert the first `kind.cap()` records, tallying skips
pub fn convert_capped<T>(
    kind: ResourceKind,
    records: &[RawRecord],
    convert: impl Fn(&RawRecord) -> std::result::Result<T, SkipReason>,
) -> (Vec<T>, KindReport) {
    let sample = &records[..records.len().min(kind.cap())];
    let mut report = KindReport {
        found: records.len(),
        considered: sample.len(),
        ..Default::default()
    };

    let mut rows = Vec::with_capacity(sample.len());
    for (idx, record) in sample.iter().enumerate() {
        match convert(record) {
            Ok(row) => rows.push(row),
            Err(reason) => {
                debug!("Skipping {kind} record #{idx}: {reason}");
                *report.skipped.entry(reason.label()).or_default() += 1;
            }
        }
    }

    (rows, report)
}
