use std::fmt;

use crate::error::Result;
use crate::parser::RawRecord;

/// The three upstream collections ingestion reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Rockets,
    Cores,
    Launches,
}

impl ResourceKind {
    /// Order in which kinds are fetched and persisted
    pub const ALL: [ResourceKind; 3] = [Self::Rockets, Self::Cores, Self::Launches];

    /// Path segment below the upstream base URL
    pub fn path(self) -> &'static str {
        match self {
            Self::Rockets => "rockets",
            Self::Cores => "cores",
            Self::Launches => "launches",
        }
    }

    /// Number of leading upstream records considered during ingestion
    pub fn cap(self) -> usize {
        match self {
            Self::Rockets => 10,
            Self::Cores => 50,
            Self::Launches => 100,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Anything that can hand ingestion the raw records of one kind.
pub trait RecordSource {
    fn fetch(&self, kind: ResourceKind) -> Result<Vec<RawRecord>>;
}
