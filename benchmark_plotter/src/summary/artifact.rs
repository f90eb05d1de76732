//!
//! A produced artifact and its fate.
//!

use std::path::PathBuf;

///
/// The artifact kind.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The four-panel overview chart.
    Overview,
    /// The chart restricted to the large inputs.
    LargeScale,
    /// The Markdown report.
    Report,
    /// The JSON analysis dump.
    Json,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overview => write!(f, "overview chart"),
            Self::LargeScale => write!(f, "large-scale chart"),
            Self::Report => write!(f, "report"),
            Self::Json => write!(f, "analysis JSON"),
        }
    }
}

///
/// The artifact fate.
///
#[derive(Debug)]
pub enum Status {
    /// The artifact has been written to the path.
    Written(PathBuf),
    /// There was nothing to produce.
    Skipped(String),
    /// The artifact could not be produced or written.
    Failed(anyhow::Error),
}

///
/// A produced artifact and its fate.
///
#[derive(Debug)]
pub struct Artifact {
    /// The artifact kind.
    pub kind: Kind,
    /// The artifact fate.
    pub status: Status,
}

impl Artifact {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(kind: Kind, status: Status) -> Self {
        Self { kind, status }
    }

    ///
    /// Whether the artifact has failed.
    ///
    pub fn is_failed(&self) -> bool {
        matches!(self.status, Status::Failed(_))
    }
}
