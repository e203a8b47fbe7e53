//! Result of one pipeline run.

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Matching hrefs on the listing page (duplicates included).
    pub links_found: usize,
    /// Files kept as new content.
    pub stored: usize,
    /// Files removed because their checksum was already recorded.
    pub duplicates: usize,
}

/// A link that could not be processed under the `continue` policy.
#[derive(Debug)]
pub struct ItemFailure {
    pub href: String,
    pub error: anyhow::Error,
}

/// How a run ended. The caller logs and maps it to an exit code.
#[derive(Debug)]
pub enum RunOutcome {
    /// Every link was processed.
    Completed(RunSummary),
    /// Some links failed; the rest were processed.
    Partial {
        summary: RunSummary,
        failures: Vec<ItemFailure>,
    },
    /// The run stopped early: listing unavailable, output dir unusable, or
    /// an item failed under the `abort` policy.
    Aborted {
        summary: RunSummary,
        error: anyhow::Error,
    },
}

impl RunOutcome {
    pub fn summary(&self) -> &RunSummary {
        match self {
            RunOutcome::Completed(summary)
            | RunOutcome::Partial { summary, .. }
            | RunOutcome::Aborted { summary, .. } => summary,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }

    /// 0 = completed, 2 = partial, 1 = aborted.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Completed(_) => 0,
            RunOutcome::Partial { .. } => 2,
            RunOutcome::Aborted { .. } => 1,
        }
    }
}
