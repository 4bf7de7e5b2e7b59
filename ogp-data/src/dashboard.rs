//! Dashboard bookkeeping: the snapshot on screen, in-flight fetches and the
//! criteria used last.

use crate::generation::{RequestGenerations, Ticket};
use chrono::{DateTime, Utc};
use ogp_core::{FilterCriteria, ProductionData, ProductionSnapshot};

/// What a completed fetch did to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The snapshot was replaced with this many records.
    Replaced(usize),
    /// The fetch failed; the previous snapshot stays.
    Failed,
    /// A newer fetch was issued since; the response was dropped.
    Superseded,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub snapshot: ProductionSnapshot,
    pub loading: bool,
    pub last_filters: FilterCriteria,
    generations: RequestGenerations,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch for `filters`, superseding any fetch still in flight.
    pub fn begin(&mut self, filters: FilterCriteria) -> Ticket {
        self.last_filters = filters;
        self.loading = true;
        self.generations.issue()
    }

    /// Fold a finished fetch into the state.
    ///
    /// Only the latest ticket may touch the snapshot or clear `loading`.
    pub fn apply(
        &mut self,
        ticket: Ticket,
        outcome: anyhow::Result<Vec<ProductionData>>,
        now: DateTime<Utc>,
    ) -> Applied {
        if !self.generations.is_current(ticket) {
            log::debug!("Discarding superseded production response");
            return Applied::Superseded;
        }
        self.loading = false;
        match outcome {
            Ok(records) => {
                let count = records.len();
                log::info!("Loaded {} production records", count);
                self.snapshot = ProductionSnapshot::new(records, now);
                Applied::Replaced(count)
            }
            Err(e) => {
                log::error!("Error fetching production data: {}", e);
                Applied::Failed
            }
        }
    }
}
