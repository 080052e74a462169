//! Projection processor for feeding events to projections.

use domain::InventoryEvent;
use event_store::EventRecord;

use crate::Result;
use crate::projection::Projection;

/// Processes events from the log and delivers them to projections.
///
/// The processor supports:
/// - Catch-up: replays all events from the log to bring projections up to date
/// - Single event delivery: delivers a new event to all projections
/// - Rebuild: resets all projections and replays from scratch
pub struct ProjectionProcessor {
    projections: Vec<Box<dyn Projection>>,
}

impl ProjectionProcessor {
    /// Creates a new processor with no registered projections.
    pub fn new() -> Self {
        Self {
            projections: Vec::new(),
        }
    }

    /// Registers a projection with this processor.
    pub fn register(&mut self, projection: Box<dyn Projection>) {
        self.projections.push(projection);
    }

    /// Returns the number of registered projections.
    pub fn projection_count(&self) -> usize {
        self.projections.len()
    }

    /// Runs catch-up processing: walks all events in the log and delivers
    /// them to each projection that hasn't already seen them.
    #[tracing::instrument(skip_all)]
    pub fn run_catch_up(&self, records: &[EventRecord<InventoryEvent>]) -> Result<()> {
        let mut event_index: u64 = 0;

        for record in records {
            event_index += 1;

            for projection in &self.projections {
                if projection.position().events_processed < event_index {
                    projection.project(record)?;
                    metrics::counter!("projections_events_processed").increment(1);
                }
            }
        }

        tracing::info!(events_processed = event_index, "catch-up complete");

        Ok(())
    }

    /// Delivers a single event to all registered projections.
    #[tracing::instrument(skip_all, fields(event_type = %record.event_type()))]
    pub fn process_event(&self, record: &EventRecord<InventoryEvent>) -> Result<()> {
        for projection in &self.projections {
            projection.project(record)?;
        }
        Ok(())
    }

    /// Resets all projections and replays all events from the log.
    #[tracing::instrument(skip_all)]
    pub fn rebuild_all(&self, records: &[EventRecord<InventoryEvent>]) -> Result<()> {
        for projection in &self.projections {
            projection.reset()?;
        }
        self.run_catch_up(records)
    }
}

impl Default for ProjectionProcessor {
    fn default() -> Self {
        Self::new()
    }
}
