//! Outbound display notifications.

use sumgrid_engine::engine::CellRef;

/// Text shown for a formula that failed to evaluate.
pub const ERROR_DISPLAY: &str = "ERROR";

/// Receives every change to a cell's externally visible text.
///
/// The sink is borrowed for the duration of a single document call, so it
/// cannot start another edit while it is being notified.
pub trait DisplaySink {
    fn cell_display_changed(&mut self, cell_ref: &CellRef, text: &str);
}

impl<F> DisplaySink for F
where
    F: FnMut(&CellRef, &str),
{
    fn cell_display_changed(&mut self, cell_ref: &CellRef, text: &str) {
        self(cell_ref, text)
    }
}

/// Sink that keeps every notification in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub updates: Vec<(CellRef, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent text reported for `cell_ref`, if any.
    pub fn last_for(&self, cell_ref: &CellRef) -> Option<&str> {
        self.updates
            .iter()
            .rev()
            .find(|(r, _)| r == cell_ref)
            .map(|(_, text)| text.as_str())
    }
}

impl DisplaySink for RecordingSink {
    fn cell_display_changed(&mut self, cell_ref: &CellRef, text: &str) {
        self.updates.push((*cell_ref, text.to_string()));
    }
}
