//! Boat-size changes.

use log::info;

use super::state::AssignmentState;
use crate::boat::athlete::AthleteId;

impl AssignmentState {
    /// Resizes the paddling rows to `rows`.
    ///
    /// Shrinking drops rows from the stern end and returns their occupants
    /// (both tiers), who are now in the pool. Growing appends empty rows.
    /// Surviving rows keep their order and occupants.
    pub fn resize_rows(&mut self, rows: usize) -> Vec<AthleteId> {
        let current = self.rows();
        if rows < current {
            let evicted = self.truncate_rows(rows);
            info!(
                "resized {} -> {} rows, {} evicted to pool",
                current,
                rows,
                evicted.len()
            );
            evicted
        } else {
            if rows > current {
                self.pad_rows(rows);
                info!("resized {} -> {} rows", current, rows);
            }
            Vec::new()
        }
    }
}
