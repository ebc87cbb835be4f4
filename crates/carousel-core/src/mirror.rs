//! Shared read-only view of the latest position
//!
//! Document-level listeners are attached once per gesture and outlive many
//! state changes. They read the position through this cell instead of
//! borrowing the engine, which may already be mutably borrowed by the
//! handler that is currently running.

use std::cell::Cell;
use std::rc::Rc;

/// Snapshot of the position published after every change
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MirroredPosition {
    /// Index into the working sequence
    pub position: usize,
    /// 0-based index of the displayed real slide
    pub real_index: usize,
    /// Number of real slides
    pub len: usize,
}

/// Cloneable handle to the mirrored position. Only the engine writes it.
#[derive(Clone, Debug, Default)]
pub struct PositionMirror {
    cell: Rc<Cell<MirroredPosition>>,
}

impl PositionMirror {
    /// Latest published position
    #[inline]
    pub fn get(&self) -> MirroredPosition {
        self.cell.get()
    }

    pub(crate) fn publish(&self, value: MirroredPosition) {
        self.cell.set(value);
    }
}
