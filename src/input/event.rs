//! Raw pointer batches as delivered by the window system.
//!
//! A batch carries every pointer that is down at the time of the event,
//! including the one that is lifting on a `PointerUp`. Only the primary
//! pointer carries buffered historical sub-samples.

use crate::types::{Point, point};

/// Kind of tool that produced a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolType {
    #[default]
    Finger,
    Stylus,
    Mouse,
    Unknown,
}

/// Masked action of a pointer batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// First pointer touched down
    Down,
    /// One or more pointers moved
    Move,
    /// Last pointer lifted
    Up,
    /// An additional pointer touched down (`action_index` names it)
    PointerDown,
    /// A non-last pointer lifted (`action_index` names it)
    PointerUp,
    /// Stylus hovering without contact
    Hover,
    /// The gesture was aborted by the system
    Cancel,
}

/// One pointer at the time of the batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Point,
    pub pressure: f32,
    pub tool: ToolType,
}

impl PointerSample {
    pub fn finger(x: f32, y: f32) -> Self {
        Self {
            position: point(x, y),
            pressure: 1.0,
            tool: ToolType::Finger,
        }
    }

    pub fn stylus(x: f32, y: f32, pressure: f32) -> Self {
        Self {
            position: point(x, y),
            pressure,
            tool: ToolType::Stylus,
        }
    }
}

/// A buffered sub-sample of the primary pointer, generated between dispatch ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalSample {
    pub position: Point,
    pub pressure: f32,
}

/// A batch of simultaneous pointer samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerBatch {
    pub action: PointerAction,
    /// Index into `pointers` of the pointer that triggered a
    /// `PointerDown`/`PointerUp`; 0 otherwise
    pub action_index: usize,
    pub pointers: Vec<PointerSample>,
    /// Oldest first; the final current sample is `pointers[0]`
    pub history: Vec<HistoricalSample>,
}

impl PointerBatch {
    pub fn new(action: PointerAction, pointers: Vec<PointerSample>) -> Self {
        Self {
            action,
            action_index: 0,
            pointers,
            history: Vec::new(),
        }
    }

    /// Batch with a single pointer.
    pub fn single(action: PointerAction, sample: PointerSample) -> Self {
        Self::new(action, vec![sample])
    }

    pub fn with_action_index(mut self, index: usize) -> Self {
        self.action_index = index;
        self
    }

    pub fn with_history(mut self, history: Vec<HistoricalSample>) -> Self {
        self.history = history;
        self
    }

    #[inline]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn primary(&self) -> Option<&PointerSample> {
        self.pointers.first()
    }

    /// True when exactly one pointer is present and it is a stylus.
    pub fn is_single_stylus(&self) -> bool {
        self.pointers.len() == 1 && self.pointers[0].tool == ToolType::Stylus
    }

    /// Primary-pointer samples in delivery order: history oldest first, then
    /// the current sample.
    pub fn primary_samples(&self) -> impl Iterator<Item = HistoricalSample> + '_ {
        let current = self.primary().map(|p| HistoricalSample {
            position: p.position,
            pressure: p.pressure,
        });
        self.history.iter().copied().chain(current)
    }
}
