//! Stylus samples to content-space brush-stroke updates.
//!
//! Every buffered historical sub-sample is replayed, oldest first, before the
//! current sample. Samples are only forwarded inside an open stroke session
//! (`begin` on stylus down, `end` on stylus up).

use super::coords::map_to_content_space;
use super::event::{PointerAction, PointerBatch};
use crate::types::{Point, TransformState};
use tracing::{trace, warn};

/// Receiver of brush-stroke calls, normally the drawing engine instance.
pub trait StrokeSink {
    fn begin_stroke(&self);
    fn update_stroke(&self, x: f32, y: f32, pressure: f32);
    fn end_stroke(&self);
}

/// A stylus sample in content space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSample {
    pub position: Point,
    pub pressure: f32,
}

/// Whether a begin/end pair is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeSession {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Default)]
pub struct StrokeCoordinateMapper {
    session: StrokeSession,
}

impl StrokeCoordinateMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> StrokeSession {
        self.session
    }

    pub fn is_stroking(&self) -> bool {
        self.session == StrokeSession::Open
    }

    /// Process one stylus batch. Returns the number of samples forwarded.
    pub fn handle(
        &mut self,
        batch: &PointerBatch,
        transform: &TransformState,
        sink: &dyn StrokeSink,
    ) -> usize {
        match batch.action {
            PointerAction::Hover => return 0,
            PointerAction::Cancel => {
                self.finish(sink);
                return 0;
            }
            PointerAction::Down => {
                if self.is_stroking() {
                    warn!("Stylus down while a stroke is open, closing it first");
                    sink.end_stroke();
                }
                sink.begin_stroke();
                self.session = StrokeSession::Open;
            }
            _ => {}
        }

        if !self.is_stroking() {
            trace!(
                samples = batch.history.len() + 1,
                action = ?batch.action,
                "Dropping stylus samples outside a stroke"
            );
            return 0;
        }

        let samples = map_batch(batch, transform);
        for sample in &samples {
            sink.update_stroke(sample.position.x, sample.position.y, sample.pressure);
        }

        if batch.action == PointerAction::Up {
            self.finish(sink);
        }

        samples.len()
    }

    /// Close an open stroke session. Returns true if one was open.
    pub fn finish(&mut self, sink: &dyn StrokeSink) -> bool {
        if !self.is_stroking() {
            return false;
        }
        sink.end_stroke();
        self.session = StrokeSession::Closed;
        true
    }
}

/// Map every primary-pointer sample of `batch` into content space, in order.
pub fn map_batch(batch: &PointerBatch, transform: &TransformState) -> Vec<StrokeSample> {
    batch
        .primary_samples()
        .map(|s| StrokeSample {
            position: map_to_content_space(s.position, transform),
            pressure: s.pressure,
        })
        .collect()
}
