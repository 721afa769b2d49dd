//! Cross-thread frame handoff.
//!
//! Two buffers exist. The VIC owns the one it is drawing into; the other
//! sits in a mutex-guarded slot with a ready flag. At frame completion the
//! VIC swaps its buffer into the slot and raises the flag; a consumer
//! checks and clears the flag under the same lock. An unconsumed frame is
//! simply replaced by the next one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct ReadySlot {
    pixels: Vec<u32>,
    ready: bool,
    completed: u64,
}

#[derive(Debug)]
pub(crate) struct FrameExchange {
    slot: Mutex<ReadySlot>,
}

impl FrameExchange {
    pub(crate) fn new(len: usize) -> Arc<Self> {
        Arc::new(Self {
            slot: Mutex::new(ReadySlot {
                pixels: vec![0; len],
                ready: false,
                completed: 0,
            }),
        })
    }

    fn lock(&self) -> MutexGuard<'_, ReadySlot> {
        // Every critical section leaves the slot consistent, so a poisoned
        // lock still guards valid data.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Swap the finished frame into the slot and mark it ready. `active`
    /// gets the previous slot buffer back to draw into.
    pub(crate) fn publish(&self, active: &mut Vec<u32>) {
        let mut slot = self.lock();
        std::mem::swap(&mut slot.pixels, active);
        slot.ready = true;
        slot.completed += 1;
    }

    /// Drop any ready frame without reading it.
    pub(crate) fn discard(&self) {
        self.lock().ready = false;
    }
}

/// Consumer handle for completed frames. Cheap to clone and `Send`.
#[derive(Debug, Clone)]
pub struct FrameReader {
    exchange: Arc<FrameExchange>,
}

impl FrameReader {
    pub(crate) fn new(exchange: Arc<FrameExchange>) -> Self {
        Self { exchange }
    }

    /// Take the most recent completed frame, if one has completed since
    /// the last call.
    ///
    /// The returned buffer is row-major ARGB32, total width x total height.
    #[must_use]
    pub fn take_ready(&self) -> Option<Vec<u32>> {
        let mut slot = self.exchange.lock();
        if !slot.ready {
            return None;
        }
        slot.ready = false;
        Some(slot.pixels.clone())
    }

    /// True if a frame is waiting.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.exchange.lock().ready
    }

    /// Frames completed by the producer since construction.
    #[must_use]
    pub fn frames_completed(&self) -> u64 {
        self.exchange.lock().completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_ready_clears_flag() {
        let exchange = FrameExchange::new(4);
        let reader = FrameReader::new(Arc::clone(&exchange));
        assert_eq!(reader.take_ready(), None);

        let mut active = vec![7; 4];
        exchange.publish(&mut active);
        assert_eq!(active, vec![0; 4], "producer gets the idle buffer back");
        assert_eq!(reader.take_ready(), Some(vec![7; 4]));
        assert_eq!(reader.take_ready(), None);
        assert_eq!(reader.frames_completed(), 1);
    }

    #[test]
    fn newer_frame_replaces_unconsumed_one() {
        let exchange = FrameExchange::new(2);
        let reader = FrameReader::new(Arc::clone(&exchange));
        let mut active = vec![1; 2];
        exchange.publish(&mut active);
        active.fill(2);
        exchange.publish(&mut active);
        assert_eq!(reader.take_ready(), Some(vec![2; 2]));
        assert_eq!(reader.frames_completed(), 2);
    }

    #[test]
    fn reader_works_across_threads() {
        let exchange = FrameExchange::new(8);
        let reader = FrameReader::new(Arc::clone(&exchange));
        let producer = std::thread::spawn(move || {
            let mut active = vec![0xAB; 8];
            exchange.publish(&mut active);
        });
        producer.join().expect("producer thread panicked");
        assert_eq!(reader.take_ready(), Some(vec![0xAB; 8]));
    }

    #[test]
    fn discard_drops_pending_frame() {
        let exchange = FrameExchange::new(1);
        let reader = FrameReader::new(Arc::clone(&exchange));
        let mut active = vec![3];
        exchange.publish(&mut active);
        exchange.discard();
        assert!(!reader.is_ready());
    }
}
