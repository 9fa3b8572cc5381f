//! One-value-per-call view over a batch-producing engine.

/// Values produced per refill
pub const BATCH: usize = 16;

/// An engine that produces [`BATCH`] values per operation.
pub trait BatchSource {
    fn fill(&mut self, out: &mut [u32; BATCH]);
}

/// Buffer of one batch plus a cursor into it.
///
/// A cursor of `0` (fresh) or [`BATCH`] (drained) triggers a refill of the
/// whole buffer; the first slot is returned and the cursor moves to `1`.
/// Every slot is handed out exactly once, so exactly one refill happens per
/// [`BATCH`] calls.
pub struct BatchBuffer<S> {
    source: S,
    buf: [u32; BATCH],
    cursor: usize,
}

impl<S: BatchSource> BatchBuffer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            buf: [0; BATCH],
            cursor: 0,
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.cursor == 0 || self.cursor == BATCH {
            self.source.fill(&mut self.buf);
            self.cursor = 1;
            return self.buf[0];
        }
        let value = self.buf[self.cursor];
        self.cursor += 1;
        value
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
