// Generic lazy-sequence core.
//
// RowStream adapts a step-based cursor (each call advances one position and
// either produces a row or reports completion) into a pull-style
// done()/value() sequence. The producer is only ever resumed from done(), it
// runs at most one row ahead of the consumer, and its cursor is released
// exactly once, whether the stream is drained or dropped early.

use crate::error::{RowStreamError, StepFailure};

/// Outcome of advancing a row source by one position.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome<T> {
    /// The cursor advanced and produced a row.
    Row(T),
    /// The cursor is exhausted. Terminal.
    Done,
    /// The stepping engine reported a failure. Terminal, like `Done`.
    Error(StepFailure),
}

/// A stateful cursor that produces one row per `step` call.
///
/// `Ready → (step → Row)* → (step → Done | Error) → Finalized`; nothing
/// leaves `Finalized`.
pub trait RowSource {
    type Row;

    /// Advance the cursor by exactly one position.
    ///
    /// `Done` and `Error` are terminal outcomes: the source must release the
    /// underlying cursor before returning them, and callers must not step
    /// the source again afterwards.
    fn step(&mut self) -> StepOutcome<Self::Row>;

    /// Release the underlying cursor. Idempotent; only the first call has
    /// an effect.
    fn finalize(&mut self);
}

/// Single-use, single-consumer lazy sequence over a [`RowSource`].
///
/// Construction resumes the producer once, so the first row (or completion)
/// is already computed before the consumer asks for anything. Each
/// subsequent resumption happens inside [`done`](RowStream::done). Dropping
/// the stream finalizes the source even when iteration stopped early.
pub struct RowStream<S: RowSource> {
    source: S,
    /// Most recently delivered row; stable until the next `done()`.
    current: Option<S::Row>,
    /// Row the producer has computed but the consumer has not accepted yet.
    pending: Option<S::Row>,
    /// The source reported `Done` or `Error`; it must not be stepped again.
    terminal: bool,
    /// `done()` has returned true.
    finished: bool,
    failure: Option<StepFailure>,
}

impl<S: RowSource> RowStream<S> {
    pub fn new(source: S) -> Self {
        let mut stream = RowStream {
            source,
            current: None,
            pending: None,
            terminal: false,
            finished: false,
            failure: None,
        };
        stream.resume();
        stream
    }

    /// Resume the producer for one step. Callers must check `terminal` first.
    fn resume(&mut self) {
        match self.source.step() {
            StepOutcome::Row(row) => self.pending = Some(row),
            StepOutcome::Done => self.terminal = true,
            StepOutcome::Error(failure) => {
                tracing::error!(
                    code = failure.code,
                    "row source step failed: {}",
                    failure.message
                );
                self.terminal = true;
                self.failure = Some(failure);
            }
        }
    }

    /// Advance the sequence.
    ///
    /// Returns `false` when a row became available for [`value`](Self::value),
    /// `true` once the sequence is exhausted (or hit a terminal step failure,
    /// see [`failure`](Self::failure)). Idempotent after returning `true`:
    /// further calls return `true` with no side effects.
    pub fn done(&mut self) -> bool {
        if self.finished {
            return true;
        }
        match self.pending.take() {
            Some(row) => {
                self.current = Some(row);
                if !self.terminal {
                    self.resume();
                }
                false
            }
            None => {
                self.finished = true;
                true
            }
        }
    }

    /// Read the current row without advancing.
    ///
    /// # Errors
    /// Returns `RowStreamError::InvalidState` unless the most recent
    /// [`done`](Self::done) call returned `false`.
    pub fn value(&self) -> Result<&S::Row, RowStreamError> {
        if self.finished {
            return Err(RowStreamError::InvalidState);
        }
        self.current.as_ref().ok_or(RowStreamError::InvalidState)
    }

    /// The step failure that ended the sequence, if it did not end cleanly.
    #[must_use]
    pub fn failure(&self) -> Option<&StepFailure> {
        self.failure.as_ref()
    }

    /// True once `done()` has reported exhaustion.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Advance-and-read in one call, yielding owned rows. Distinct from the
/// read-only [`value`](RowStream::value); a step failure ends iteration the
/// same way exhaustion does and is left in [`failure`](RowStream::failure).
impl<S: RowSource> Iterator for RowStream<S> {
    type Item = S::Row;

    fn next(&mut self) -> Option<S::Row> {
        if self.done() { None } else { self.current.take() }
    }
}

impl<S: RowSource> Drop for RowStream<S> {
    fn drop(&mut self) {
        self.source.finalize();
    }
}
