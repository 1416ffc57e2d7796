use thiserror::Error;

/// A non-success, non-exhaustion status reported by the stepping engine.
///
/// Carries the SQLite extended result code and the engine's message. A step
/// failure is terminal for the cursor that produced it; the row source
/// finalizes before surfacing one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("step failed with code {code}: {message}")]
pub struct StepFailure {
    pub code: i32,
    pub message: String,
}

impl StepFailure {
    pub(crate) fn from_sqlite(err: &rusqlite::Error) -> Self {
        let code = match err {
            rusqlite::Error::SqliteFailure(inner, _) => inner.extended_code,
            _ => -1,
        };
        StepFailure {
            code,
            message: err.to_string(),
        }
    }
}

/// Errors surfaced by this crate.
#[derive(Debug, Error)]
pub enum RowStreamError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Step(#[from] StepFailure),

    /// The `done()`-before-`value()` protocol was violated: no row is
    /// currently available to read.
    #[error("no row available; call done() and check that it returned false")]
    InvalidState,

    /// Operation attempted on a cursor that has already been finalized.
    #[error("cursor already finalized")]
    ResourceAlreadyReleased,
}
