use rusqlite::types::Null;

use crate::error::{RowStreamError, StepFailure};
use crate::stream::{RowSource, RowStream, StepOutcome};

use super::row::{SqlRow, SqlValue};

/// Compiled statement bound to its connection's lifetime.
///
/// Binding and [`reset`](PreparedStatement::reset) are only valid while the
/// statement is not mid-iteration; the `&mut` borrow taken by
/// [`rows`](PreparedStatement::rows) and [`query`](PreparedStatement::query)
/// enforces that. Dropping a cursor rewinds the statement, so the same
/// statement can be re-bound and re-run.
pub struct PreparedStatement<'conn> {
    stmt: rusqlite::Statement<'conn>,
}

impl<'conn> PreparedStatement<'conn> {
    pub(crate) fn new(stmt: rusqlite::Statement<'conn>) -> Self {
        PreparedStatement { stmt }
    }

    /// Bind one positional parameter. Indices are 1-based, as in SQLite.
    ///
    /// # Errors
    /// Returns `RowStreamError::Sqlite` if the index is out of range or the
    /// bind fails.
    pub fn bind(&mut self, index: usize, value: &SqlValue) -> Result<(), RowStreamError> {
        match value {
            SqlValue::Null => self.stmt.raw_bind_parameter(index, Null)?,
            SqlValue::Int(v) => self.stmt.raw_bind_parameter(index, v)?,
            SqlValue::Float(v) => self.stmt.raw_bind_parameter(index, v)?,
            SqlValue::Text(s) => self.stmt.raw_bind_parameter(index, s.as_str())?,
            SqlValue::Blob(b) => self.stmt.raw_bind_parameter(index, b.as_slice())?,
        }
        Ok(())
    }

    /// Bind parameters 1..=N from a slice.
    ///
    /// # Errors
    /// Returns `RowStreamError::Sqlite` if any bind fails.
    pub fn bind_all(&mut self, params: &[SqlValue]) -> Result<(), RowStreamError> {
        for (idx, value) in params.iter().enumerate() {
            self.bind(idx + 1, value)?;
        }
        Ok(())
    }

    /// Clear bindings so the statement can be reused with a fresh parameter
    /// set. The cursor position itself rewinds when the previous
    /// [`StatementRows`] is dropped.
    pub fn reset(&mut self) {
        self.stmt.clear_bindings();
    }

    /// Run a statement that returns no rows, yielding the number of rows
    /// changed.
    ///
    /// # Errors
    /// Returns `RowStreamError::Sqlite` if execution fails.
    pub fn execute(&mut self) -> Result<usize, RowStreamError> {
        Ok(self.stmt.raw_execute()?)
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.stmt.column_count()
    }

    /// Start the cursor and drive it directly via
    /// [`advance`](StatementRows::advance).
    pub fn rows(&mut self) -> StatementRows<'_> {
        StatementRows {
            rows: Some(self.stmt.raw_query()),
        }
    }

    /// Start the cursor wrapped in a lazy [`RowStream`].
    pub fn query(&mut self) -> RowStream<StatementRows<'_>> {
        RowStream::new(self.rows())
    }
}

/// Stepping cursor over a prepared statement.
///
/// `None` in `rows` marks the finalized state; finalizing drops the
/// underlying `rusqlite::Rows`, which resets the statement.
pub struct StatementRows<'stmt> {
    rows: Option<rusqlite::Rows<'stmt>>,
}

impl StatementRows<'_> {
    /// Advance the cursor and read the row it lands on, in one call.
    ///
    /// Returns `Ok(None)` on exhaustion, after which the cursor is finalized.
    ///
    /// # Errors
    /// Returns `RowStreamError::ResourceAlreadyReleased` once finalized, or
    /// `RowStreamError::Sqlite` if the step fails (also terminal).
    pub fn advance(&mut self) -> Result<Option<SqlRow>, RowStreamError> {
        let rows = self
            .rows
            .as_mut()
            .ok_or(RowStreamError::ResourceAlreadyReleased)?;
        let copied = match rows.next() {
            Ok(Some(row)) => match SqlRow::read(row) {
                Ok(copied) => return Ok(Some(copied)),
                Err(e) => Err(e),
            },
            Ok(None) => Ok(None),
            Err(e) => Err(e),
        };
        self.finalize();
        copied.map_err(RowStreamError::Sqlite)
    }
}

impl RowSource for StatementRows<'_> {
    type Row = SqlRow;

    fn step(&mut self) -> StepOutcome<SqlRow> {
        let Some(rows) = self.rows.as_mut() else {
            return StepOutcome::Done;
        };
        let outcome = match rows.next() {
            Ok(Some(row)) => match SqlRow::read(row) {
                Ok(copied) => return StepOutcome::Row(copied),
                Err(e) => StepOutcome::Error(StepFailure::from_sqlite(&e)),
            },
            Ok(None) => StepOutcome::Done,
            Err(e) => StepOutcome::Error(StepFailure::from_sqlite(&e)),
        };
        self.finalize();
        outcome
    }

    fn finalize(&mut self) {
        self.rows = None;
    }
}
