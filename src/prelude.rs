//! Convenience re-exports for the common case.

pub use crate::error::{RowStreamError, StepFailure};
pub use crate::sqlite::{
    ColumnType, Connection, PreparedStatement, SqlRow, SqlValue, StatementRows, Transaction,
};
pub use crate::stream::{RowSource, RowStream, StepOutcome};
