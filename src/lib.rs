mod error;
mod stream;

pub mod prelude;
pub mod sqlite;

pub use error::{RowStreamError, StepFailure};
pub use stream::{RowSource, RowStream, StepOutcome};

pub use sqlite::{
    ColumnType, Connection, PreparedStatement, SqlRow, SqlValue, StatementRows, Transaction,
};
