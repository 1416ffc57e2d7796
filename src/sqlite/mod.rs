// SQLite collaborator layer - everything that touches rusqlite directly:
// - connection: open/close and statement compilation
// - statement: positional binding, DML execution, and the stepping cursor
// - row: owned row snapshots and the typed value-accessor contract
// - transaction: scoped BEGIN/COMMIT/ROLLBACK guard

pub mod connection;
pub mod row;
pub mod statement;
pub mod transaction;

pub use connection::Connection;
pub use row::{ColumnType, SqlRow, SqlValue};
pub use statement::{PreparedStatement, StatementRows};
pub use transaction::Transaction;
