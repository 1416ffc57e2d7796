use std::path::Path;

use crate::error::RowStreamError;

use super::statement::PreparedStatement;
use super::transaction::Transaction;

/// Owned SQLite connection. Must outlive any statement prepared against it,
/// which the borrow on [`prepare`](Connection::prepare) enforces.
pub struct Connection {
    inner: rusqlite::Connection,
}

impl Connection {
    /// Open (creating if needed) a database file.
    ///
    /// # Errors
    /// Returns `RowStreamError::Sqlite` if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RowStreamError> {
        Ok(Connection {
            inner: rusqlite::Connection::open(path)?,
        })
    }

    /// Open a private in-memory database.
    ///
    /// # Errors
    /// Returns `RowStreamError::Sqlite` if the database cannot be opened.
    pub fn open_in_memory() -> Result<Self, RowStreamError> {
        Ok(Connection {
            inner: rusqlite::Connection::open_in_memory()?,
        })
    }

    /// Execute one or more statements that return no rows.
    ///
    /// # Errors
    /// Returns `RowStreamError::Sqlite` if any statement fails.
    pub fn execute_batch(&self, sql: &str) -> Result<(), RowStreamError> {
        self.inner.execute_batch(sql)?;
        Ok(())
    }

    /// Compile a query into a reusable prepared statement.
    ///
    /// # Errors
    /// Returns `RowStreamError::Sqlite` if compilation fails.
    pub fn prepare(&self, sql: &str) -> Result<PreparedStatement<'_>, RowStreamError> {
        Ok(PreparedStatement::new(self.inner.prepare(sql)?))
    }

    /// Begin a transaction that rolls back on drop unless committed.
    ///
    /// # Errors
    /// Returns `RowStreamError::Sqlite` if `BEGIN` fails.
    pub fn transaction(&self) -> Result<Transaction<'_>, RowStreamError> {
        Transaction::begin(self)
    }

    /// Rows changed by the most recent INSERT/UPDATE/DELETE.
    #[must_use]
    pub fn changes(&self) -> u64 {
        self.inner.changes()
    }

    #[must_use]
    pub fn last_insert_rowid(&self) -> i64 {
        self.inner.last_insert_rowid()
    }
}
