use crate::error::RowStreamError;

use super::connection::Connection;

/// Scoped transaction guard. `BEGIN` runs at construction; an open guard
/// rolls back on drop.
pub struct Transaction<'conn> {
    conn: &'conn Connection,
    open: bool,
}

impl<'conn> Transaction<'conn> {
    pub(crate) fn begin(conn: &'conn Connection) -> Result<Self, RowStreamError> {
        conn.execute_batch("BEGIN")?;
        Ok(Transaction { conn, open: true })
    }

    /// Commit the transaction, consuming the guard.
    ///
    /// # Errors
    /// Returns `RowStreamError::Sqlite` if `COMMIT` fails; the guard is
    /// consumed either way, so no drop-time rollback follows a failed commit.
    pub fn commit(mut self) -> Result<(), RowStreamError> {
        self.open = false;
        self.conn.execute_batch("COMMIT")
    }

    /// Roll back the transaction, consuming the guard.
    ///
    /// # Errors
    /// Returns `RowStreamError::Sqlite` if `ROLLBACK` fails.
    pub fn rollback(mut self) -> Result<(), RowStreamError> {
        self.open = false;
        self.conn.execute_batch("ROLLBACK")
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if self.open
            && let Err(e) = self.conn.execute_batch("ROLLBACK")
        {
            tracing::warn!("failed to roll back abandoned transaction: {e}");
        }
    }
}
