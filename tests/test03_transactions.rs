use rowstream::{Connection, RowStreamError, SqlValue};

fn fresh_connection() -> Result<Connection, RowStreamError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("CREATE TABLE entries (id INTEGER PRIMARY KEY, val TEXT NOT NULL)")?;
    Ok(conn)
}

fn count_entries(conn: &Connection) -> Result<i64, RowStreamError> {
    let mut stmt = conn.prepare("SELECT COUNT(*) FROM entries")?;
    let mut stream = stmt.query();
    assert!(!stream.done());
    let count = stream.value()?.value_int64(0);
    Ok(count)
}

fn insert_entries(conn: &Connection, ids: std::ops::Range<i64>) -> Result<(), RowStreamError> {
    let mut stmt = conn.prepare("INSERT INTO entries (id, val) VALUES (?1, ?2)")?;
    for id in ids {
        stmt.reset();
        stmt.bind_all(&[SqlValue::Int(id), SqlValue::Text(format!("val-{id}"))])?;
        stmt.execute()?;
    }
    Ok(())
}

#[test]
fn committed_inserts_are_visible() -> Result<(), RowStreamError> {
    let conn = fresh_connection()?;

    let tx = conn.transaction()?;
    insert_entries(&conn, 1..101)?;
    tx.commit()?;

    assert_eq!(count_entries(&conn)?, 100);
    Ok(())
}

#[test]
fn explicit_rollback_discards_inserts() -> Result<(), RowStreamError> {
    let conn = fresh_connection()?;

    let tx = conn.transaction()?;
    insert_entries(&conn, 1..11)?;
    tx.rollback()?;

    assert_eq!(count_entries(&conn)?, 0);
    Ok(())
}

#[test]
fn dropped_transaction_rolls_back() -> Result<(), RowStreamError> {
    let conn = fresh_connection()?;

    {
        let _tx = conn.transaction()?;
        insert_entries(&conn, 1..11)?;
        // Guard dropped without commit.
    }

    assert_eq!(count_entries(&conn)?, 0);
    Ok(())
}

#[test]
fn connection_usable_after_rollback() -> Result<(), RowStreamError> {
    let conn = fresh_connection()?;

    {
        let _tx = conn.transaction()?;
        insert_entries(&conn, 1..6)?;
    }

    let tx = conn.transaction()?;
    insert_entries(&conn, 10..16)?;
    tx.commit()?;

    assert_eq!(count_entries(&conn)?, 6);

    let mut stmt = conn.prepare("SELECT MIN(id), MAX(id) FROM entries")?;
    let mut stream = stmt.query();
    assert!(!stream.done());
    let row = stream.value()?;
    assert_eq!(row.value_int64(0), 10);
    assert_eq!(row.value_int64(1), 15);
    Ok(())
}
