use rusqlite::types::ValueRef;

/// A single SQLite value, used both for rows read back and for positional
/// parameter binding.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
}

/// Runtime type tag of a column in the current row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Null,
    Blob,
    Float,
    Int,
    Text,
}

impl SqlValue {
    #[must_use]
    pub fn column_type(&self) -> ColumnType {
        match self {
            SqlValue::Null => ColumnType::Null,
            SqlValue::Int(_) => ColumnType::Int,
            SqlValue::Float(_) => ColumnType::Float,
            SqlValue::Text(_) => ColumnType::Text,
            SqlValue::Blob(_) => ColumnType::Blob,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Int(i64::from(v))
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Int(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Float(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_owned())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Blob(v)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(v: &[u8]) -> Self {
        SqlValue::Blob(v.to_vec())
    }
}

/// Owned snapshot of one cursor position.
///
/// Values are copied out of the engine at step time, so a row stays readable
/// after the cursor has advanced past it or been finalized. Numeric accessors
/// coerce between integer and real the way `sqlite3_column_*` does;
/// non-matching types read as zero or empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlRow {
    values: Vec<SqlValue>,
}

impl SqlRow {
    pub(crate) fn read(row: &rusqlite::Row<'_>) -> Result<Self, rusqlite::Error> {
        let count = row.as_ref().column_count();
        let mut values = Vec::with_capacity(count);
        for idx in 0..count {
            let value = match row.get_ref(idx)? {
                ValueRef::Null => SqlValue::Null,
                ValueRef::Integer(v) => SqlValue::Int(v),
                ValueRef::Real(v) => SqlValue::Float(v),
                ValueRef::Text(bytes) => {
                    SqlValue::Text(String::from_utf8_lossy(bytes).into_owned())
                }
                ValueRef::Blob(bytes) => SqlValue::Blob(bytes.to_vec()),
            };
            values.push(value);
        }
        Ok(SqlRow { values })
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.values.len()
    }

    /// Type tag of the given column. Panics if `idx` is out of range.
    #[must_use]
    pub fn column_type(&self, idx: usize) -> ColumnType {
        self.values[idx].column_type()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&SqlValue> {
        self.values.get(idx)
    }

    #[must_use]
    pub fn value_int(&self, idx: usize) -> i32 {
        // Truncating, like sqlite3_column_int.
        self.value_int64(idx) as i32
    }

    #[must_use]
    pub fn value_int64(&self, idx: usize) -> i64 {
        match &self.values[idx] {
            SqlValue::Int(v) => *v,
            SqlValue::Float(v) => *v as i64,
            SqlValue::Text(s) => s.trim().parse().unwrap_or(0),
            SqlValue::Null | SqlValue::Blob(_) => 0,
        }
    }

    #[must_use]
    pub fn value_double(&self, idx: usize) -> f64 {
        match &self.values[idx] {
            SqlValue::Int(v) => *v as f64,
            SqlValue::Float(v) => *v,
            SqlValue::Text(s) => s.trim().parse().unwrap_or(0.0),
            SqlValue::Null | SqlValue::Blob(_) => 0.0,
        }
    }

    #[must_use]
    pub fn value_text(&self, idx: usize) -> &str {
        match &self.values[idx] {
            SqlValue::Text(s) => s.as_str(),
            _ => "",
        }
    }

    #[must_use]
    pub fn value_blob(&self, idx: usize) -> &[u8] {
        match &self.values[idx] {
            SqlValue::Blob(bytes) => bytes.as_slice(),
            _ => &[],
        }
    }
}
