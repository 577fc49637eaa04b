//! Row collection helpers shared by the repositories.

use crate::error::DatabaseError;

/// Drain `rows`, converting each with `parse`.
///
/// # Errors
///
/// Returns the first row-read or parse failure.
pub async fn collect_rows<T>(
    mut rows: libsql::Rows,
    parse: fn(&libsql::Row) -> Result<T, DatabaseError>,
) -> Result<Vec<T>, DatabaseError> {
    let mut out = Vec::new();
    while let Some(row) = rows.next().await? {
        out.push(parse(&row)?);
    }
    Ok(out)
}

/// Read the first row of `rows`, or `DatabaseError::NoResult`.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` on an empty result set, or the parse failure.
pub async fn first_row<T>(
    mut rows: libsql::Rows,
    parse: fn(&libsql::Row) -> Result<T, DatabaseError>,
) -> Result<T, DatabaseError> {
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    parse(&row)
}

/// Read the single `INTEGER` column of every row.
///
/// # Errors
///
/// Returns `DatabaseError` if a row cannot be read.
pub async fn collect_ids(rows: libsql::Rows) -> Result<Vec<i64>, DatabaseError> {
    collect_rows(rows, |row| Ok(row.get::<i64>(0)?)).await
}
