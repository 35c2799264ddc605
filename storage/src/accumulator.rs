//! Row accumulator: collects a query's rows into a `Vec<Record>` as they stream in.
//!
//! The row count is unknown until the query completes, so rows are appended one by one.
//! An error anywhere in the stream discards everything collected so far.

use futures::{Stream, TryStreamExt};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::models::Record;

#[derive(Debug, Default)]
pub struct RowAccumulator {
    records: Vec<Record>,
}

impl RowAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains `rows`; fails on the first engine or decode error.
    pub async fn collect<S>(mut rows: S) -> Result<Self, sqlx::Error>
    where
        S: Stream<Item = Result<SqliteRow, sqlx::Error>> + Unpin,
    {
        let mut acc = Self::new();
        while let Some(row) = rows.try_next().await? {
            acc.push_row(&row)?;
        }
        Ok(acc)
    }

    /// Copies the four columns of `row` into a new slot.
    pub fn push_row(&mut self, row: &SqliteRow) -> Result<(), sqlx::Error> {
        let record = Record {
            message: row.try_get("message")?,
            category: column_i64(row, "category")?,
            created_at: row.try_get("created_at")?,
            id: column_i64(row, "id")?,
        };
        self.records.push(record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the rows in delivery order together with their count.
    pub fn finish(self) -> (Vec<Record>, usize) {
        let count = self.records.len();
        (self.records, count)
    }
}

/// Reads an integer column stored either natively or as decimal text.
fn column_i64(row: &SqliteRow, column: &str) -> Result<i64, sqlx::Error> {
    match row.try_get::<i64, _>(column) {
        Ok(value) => Ok(value),
        Err(sqlx::Error::ColumnDecode { .. }) => {
            let text: String = row.try_get(column)?;
            text.trim()
                .parse::<i64>()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: column.to_string(),
                    source: Box::new(e),
                })
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use sqlx::{Connection, SqliteConnection};

    async fn rows(sql: &str) -> Vec<SqliteRow> {
        let mut conn = SqliteConnection::connect("sqlite::memory:")
            .await
            .expect("connect");
        let rows = sqlx::query(sql).fetch_all(&mut conn).await.expect("query");
        conn.close().await.expect("close");
        rows
    }

    #[tokio::test]
    async fn test_collect_appends_in_delivery_order() {
        let rows = rows(
            "SELECT 'b' AS message, 2 AS category, '2024-01-01 10-00' AS created_at, 2 AS id \
             UNION ALL \
             SELECT 'a', 1, '2024-01-01 09-00', 1",
        )
        .await;

        let acc = RowAccumulator::collect(stream::iter(rows.into_iter().map(Ok)))
            .await
            .expect("collect");
        let (records, count) = acc.finish();

        assert_eq!(count, 2);
        assert_eq!(records[0].id, 2);
        assert_eq!(records[0].message, "b");
        assert_eq!(records[1].id, 1);
        assert_eq!(records[1].created_at, "2024-01-01 09-00");
    }

    #[tokio::test]
    async fn test_text_encoded_integers_are_parsed() {
        let rows = rows(
            "SELECT 'hi' AS message, '7' AS category, '2024-01-01 10-00' AS created_at, ' 42' AS id",
        )
        .await;

        let mut acc = RowAccumulator::new();
        acc.push_row(&rows[0]).expect("push");

        let (records, _) = acc.finish();
        assert_eq!(records[0].category, 7);
        assert_eq!(records[0].id, 42);
    }

    #[tokio::test]
    async fn test_non_numeric_integer_column_is_rejected() {
        let rows = rows(
            "SELECT 'hi' AS message, 'seven' AS category, '2024-01-01 10-00' AS created_at, 1 AS id",
        )
        .await;

        let mut acc = RowAccumulator::new();
        let err = acc.push_row(&rows[0]).unwrap_err();

        assert!(matches!(err, sqlx::Error::ColumnDecode { .. }));
        assert!(acc.is_empty());
    }

    #[tokio::test]
    async fn test_empty_stream_yields_empty_sequence() {
        let acc = RowAccumulator::collect(stream::iter(Vec::<Result<SqliteRow, sqlx::Error>>::new()))
            .await
            .expect("collect");

        assert_eq!(acc.len(), 0);
        let (records, count) = acc.finish();
        assert!(records.is_empty());
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_error_mid_stream_discards_partial_rows() {
        let mut items: Vec<Result<SqliteRow, sqlx::Error>> = rows(
            "SELECT 'a' AS message, 1 AS category, '2024-01-01 09-00' AS created_at, 1 AS id",
        )
        .await
        .into_iter()
        .map(Ok)
        .collect();
        items.push(Err(sqlx::Error::Protocol("stream interrupted".to_string())));

        let result = RowAccumulator::collect(stream::iter(items)).await;

        assert!(matches!(result, Err(sqlx::Error::Protocol(_))));
    }
}
