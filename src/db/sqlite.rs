use crate::db::models::{Quote, QuoteDraft};
use crate::db::schema::SQLITE_INIT;
use crate::error::QuoteError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

const QUOTE_COLUMNS: &str = "id, text, source, background_image_url";

/// Handle over the `quotes` table. Cheap to clone; all clones share one pool.
#[derive(Clone)]
pub struct QuoteStore {
    pool: SqlitePool,
}

impl QuoteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url` and make sure the schema exists.
    ///
    /// File databases are created if missing. In-memory databases live only as
    /// long as their connection, so they get exactly one connection that is
    /// never recycled.
    pub async fn connect(database_url: &str) -> Result<Self, QuoteError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(connect_opts)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(connect_opts)
                .await?
        };
        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), QuoteError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), QuoteError> {
        let _: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    /// All quotes in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Quote>, QuoteError> {
        let quotes = sqlx::query_as::<_, Quote>(&format!(
            "SELECT {QUOTE_COLUMNS} FROM quotes ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(quotes)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Quote, QuoteError> {
        sqlx::query_as::<_, Quote>(&format!("SELECT {QUOTE_COLUMNS} FROM quotes WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(QuoteError::NotFound(id))
    }

    pub async fn count(&self) -> Result<i64, QuoteError> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quotes")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }

    /// Insert a new row and return it with its assigned id.
    pub async fn create(&self, draft: &QuoteDraft) -> Result<Quote, QuoteError> {
        let quote = sqlx::query_as::<_, Quote>(&format!(
            "INSERT INTO quotes (text, source, background_image_url) VALUES (?, ?, ?) \
             RETURNING {QUOTE_COLUMNS}"
        ))
        .bind(draft.text())
        .bind(draft.source())
        .bind(draft.background_image_url())
        .fetch_one(&self.pool)
        .await?;
        debug!(id = quote.id, "quote created");
        Ok(quote)
    }

    /// Overwrite every mutable field of quote `id`.
    pub async fn update(&self, id: i64, draft: &QuoteDraft) -> Result<Quote, QuoteError> {
        sqlx::query_as::<_, Quote>(&format!(
            "UPDATE quotes SET text = ?, source = ?, background_image_url = ? \
             WHERE id = ? RETURNING {QUOTE_COLUMNS}"
        ))
        .bind(draft.text())
        .bind(draft.source())
        .bind(draft.background_image_url())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(QuoteError::NotFound(id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), QuoteError> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(QuoteError::NotFound(id));
        }
        debug!(id, "quote deleted");
        Ok(())
    }

    /// Insert `samples` in one transaction if, and only if, the table is
    /// empty. Returns the number of rows inserted.
    pub async fn seed_if_empty(&self, samples: &[QuoteDraft]) -> Result<usize, QuoteError> {
        let mut tx = self.pool.begin().await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quotes")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            debug!(existing, "store not empty; skipping seed");
            return Ok(0);
        }

        for draft in samples {
            sqlx::query("INSERT INTO quotes (text, source, background_image_url) VALUES (?, ?, ?)")
                .bind(draft.text())
                .bind(draft.source())
                .bind(draft.background_image_url())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        info!(count = samples.len(), "seeded empty store with sample quotes");
        Ok(samples.len())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
