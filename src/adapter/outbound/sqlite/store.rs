//! SQLite hardware store implementation.
//!
//! Every operation is a single statement against the database; nothing is
//! cached in memory.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sql_types::Text;
use tracing::{info, warn};

use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations, DbPool};
use crate::adapter::outbound::sqlite::database::model::HardwareRow;
use crate::adapter::outbound::sqlite::database::schema::computer_hardware;
use crate::domain::HardwareRecord;
use crate::error::{PersistenceError, Result};
use crate::port::PersistenceAdapter;

// SQLite's built-in lower() folds ASCII letters only, matching
// `HardwareRecord::matches_model`.
diesel::define_sql_function! {
    fn lower(x: Text) -> Text;
}

type SqlitePooled = PooledConnection<ConnectionManager<SqliteConnection>>;

/// SQLite-backed hardware store.
pub struct SqliteAdapter {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteAdapter {
    /// Open the database at `database_url`, creating the table if needed.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open(database_url: &str) -> Result<Self> {
        let pool = create_pool(database_url)?;
        run_migrations(&pool)?;
        info!(database = database_url, "opened sqlite inventory");
        Ok(Self::new(pool))
    }

    /// Create a store over an already migrated pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<SqlitePooled> {
        let conn = self
            .pool
            .get()
            .map_err(|e| PersistenceError::Connection(e.to_string()))?;
        Ok(conn)
    }
}

fn db_err(e: diesel::result::Error) -> PersistenceError {
    PersistenceError::Database(e.to_string())
}

impl PersistenceAdapter for SqliteAdapter {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn get(&self, model: &str) -> Result<Option<HardwareRecord>> {
        let mut conn = self.conn()?;

        let row: Option<HardwareRow> = computer_hardware::table
            .find(model)
            .select(HardwareRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(db_err)?;

        Ok(row.map(HardwareRecord::from))
    }

    fn find_ignore_case(&self, query: &str) -> Result<Option<HardwareRecord>> {
        let mut conn = self.conn()?;

        let row: Option<HardwareRow> = computer_hardware::table
            .filter(lower(computer_hardware::model).eq(query.to_ascii_lowercase()))
            .order(computer_hardware::model.asc())
            .select(HardwareRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(db_err)?;

        Ok(row.map(HardwareRecord::from))
    }

    fn insert(&mut self, record: &HardwareRecord) -> Result<()> {
        let row = HardwareRow::from(record);
        let mut conn = self.conn()?;

        diesel::insert_into(computer_hardware::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| {
                warn!(model = %record.model, error = %e, "database rejected insert");
                db_err(e)
            })?;

        Ok(())
    }

    fn remove(&mut self, model: &str) -> Result<bool> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(computer_hardware::table.find(model))
            .execute(&mut conn)
            .map_err(db_err)?;

        Ok(deleted > 0)
    }

    fn list_sorted(&self) -> Result<Vec<HardwareRecord>> {
        let mut conn = self.conn()?;

        let rows: Vec<HardwareRow> = computer_hardware::table
            .order(computer_hardware::model.asc())
            .select(HardwareRow::as_select())
            .load(&mut conn)
            .map_err(db_err)?;

        Ok(rows.into_iter().map(HardwareRecord::from).collect())
    }

    fn count(&self) -> Result<usize> {
        let mut conn = self.conn()?;

        let count: i64 = computer_hardware::table
            .count()
            .get_result(&mut conn)
            .map_err(db_err)?;

        let count = usize::try_from(count)
            .map_err(|e| PersistenceError::Database(e.to_string()))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_store() -> SqliteAdapter {
        SqliteAdapter::open(":memory:").expect("open in-memory store")
    }

    fn rtx() -> HardwareRecord {
        HardwareRecord::new("GPU", "RTX 3070", 20, 299.99)
    }

    #[test]
    fn insert_then_get_roundtrip() {
        let mut store = setup_test_store();
        store.insert(&rtx()).unwrap();

        assert_eq!(store.get("RTX 3070").unwrap(), Some(rtx()));
        assert_eq!(store.get("rtx 3070").unwrap(), None);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn find_ignore_case_matches_any_ascii_case() {
        let mut store = setup_test_store();
        store.insert(&rtx()).unwrap();

        assert_eq!(store.find_ignore_case("rtx 3070").unwrap(), Some(rtx()));
        assert_eq!(store.find_ignore_case("RTX 3070").unwrap(), Some(rtx()));
        assert_eq!(store.find_ignore_case("rtx 3080").unwrap(), None);
    }

    #[test]
    fn duplicate_insert_is_a_persistence_error() {
        let mut store = setup_test_store();
        store.insert(&rtx()).unwrap();

        let err = store
            .insert(&HardwareRecord::new("GPU", "RTX 3070", 1, 1.0))
            .unwrap_err();
        assert!(err.is_persistence());
        assert_eq!(store.get("RTX 3070").unwrap(), Some(rtx()));
    }

    #[test]
    fn remove_missing_model_is_a_noop() {
        let mut store = setup_test_store();
        store.insert(&rtx()).unwrap();

        assert!(!store.remove("Ryzen 5").unwrap());
        assert!(store.remove("RTX 3070").unwrap());
        assert!(!store.remove("RTX 3070").unwrap());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn list_sorted_orders_by_model_bytes() {
        let mut store = setup_test_store();
        store
            .insert(&HardwareRecord::new("CPU", "Ryzen 5", 25, 149.99))
            .unwrap();
        store
            .insert(&HardwareRecord::new("CPU", "i7-12700K", 4, 319.0))
            .unwrap();
        store.insert(&rtx()).unwrap();

        let models: Vec<String> = store
            .list_sorted()
            .unwrap()
            .into_iter()
            .map(|r| r.model)
            .collect();
        assert_eq!(models, vec!["RTX 3070", "Ryzen 5", "i7-12700K"]);
    }

    #[test]
    fn price_keeps_double_precision() {
        let mut store = setup_test_store();
        let record = HardwareRecord::new("PSU", "RM850x", 2, 0.1 + 0.2);
        store.insert(&record).unwrap();

        assert_eq!(store.get("RM850x").unwrap(), Some(record));
    }
}
