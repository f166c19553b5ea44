//! Shared database setup for `PostgreSQL` integration tests.

use std::sync::OnceLock;
use std::thread;

use rstest::fixture;
use tasktrack::storage::{PgPool, build_pool, run_migrations};

use super::cluster::{BoxError, EmbeddedCluster};

/// Environment variable naming the test database.
pub const TEST_DATABASE_URL: &str = "TASKTRACK_TEST_DATABASE_URL";

static DATABASE: OnceLock<Result<TestDatabase, String>> = OnceLock::new();

/// Migrated pool plus the embedded cluster backing it, if one was started.
struct TestDatabase {
    pool: PgPool,
    _cluster: Option<EmbeddedCluster>,
}

impl TestDatabase {
    fn open() -> Result<Self, BoxError> {
        let (url, cluster) = match std::env::var(TEST_DATABASE_URL) {
            Ok(url) => (url, None),
            Err(_) => {
                let cluster = EmbeddedCluster::start()?;
                (cluster.database_url(), Some(cluster))
            }
        };
        let pool = build_pool(&url, 4)?;
        run_migrations(&pool, false)?;
        Ok(Self {
            pool,
            _cluster: cluster,
        })
    }
}

/// Provides a migrated pool.
///
/// Uses the database named by `TASKTRACK_TEST_DATABASE_URL`, or starts an
/// embedded cluster when it is unset. Setup runs once per test binary on a
/// dedicated thread, outside the test's own runtime.
///
/// # Panics
///
/// Panics when no database can be reached or migrated, so a broken setup is
/// reported as a failure rather than a pass.
#[fixture]
pub fn pool() -> PgPool {
    let database = DATABASE.get_or_init(|| {
        thread::spawn(|| TestDatabase::open().map_err(|err| err.to_string()))
            .join()
            .unwrap_or_else(|_| Err("database setup thread panicked".to_owned()))
    });
    match database {
        Ok(database) => database.pool.clone(),
        Err(err) => panic!("PostgreSQL test database unavailable: {err}"),
    }
}
