//! Shared test utilities for domain and composition tests.
//!
//! - `TestDatabase`: throwaway database, in-memory SQLite by default or a
//!   PostgreSQL container with the `postgres` feature
//! - `TestDataBuilder`: deterministic test data
//! - `assertions`: assertion helpers
//!
//! ```rust,ignore
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::in_memory().await;
//!     let data = TestDataBuilder::from_test_name("my_test");
//!     let email = data.email(0);
//! }
//! ```

mod database;

pub use database::TestDatabase;

use uuid::Uuid;

/// Builder for reproducible test data, seeded from the test name.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::from_test_name("test_create_user");
    /// assert_eq!(data.email(1), TestDataBuilder::from_test_name("test_create_user").email(1));
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Deterministic identifier in the same textual form as generated ids.
    pub fn id(&self, n: u64) -> String {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.seed.to_le_bytes());
        bytes[8..].copy_from_slice(&n.to_le_bytes());
        Uuid::from_bytes(bytes).to_string()
    }

    /// `user{n}-{seed}@example.com`
    pub fn email(&self, n: u64) -> String {
        format!("user{}-{}@example.com", n, self.seed)
    }

    pub fn name(&self, prefix: &str, n: u64) -> String {
        format!("{}-{}-{}", prefix, self.seed, n)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a timestamp survived a round-trip at whole-second precision.
    pub fn assert_same_second(actual: i64, expected: i64, context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected unix second {}, got {}",
            context, expected, actual
        );
    }
}
