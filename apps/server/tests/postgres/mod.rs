//! The restaurant API against PostgreSQL, one schema per test.
//!
//! Skipped unless `FOODIE__DATABASE__TEST_DATABASE_URL` or `DATABASE_URL` is set.
