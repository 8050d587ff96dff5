
/// CRUD round trips against Postgres; skipped without DATABASE_URL
pub mod crud_tests;
