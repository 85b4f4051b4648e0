use pathway_core::SqliteBackend;
use tempfile::TempDir;

/// Helper function to create a backend on a fresh database file
pub async fn create_test_backend() -> (TempDir, SqliteBackend) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let backend = SqliteBackend::open(Some(&db_path))
        .await
        .expect("Failed to create backend");
    (temp_dir, backend)
}
