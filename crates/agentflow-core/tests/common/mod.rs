use agentflow_core::{Dashboard, DashboardBuilder};
use tempfile::TempDir;

/// Helper function to create a test dashboard for `user`
pub async fn create_test_dashboard(user: &str) -> (TempDir, Dashboard) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let dashboard = DashboardBuilder::new()
        .with_database_path(Some(&db_path))
        .with_user(user)
        .build()
        .await
        .expect("Failed to create dashboard");
    (temp_dir, dashboard)
}
