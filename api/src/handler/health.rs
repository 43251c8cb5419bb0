use axum::{extract::State, http::StatusCode};
use registry::AppRegistry;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "The server is up"))
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

#[utoipa::path(
    get,
    path = "/health/db",
    tag = "health",
    responses(
        (status = 200, description = "The database answers queries"),
        (status = 500, description = "The database is unreachable"),
    )
)]
pub async fn health_check_db(State(registry): State<AppRegistry>) -> StatusCode {
    if registry.health_check_repository().check_db().await {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use kernel::repository::health::{HealthCheckRepository, MockHealthCheckRepository};
    use registry::MockAppRegistryExt;

    use super::*;

    #[tokio::test]
    async fn unreachable_database_is_a_server_error() {
        let mut repo = MockHealthCheckRepository::new();
        repo.expect_check_db().returning(|| false);
        let repo: Arc<dyn HealthCheckRepository> = Arc::new(repo);
        let mut registry = MockAppRegistryExt::new();
        registry
            .expect_health_check_repository()
            .returning(move || repo.clone());
        let registry: AppRegistry = Arc::new(registry);

        let status = health_check_db(State(registry)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
