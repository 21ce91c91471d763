use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use service::admin::AdminService;
use tracing::info;

use crate::routes::{self, ServerState};

/// Build the admin service for the configured backend, migrating and seeding as configured.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let admin = match cfg.storage.backend {
        StorageBackend::Memory => {
            info!(backend = "memory", "using in-memory storage");
            AdminService::in_memory()
        }
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None).await?;
            info!(backend = "postgres", "migrations applied");
            AdminService::with_seaorm(db)
        }
    };

    if cfg.seed.enabled {
        let report = admin.seed_sample_data().await?;
        info!(students = ?report.students, messages = ?report.messages, "sample data check complete");
    }
    Ok(ServerState::new(admin))
}

/// Assemble the router for a loaded configuration.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let state = build_state(cfg).await?;
    let cors = routes::build_cors(&cfg.cors.allowed_origin)?;
    Ok(routes::build_router(state, cors))
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Public entry: build the app for an already loaded configuration and serve it.
/// `.env`, logging and config loading are the caller's job.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, allowed_origin = %cfg.cors.allowed_origin, "starting institute admin server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_server_section() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 9090;
        assert_eq!(bind_addr(&cfg).unwrap().to_string(), "0.0.0.0:9090");
    }

    #[tokio::test]
    async fn memory_backend_is_seeded_when_enabled() {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Memory;
        let state = build_state(&cfg).await.unwrap();
        assert_eq!(state.admin.list_students().await.unwrap().len(), 8);
        assert_eq!(state.admin.list_messages().await.unwrap().len(), 5);

        cfg.seed.enabled = false;
        let empty = build_state(&cfg).await.unwrap();
        assert!(empty.admin.list_students().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn run_uses_the_config_it_is_given() {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Memory;
        cfg.server.host = "not a host".into();
        let err = run(cfg).await.unwrap_err();
        assert!(err.to_string().contains("invalid socket address"), "{err}");
    }
}
