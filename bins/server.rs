use std::process::ExitCode;

use configs::AppConfig;
use tokio::runtime::Runtime;
use tracing::{error, info};
use uuid::Uuid;

const SERVICE: &str = "institute_admin";

/// Process identity attached to lifecycle log events.
#[derive(Clone, Copy)]
struct Instance {
    id: Uuid,
    pid: u32,
}

fn install_panic_hook(instance: Instance) {
    std::panic::set_hook(Box::new(move |info| {
        error!(service = SERVICE, event = "panic", service_id = %instance.id, pid = instance.pid, message = %info, "unhandled panic occurred");
    }));
}

fn build_runtime(worker_threads: Option<usize>) -> std::io::Result<Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }
    builder.build()
}

/// Run the HTTP server until it fails or Ctrl+C arrives.
async fn serve_until_interrupted(cfg: AppConfig, instance: Instance) -> ExitCode {
    let server_task = tokio::spawn(server::run(cfg));
    tokio::select! {
        joined = server_task => match joined {
            Ok(Ok(())) => {
                info!(service = SERVICE, event = "stop", service_id = %instance.id, "server stopped normally");
                ExitCode::SUCCESS
            }
            Ok(Err(e)) => {
                error!(service = SERVICE, event = "run_failed", error = %e, "server exited with error");
                ExitCode::FAILURE
            }
            Err(e) => {
                error!(service = SERVICE, event = "task_join_error", error = %e, "server task join error");
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            // 直接退出，不等待进行中的请求
            info!(service = SERVICE, event = "shutdown_signal", service_id = %instance.id, "received Ctrl+C, shutting down");
            ExitCode::SUCCESS
        }
    }
}

fn main() -> ExitCode {
    // .env 需在日志初始化前加载，RUST_LOG / LOG_FORMAT 才会生效
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let instance = Instance { id: Uuid::new_v4(), pid: std::process::id() };
    install_panic_hook(instance);

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = SERVICE, event = "config_invalid", error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let rt = match build_runtime(cfg.server.worker_threads) {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = SERVICE, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = SERVICE,
        event = "start",
        service_id = %instance.id,
        pid = instance.pid,
        version = env!("CARGO_PKG_VERSION"),
        threads = cfg.server.worker_threads.unwrap_or_default(),
        backend = ?cfg.storage.backend,
        "admin server starting"
    );

    rt.block_on(serve_until_interrupted(cfg, instance))
}
