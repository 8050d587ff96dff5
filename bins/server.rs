use std::time::Duration;

use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Grace period for in-flight requests after Ctrl+C.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

fn init_logging() {
    // .env first so RUST_LOG / LOG_FORMAT apply
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "marketplace", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "marketplace",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    // worker count from config.toml, then TOKIO_WORKER_THREADS
    let worker_threads = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg.server.worker_threads,
        Err(_) => std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()),
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "marketplace", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "marketplace",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "marketplace api starting"
    );

    rt.block_on(async move {
        let mut server_task = tokio::spawn(async move {
            let res = server::run().await;
            if let Err(e) = &res {
                error!(service = "marketplace", event = "run_failed", error = %e, "server::run returned error");
            }
            res
        });

        let finished = tokio::select! {
            res = &mut server_task => Some(res),
            _ = tokio::signal::ctrl_c() => {
                info!(service = "marketplace", event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
                None
            }
        };

        // the server saw the same signal and is draining
        let res = match finished {
            Some(res) => res,
            None => match tokio::time::timeout(DRAIN_TIMEOUT, &mut server_task).await {
                Ok(res) => res,
                Err(_) => {
                    warn!(service = "marketplace", event = "drain_timeout", "in-flight requests did not finish; aborting");
                    server_task.abort();
                    return std::process::ExitCode::SUCCESS;
                }
            },
        };

        match res {
            Ok(Ok(())) => {
                info!(service = "marketplace", event = "stop", %service_id, pid, "server stopped normally");
                std::process::ExitCode::SUCCESS
            }
            // already logged inside the task
            Ok(Err(_)) => std::process::ExitCode::FAILURE,
            Err(e) => {
                error!(service = "marketplace", event = "task_join_error", error = %e, "server task join error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
