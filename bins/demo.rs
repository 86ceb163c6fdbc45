use dotenvy::dotenv;
use tracing::{error, info};

fn main() -> std::process::ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let pid = std::process::id();
    std::panic::set_hook(Box::new(move |info| {
        error!(service = "demo", event = "panic", pid, message = %info, "unhandled panic occurred");
    }));

    // The demo store is tiny; a current-thread runtime is plenty.
    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "demo", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(service = "demo", event = "start", pid, version = env!("CARGO_PKG_VERSION"), "demo API starting");

    rt.block_on(async {
        tokio::select! {
            res = server::run_demo() => match res {
                Ok(()) => std::process::ExitCode::SUCCESS,
                Err(e) => {
                    error!(service = "demo", event = "run_failed", error = %e, "demo service returned error");
                    std::process::ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!(service = "demo", event = "shutdown_signal", pid, "received Ctrl+C, shutting down");
                std::process::ExitCode::SUCCESS
            }
        }
    })
}
