//! Mergington activity directory CLI and REST API entry point.
//!
//! Binary name: `mergington`
//!
//! Parses CLI arguments, loads configuration, seeds the activity registry,
//! then dispatches to the requested command or starts the REST API server.

mod cli;
mod http;
mod state;

use std::path::Path;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use mergington_infra::config::{config_path, load_service_config, resolve_data_dir};
use mergington_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_directive};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(verbosity_directive(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "mergington", &mut std::io::stdout());
        return Ok(());
    }

    let config_file = match &cli.config {
        Some(path) => path.clone(),
        None => config_path(&resolve_data_dir()),
    };
    let mut config = load_service_config(&config_file).await;
    let config_dir = config_file.parent().unwrap_or(Path::new(".")).to_path_buf();

    match cli.command {
        Commands::Serve {
            port,
            host,
            static_dir,
            allow_overbooking,
        } => {
            cli::apply_serve_overrides(&mut config, port, host, static_dir, allow_overbooking);

            let addr = config.bind_addr();
            let state = AppState::init(config, &config_dir).await?;
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} Mergington activities listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }
            tracing::info!(%addr, "server started");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("server stopped");
        }

        Commands::List => {
            let state = AppState::init(config, &config_dir).await?;
            cli::activity::list_activities(&state, cli.json)?;
        }

        Commands::Show { name } => {
            let state = AppState::init(config, &config_dir).await?;
            cli::activity::show_activity(&state, &name, cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    shutdown_tracing();
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
