// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Petra Foam site server binary.

use clap::{Parser, Subcommand};
use petra_content::ContentConfig;
use petra_server::{create_app_state, create_router, ServerConfig};
use tower_http::{
	cors::{Any, CorsLayer},
	trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Petra server - content resolution server for the Petra Foam site.
#[derive(Parser, Debug)]
#[command(
	name = "petra-server",
	about = "Petra Foam site content server",
	version
)]
struct Args {
	/// Subcommands for petra-server (e.g., `version`)
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Parse CLI arguments
	let args = Args::parse();

	// Handle subcommands that should not start the server
	if let Some(Command::Version) = args.command {
		println!("petra-server version: {}", env!("CARGO_PKG_VERSION"));
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	// Setup tracing
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "petra_server=info,petra_content=info,tower_http=info".into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	// Load configuration
	let server_config = ServerConfig::from_env()?;
	let (content_config, diagnostics) = ContentConfig::from_env();
	diagnostics.log();

	tracing::info!(
		host = %server_config.host,
		port = server_config.port,
		content_api = %content_config.api_url,
		site_url = %content_config.site_url,
		"starting petra-server"
	);

	let state = create_app_state(&content_config, server_config.default_locale.clone());

	let app = create_router(state)
		.layer(TraceLayer::new_for_http())
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods(Any)
				.allow_headers(Any),
		);

	// Start server
	let addr = server_config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	// Run server with graceful shutdown
	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
