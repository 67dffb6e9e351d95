//! Prontu Desktop Application
//!
//! A desktop form for capturing medical exam records into a managed document
//! database.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod state;
mod ui;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("prontu=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Prontu...");

    dioxus::launch(app::App);
}
