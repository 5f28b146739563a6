#![allow(non_snake_case)]

mod account;
mod app;
mod assistant;
mod bookings;
mod components;
pub mod context;
mod layout;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;
use volt_core::{ApiRewrite, AppConfig};

/// Global configuration, set once from the command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the application configuration (command line or defaults)
pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(|| AppConfig::new(default_data_dir(None), ApiRewrite::local()))
}

fn default_data_dir(name: Option<&str>) -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    match name {
        Some(name) => base.join(format!("volt-{}", name)),
        None => base.join("volt"),
    }
}

/// Volt - Workspace booking dashboard
#[derive(Parser, Debug)]
#[command(name = "volt-desktop")]
#[command(about = "Volt - Workspace booking dashboard with an AI assistant")]
struct Args {
    /// Data directory for the session file
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: volt-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Backend base URL that /api/* requests are forwarded to
    #[arg(long, env = "API_URL")]
    api_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| default_data_dir(args.name.as_deref()));

    let api = match ApiRewrite::from_option(args.api_url.as_deref()) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("{}; serving /api locally", e);
            ApiRewrite::local()
        }
    };

    tracing::info!(
        "Starting Volt with data dir {:?}, api base {:?}",
        data_dir,
        api.base()
    );
    let _ = APP_CONFIG.set(AppConfig::new(&data_dir, api));

    let title = match args.name {
        Some(ref name) => format!("Volt - {}", name),
        None => "Volt".to_string(),
    };

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
