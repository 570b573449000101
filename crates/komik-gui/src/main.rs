mod app;
mod cover_cache;
mod keyboard;
mod screen;
mod style;
mod theme;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use iced::Size;
use tracing_subscriber::EnvFilter;

use komik_core::config::AppConfig;

const DEFAULT_LOG_FILTER: &str = "komik=info";
const INITIAL_WINDOW_SIZE: Size = Size::new(1100.0, 720.0);

/// Manga catalog browser backed by MangaDex.
#[derive(Debug, Parser)]
#[command(name = "komik", version, about)]
struct Args {
    /// Read configuration from this file instead of the user config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. `komik=debug`. Overrides RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> iced::Result {
    let args = Args::parse();

    let filter = match &args.log {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let loaded = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load config, using defaults");
        AppConfig::default()
    });
    tracing::info!(
        base_url = %config.api.base_url,
        language = config.general.language.tag(),
        "starting komik"
    );

    let win = iced::window::Settings {
        size: INITIAL_WINDOW_SIZE,
        position: iced::window::Position::Centered,
        ..Default::default()
    };

    iced::application(
        move || app::Komik::new(config.clone(), INITIAL_WINDOW_SIZE),
        app::Komik::update,
        app::Komik::view,
    )
    .title(app::Komik::title)
    .subscription(app::Komik::subscription)
    .theme(app::Komik::theme)
    .font(lucide_icons::LUCIDE_FONT_BYTES)
    .window(win)
    .run()
}
