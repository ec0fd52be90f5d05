mod app_state;
mod cli;

use std::path::Path;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use stereovr_common::ConfigError;
use stereovr_config::StereoConfig;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- stereovr crashed ---");
        if let Some(location) = info.location() {
            eprintln!("at {}:{}", location.file(), location.line());
        }
        eprintln!("------------------------\n");

        default_hook(info);
    }));
}

fn load_config(args: &cli::Args) -> (StereoConfig, Option<ConfigError>) {
    let loaded = match args.config {
        Some(ref path) => stereovr_config::load_config_from(Path::new(path)),
        None => stereovr_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (StereoConfig::default(), Some(e)),
    }
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // The log level can come from the config file, so load it before the
    // subscriber exists and report the outcome afterwards.
    let (mut config, load_error) = load_config(&args);
    let log_directive = args.log_directive(&config);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse::<Directive>()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();

    tracing::info!("stereovr v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    args.apply_overrides(&mut config);
    if let Err(e) = stereovr_config::validation::validate(&config) {
        tracing::error!("Invalid settings: {e}");
        std::process::exit(2);
    }
    tracing::info!(
        "Config loaded (format: {}, wide: {}, controllers: {})",
        config.video.format,
        config.video.wide_field,
        config.controllers.count
    );

    if args.print_config {
        println!("{}", stereovr_config::config_to_json(&config));
        return;
    }

    let registry = stereovr_platform::KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::StereoApp::new(config, registry);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
