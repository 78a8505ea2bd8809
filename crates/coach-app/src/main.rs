mod cli;
mod controller;
mod render;
mod repl;
mod startup;
#[cfg(test)]
mod test_support;

use std::path::PathBuf;
use std::time::Duration;

use coach_common::EventBus;
use coach_config::toml_loader::LOCAL_CONFIG_FILE;
use coach_config::CoachConfig;
use tracing_subscriber::EnvFilter;

use controller::Tutor;

/// `RUST_LOG` wins over `directive` when set.
fn init_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("coach=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> coach_common::Result<()> {
    let args = cli::parse();

    if args.init_config {
        let path = args
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE));
        coach_config::create_default_config(&path)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let mut config = coach_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("config load failed, using defaults: {e}");
        CoachConfig::default()
    });
    args.apply_overrides(&mut config);

    if args.print_config {
        print!("{}", coach_config::config_to_toml(&config));
        return Ok(());
    }

    let directive = args
        .log_level
        .as_deref()
        .map(|level| format!("coach={level}"))
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    init_logging(&directive);
    tracing::info!("coach v{} starting", env!("CARGO_PKG_VERSION"));

    let runtime = startup::build_runtime()?;
    let catalog = startup::load_catalog(&config);
    let dispatcher = startup::build_dispatcher(&config, runtime.handle().clone()).map_err(|e| {
        tracing::warn!("chat disabled: {e}");
        e.to_string()
    });

    let events = EventBus::default();
    let render_thread = render::spawn_render_thread(events.subscribe())?;

    let tutor = Tutor::new(catalog, dispatcher, events);
    tutor.greet();
    repl::run(&tutor, std::io::stdin().lock());

    // Dropping the last bus handle closes the channel and ends the render thread.
    drop(tutor);
    runtime.shutdown_timeout(Duration::from_secs(1));
    if render_thread.join().is_err() {
        tracing::error!("render thread panicked");
    }
    tracing::info!("shutdown complete");
    Ok(())
}
