//! Main application entry point (native).
//!
//! Usage: `sketchpad [instance.json] [config.json]`

#[cfg(feature = "native")]
fn main() {
    use std::path::PathBuf;

    env_logger::init();
    log::info!("Starting Sketchpad");

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let instance_path = args.next();
    let config_path = args.next();

    let result = sketchpad_app::AppConfig::load(instance_path.as_deref(), config_path.as_deref())
        .and_then(sketchpad_app::App::run);
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
