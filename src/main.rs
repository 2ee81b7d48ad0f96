//! Vote Jar entry point
//!
//! In the browser the library is loaded directly (see `platform::web`); the
//! native binary runs a seeded headless replay.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;
    use std::process::ExitCode;
    use vote_jar::platform::replay::{self, ReplayOptions};

    env_logger::init();

    let opts = ReplayOptions::parse();
    let config = match opts.load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (summary, frame) = replay::run(config, &opts);
    if opts.json {
        match frame.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("Failed to encode frame: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!(
            "{} ticks, {} votes, {} tokens in jar ({} settled), contained: {}",
            summary.ticks, summary.spawned, summary.live, summary.settled, summary.contained
        );
    }
    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start
}
