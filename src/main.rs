//! Binary entry point: load `start.json`, then run the viewer window.

use telemview::startup::StartupConfig;

fn main() {
    env_logger::init();

    let startup = match StartupConfig::load("start.json") {
        Ok(s) => s,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "loaded {} app director{} from start.json",
        startup.apps.len(),
        if startup.apps.len() == 1 { "y" } else { "ies" }
    );

    if let Err(e) = telemview::app::run(startup.apps) {
        log::error!("window error: {e}");
        std::process::exit(1);
    }
}
