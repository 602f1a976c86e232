mod config;
mod effects;
mod logging;
mod tui;

fn main() -> std::io::Result<()> {
    // The terminal belongs to the TUI, so logs go to a file.
    logging::initialize(logging::LogDestination::File);

    let config = config::load_config();
    tui::run_app(config)
}
