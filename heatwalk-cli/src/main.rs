//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = heatwalk_cli::run() {
        eprintln!("heatwalk: {err}");
        std::process::exit(1);
    }
}
