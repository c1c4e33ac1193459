//! command line explorer for the EcoRoutes dataset. set RUST_LOG=info to see
//! load counts and written files.
use clap::Parser;
use ecoroutes::app::EcoRoutesApp;

fn main() {
    env_logger::init();
    log::info!("starting ecoroutes at {}", chrono::Local::now().to_rfc3339());
    let args = EcoRoutesApp::parse();
    if let Err(e) = args.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
