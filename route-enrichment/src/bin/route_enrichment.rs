use clap::Parser;
use route_enrichment::app::RouteEnrichmentApp;

fn main() {
    env_logger::init();
    let args = RouteEnrichmentApp::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running route_enrichment: {e}");
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}
