use clap::Parser;
use parkmeter::app::ParkmeterCliArguments;

fn main() {
    env_logger::init();
    let args = ParkmeterCliArguments::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running parkmeter: {e}");
            std::process::exit(1);
        }
    }
}
