use portal::config::{self, Config, Invocation};

fn main() {
    portal::logging::init();

    let config = match Config::load() {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            config::print_help();
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    };

    if let Err(e) = portal::cli::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
