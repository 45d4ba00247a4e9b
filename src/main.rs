use clap::Parser;
use hwstock::adapter::inbound::cli::command::Cli;
use hwstock::adapter::inbound::cli::output::{self, OutputConfig};
use hwstock::adapter::inbound::cli::run;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    if let Err(e) = run::execute(cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
