use clap::Parser;

use asciigram::cli::{self, Args};

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = cli::run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
