use clap::Parser;
use factory::ConsoleInput;
use tracing::info;

use demo::{Args, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(?args, "starting demo");

    let mut out = std::io::stdout().lock();
    run(&args, ConsoleInput::stdio(), &mut out)?;
    Ok(())
}
