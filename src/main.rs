use anyhow::Result;
use clap::Parser;

use qr_create::logging::init_cli_logger;
use qr_create::{generate, Cli};

fn main() -> Result<()> {
    let args = Cli::parse();
    init_cli_logger(args.verbose);

    let result = generate(&args.into_options())?;

    println!("{}", result);

    Ok(())
}
