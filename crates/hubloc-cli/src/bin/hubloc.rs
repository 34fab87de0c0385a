use std::io;

use clap::Parser;
use hubloc_cli::{args::Args, logging, run};
use hubloc_core::HubResult;

fn main() -> HubResult<()> {
    let args = Args::parse();
    logging::init_logger(&args)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompt = io::stderr();
    let mut out = io::stdout().lock();
    run(&args, &mut input, &mut prompt, &mut out)
}
