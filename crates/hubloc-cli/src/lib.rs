//! Console front end for hub placement.

pub mod args;
pub mod logging;
pub mod report;

use std::io::{BufRead, Write};
use std::time::Instant;

use hubloc_climb::Optimizer;
use hubloc_core::{load_places, HubResult};
use hubloc_mst::build_tree;
use log::info;

use args::{Args, OutputFormat, TreeMode};

/// Loads places, runs the optimizer and, if requested, builds the tree.
///
/// `input` answers the tree prompt, `prompt` receives the question and
/// `out` receives the report.
pub fn run<R: BufRead, P: Write, W: Write>(
    args: &Args,
    input: &mut R,
    prompt: &mut P,
    out: &mut W,
) -> HubResult<()> {
    let now = Instant::now();
    let config = args.placement_config()?;
    let places = load_places(&args.input)?;
    info!(
        "input: {} places from {}, seed={} climbers={} threads={}",
        places.len(),
        args.input.display(),
        config.seed,
        config.climber_count,
        config.threads
    );

    let hub = Optimizer::new(&places, &config)?.run()?;

    let want_tree = match args.tree {
        TreeMode::Yes => true,
        TreeMode::No => false,
        TreeMode::Ask => report::confirm_tree(input, prompt)?,
    };
    let tree = want_tree.then(|| build_tree(hub.hub, &places).report(&places));

    match args.format {
        OutputFormat::Text => report::write_text(out, &hub, tree.as_ref())?,
        OutputFormat::Json => report::write_json(out, &hub, tree.as_ref())?,
    }

    info!("done in {:.2}s", now.elapsed().as_secs_f32());
    Ok(())
}
