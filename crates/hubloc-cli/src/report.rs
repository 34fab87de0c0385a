use std::io::{self, BufRead, Write};

use hubloc_climb::OptimizerReport;
use hubloc_core::{HubError, HubResult};
use hubloc_mst::TreeReport;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct HubOutput<'a> {
    hub: &'a OptimizerReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    tree: Option<&'a TreeReport>,
}

pub fn write_text<W: Write>(
    out: &mut W,
    hub: &OptimizerReport,
    tree: Option<&TreeReport>,
) -> io::Result<()> {
    writeln!(out, "Best location is at")?;
    writeln!(out, " Lat: {:.6}", hub.best.latitude)?;
    writeln!(out, " Lon: {:.6}", hub.best.longitude)?;
    writeln!(out, " Cost: {:.3}", hub.cost)?;

    if let Some(tree) = tree {
        writeln!(out)?;
        writeln!(out, "Minimum spanning tree for data set and hub location is:")?;
        for edge in &tree.edges {
            writeln!(
                out,
                "{} --->> {} ({:.3} km)",
                edge.source, edge.destination, edge.weight
            )?;
        }
        writeln!(out, "Total weight: {:.3} km", tree.total_weight)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(
    out: &mut W,
    hub: &OptimizerReport,
    tree: Option<&TreeReport>,
) -> HubResult<()> {
    serde_json::to_writer_pretty(&mut *out, &HubOutput { hub, tree })
        .map_err(|e| HubError::other(format!("failed to write JSON report: {e}")))?;
    writeln!(out)?;
    Ok(())
}

/// Asks whether to build the tree. Accepts y/yes in any case; anything else,
/// including end of input, means no.
pub fn confirm_tree<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> io::Result<bool> {
    writeln!(
        prompt,
        "Would you like to find a Minimum Spanning Tree for this Hub and Data set?"
    )?;
    writeln!(prompt, "y/n?")?;
    prompt.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
