use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::{HubError, HubResult};
use crate::point::{Category, WeightedPoint};

const FIELD_COUNT: usize = 5;

/// Reads a places CSV (`name,category,population,latitude,longitude`) from disk.
pub fn load_places(path: &Path) -> HubResult<Vec<WeightedPoint>> {
    let text = fs::read_to_string(path).map_err(|e| {
        HubError::invalid_input(format!("failed to read places file {}: {e}", path.display()))
    })?;
    let places = parse_places(&text)?;
    debug!("loaded {} places from {}", places.len(), path.display());
    Ok(places)
}

/// Parses places CSV text. The first non-empty line is a header and is skipped.
/// Coordinates are converted from degrees to radians here.
pub fn parse_places(text: &str) -> HubResult<Vec<WeightedPoint>> {
    let mut rows = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    if rows.next().is_none() {
        return Err(HubError::invalid_input("places file is empty (no header row)"));
    }

    let mut places = Vec::new();
    for (line_no, line) in rows {
        places.push(parse_row(line_no, line)?);
    }

    if places.is_empty() {
        warn!("places file has a header but no rows");
    }
    Ok(places)
}

fn parse_row(line_no: usize, line: &str) -> HubResult<WeightedPoint> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(HubError::invalid_data(format!(
            "line {line_no}: expected {FIELD_COUNT} fields \
             (name,category,population,latitude,longitude) but got {}",
            fields.len()
        )));
    }

    let name = fields[0];
    if name.is_empty() {
        return Err(HubError::invalid_data(format!("line {line_no}: empty place name")));
    }
    let category: Category = fields[1]
        .parse()
        .map_err(|e| HubError::invalid_data(format!("line {line_no}: {e}")))?;
    let population: u64 = fields[2].parse().map_err(|_| {
        HubError::invalid_data(format!("line {line_no}: invalid population: {}", fields[2]))
    })?;
    let lat = parse_angle(line_no, "latitude", fields[3], 90.0)?;
    let lon = parse_angle(line_no, "longitude", fields[4], 180.0)?;

    Ok(WeightedPoint::from_degrees(name, category, population, lat, lon))
}

fn parse_angle(line_no: usize, what: &str, raw: &str, limit: f64) -> HubResult<f64> {
    let value: f64 = raw
        .parse()
        .map_err(|_| HubError::invalid_data(format!("line {line_no}: invalid {what}: {raw}")))?;
    if !value.is_finite() || !(-limit..=limit).contains(&value) {
        return Err(HubError::invalid_data(format!(
            "line {line_no}: {what} {value} outside [-{limit}, {limit}]"
        )));
    }
    Ok(value)
}
