use serde::{Deserialize, Serialize};

use crate::cost::CityWeighting;
use crate::error::{HubError, HubResult};

/// Tuning for the multi-start hill climb.
///
/// Defaults reproduce the reference run over Great Britain: 80 climbers,
/// 120 steps each, starts drawn from 50..58 N and 6 W..2 E on a 1000-step grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Number of independent climbers.
    pub climber_count: usize,

    /// Steps each climber takes before it terminates.
    pub iterations: usize,

    /// Finite-difference probe offset, radians.
    pub probe_step: f64,

    /// Step weight is `step_gain * |delta_cost / cost|`.
    pub step_gain: f64,

    /// Radians moved per unit of step weight.
    pub move_scale: f64,

    /// Start latitude bounds, degrees.
    pub lat_range_deg: [f64; 2],

    /// Start longitude bounds, degrees.
    pub lon_range_deg: [f64; 2],

    /// Number of grid steps across each start range.
    pub resolution: u32,

    /// Master seed; every climber seed is drawn from it.
    pub seed: u64,

    /// Worker threads. 1 runs the climbers in order on the calling thread.
    pub threads: usize,

    pub city_weighting: CityWeighting,

    /// Stop a climber early once both axis moves fall below this many radians.
    pub convergence_tolerance: Option<f64>,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            climber_count: 80,
            iterations: 120,
            probe_step: 0.001,
            step_gain: 15.0,
            move_scale: 0.05,
            lat_range_deg: [50.0, 58.0],
            lon_range_deg: [-6.0, 2.0],
            resolution: 1000,
            seed: 12_345,
            threads: 1,
            city_weighting: CityWeighting::Doubled,
            convergence_tolerance: None,
        }
    }
}

impl PlacementConfig {
    pub fn validate(&self) -> HubResult<()> {
        if self.climber_count == 0 {
            return Err(HubError::config("climber_count must be >= 1"));
        }
        if !(self.probe_step.is_finite() && self.probe_step > 0.0) {
            return Err(HubError::config(format!(
                "probe_step must be > 0, got {}",
                self.probe_step
            )));
        }
        if !(self.step_gain.is_finite() && self.step_gain >= 0.0) {
            return Err(HubError::config(format!(
                "step_gain must be >= 0, got {}",
                self.step_gain
            )));
        }
        if !(self.move_scale.is_finite() && self.move_scale >= 0.0) {
            return Err(HubError::config(format!(
                "move_scale must be >= 0, got {}",
                self.move_scale
            )));
        }
        check_range("lat_range_deg", self.lat_range_deg, 90.0)?;
        check_range("lon_range_deg", self.lon_range_deg, 180.0)?;
        if self.resolution == 0 {
            return Err(HubError::config("resolution must be >= 1"));
        }
        if self.threads == 0 {
            return Err(HubError::config("threads must be >= 1"));
        }
        if let Some(tol) = self.convergence_tolerance {
            if !(tol.is_finite() && tol > 0.0) {
                return Err(HubError::config(format!(
                    "convergence_tolerance must be > 0, got {tol}"
                )));
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> HubResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| HubError::config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn check_range(name: &str, [min, max]: [f64; 2], limit: f64) -> HubResult<()> {
    if !(min.is_finite() && max.is_finite()) || min > max || min < -limit || max > limit {
        return Err(HubError::config(format!(
            "{name} must satisfy -{limit} <= min <= max <= {limit}, got [{min}, {max}]"
        )));
    }
    Ok(())
}
