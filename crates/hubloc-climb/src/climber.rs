use hubloc_core::{Coordinate, CostSurface, PlacementConfig};
use log::trace;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClimberState {
    Running,
    Terminated,
}

/// Step constants shared by every climber of one run.
#[derive(Clone, Copy, Debug)]
pub struct ClimbParams {
    pub iterations: usize,
    pub probe_step: f64,
    pub step_gain: f64,
    pub move_scale: f64,
    pub convergence_tolerance: Option<f64>,
}

impl From<&PlacementConfig> for ClimbParams {
    fn from(config: &PlacementConfig) -> Self {
        Self {
            iterations: config.iterations,
            probe_step: config.probe_step,
            step_gain: config.step_gain,
            move_scale: config.move_scale,
            convergence_tolerance: config.convergence_tolerance,
        }
    }
}

/// Rectangle (degrees) that start positions are drawn from, quantized to
/// `resolution` steps per axis.
#[derive(Clone, Copy, Debug)]
pub struct StartRegion {
    pub lat_deg: [f64; 2],
    pub lon_deg: [f64; 2],
    pub resolution: u32,
}

impl From<&PlacementConfig> for StartRegion {
    fn from(config: &PlacementConfig) -> Self {
        Self {
            lat_deg: config.lat_range_deg,
            lon_deg: config.lon_range_deg,
            resolution: config.resolution,
        }
    }
}

impl StartRegion {
    /// Latitude is drawn first, then longitude.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        let lat = quantized(rng, self.lat_deg, self.resolution);
        let lon = quantized(rng, self.lon_deg, self.resolution);
        Coordinate::from_degrees(lat, lon)
    }
}

#[inline]
fn quantized<R: Rng + ?Sized>(rng: &mut R, [min, max]: [f64; 2], resolution: u32) -> f64 {
    let tick = rng.gen_range(0..=resolution);
    min + tick as f64 * (1.0 / resolution as f64) * (max - min)
}

/// One local-search agent.
///
/// A climber is a value: [`Climber::step`] returns the next state instead of
/// mutating in place, so a population can be run on any thread without sharing.
#[derive(Clone, Debug, PartialEq)]
pub struct Climber {
    position: Coordinate,
    cost: f64,
    lat_step_weight: f64,
    lon_step_weight: f64,
    iteration: usize,
    state: ClimberState,
}

impl Climber {
    pub fn new(position: Coordinate, surface: &CostSurface<'_>) -> Self {
        Self {
            position,
            cost: surface.cost_at(&position),
            lat_step_weight: 1.0,
            lon_step_weight: 1.0,
            iteration: 0,
            state: ClimberState::Running,
        }
    }

    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        region: &StartRegion,
        surface: &CostSurface<'_>,
    ) -> Self {
        Self::new(region.sample(rng), surface)
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn state(&self) -> ClimberState {
        self.state
    }

    pub fn step_weights(&self) -> (f64, f64) {
        (self.lat_step_weight, self.lon_step_weight)
    }

    pub fn is_running(&self) -> bool {
        self.state == ClimberState::Running
    }

    /// Advances one iteration.
    ///
    /// Probes the cost `probe_step` north and east, sets each axis weight to
    /// `step_gain * |delta / cost|` and moves `move_scale * weight` away from
    /// whichever probe raised the cost. A climber whose cost is zero is
    /// already at a minimum; its weights are zero and it stays put.
    pub fn step(&self, surface: &CostSurface<'_>, params: &ClimbParams) -> Self {
        if !self.is_running() {
            return self.clone();
        }
        if self.iteration >= params.iterations {
            return Self {
                state: ClimberState::Terminated,
                ..self.clone()
            };
        }

        let Coordinate { lat, lon } = self.position;
        let north_cost = surface.cost_at(&Coordinate::new(lat + params.probe_step, lon));
        let east_cost = surface.cost_at(&Coordinate::new(lat, lon + params.probe_step));

        let (lat_weight, lon_weight) = if self.cost > 0.0 {
            (
                params.step_gain * ((north_cost - self.cost) / self.cost).abs(),
                params.step_gain * ((east_cost - self.cost) / self.cost).abs(),
            )
        } else {
            (0.0, 0.0)
        };

        let lat_move = params.move_scale * lat_weight;
        let lon_move = params.move_scale * lon_weight;
        let next_lat = if north_cost > self.cost { lat - lat_move } else { lat + lat_move };
        let next_lon = if east_cost > self.cost { lon - lon_move } else { lon + lon_move };

        let position = Coordinate::new(next_lat, next_lon);
        let iteration = self.iteration + 1;
        let converged = params
            .convergence_tolerance
            .is_some_and(|tol| lat_move < tol && lon_move < tol);
        let state = if iteration >= params.iterations || converged {
            ClimberState::Terminated
        } else {
            ClimberState::Running
        };

        Self {
            position,
            cost: surface.cost_at(&position),
            lat_step_weight: lat_weight,
            lon_step_weight: lon_weight,
            iteration,
            state,
        }
    }

    /// Steps until the climber terminates.
    pub fn run(self, surface: &CostSurface<'_>, params: &ClimbParams) -> Self {
        let mut climber = self;
        while climber.is_running() {
            climber = climber.step(surface, params);
        }
        trace!(
            "climber done after {} iterations: cost={:.3} at {}",
            climber.iteration,
            climber.cost,
            climber.position.to_degrees()
        );
        climber
    }
}
