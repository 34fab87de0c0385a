use std::thread;

use crossbeam_channel::unbounded;
use hubloc_core::{
    Coordinate, CostSurface, HubError, HubResult, LatLonDegrees, PlacementConfig, WeightedPoint,
};
use log::{debug, info, warn};
use rand::RngCore;
use serde::Serialize;

use crate::climber::{ClimbParams, Climber, StartRegion};
use crate::seeds::{climber_rng, climber_seeds, master_rng};

/// Final state of one climber, in presentation units.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClimberSummary {
    pub index: usize,
    pub position: LatLonDegrees,
    pub cost: f64,
    pub iterations: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptimizerReport {
    pub best_index: usize,
    pub best: LatLonDegrees,
    pub cost: f64,
    #[serde(skip)]
    pub hub: Coordinate,
    pub climbers: Vec<ClimberSummary>,
}

/// Multi-start hill climb over a fixed point set.
pub struct Optimizer<'a> {
    surface: CostSurface<'a>,
    params: ClimbParams,
    region: StartRegion,
    climber_count: usize,
    threads: usize,
    seed: u64,
}

impl<'a> Optimizer<'a> {
    pub fn new(points: &'a [WeightedPoint], config: &PlacementConfig) -> HubResult<Self> {
        config.validate()?;
        Ok(Self {
            surface: CostSurface::new(points, config.city_weighting),
            params: ClimbParams::from(config),
            region: StartRegion::from(config),
            climber_count: config.climber_count,
            threads: config.threads,
            seed: config.seed,
        })
    }

    pub fn surface(&self) -> &CostSurface<'a> {
        &self.surface
    }

    /// Runs with a master generator seeded from the configured seed.
    pub fn run(&self) -> HubResult<OptimizerReport> {
        self.run_with_rng(&mut master_rng(self.seed))
    }

    /// Runs with an explicit master generator; only climber seeds are drawn from it.
    pub fn run_with_rng<R: RngCore + ?Sized>(
        &self,
        master: &mut R,
    ) -> HubResult<OptimizerReport> {
        if self.surface.is_empty() {
            warn!("no places given: every climber costs 0 and climber 0 wins the tie");
        }
        let seeds = climber_seeds(master, self.climber_count);
        debug!(
            "running {} climbers x {} iterations on {} thread(s), weighting={}",
            seeds.len(),
            self.params.iterations,
            self.threads,
            self.surface.weighting()
        );

        let climbers = if self.threads > 1 {
            self.run_pool(&seeds)?
        } else {
            seeds.iter().map(|&seed| self.climb(seed)).collect()
        };

        let best_index = select_best(&climbers)
            .ok_or_else(|| HubError::other("optimizer ran with no climbers"))?;
        let best = &climbers[best_index];
        let report = OptimizerReport {
            best_index,
            best: best.position().to_degrees(),
            cost: best.cost(),
            hub: best.position(),
            climbers: climbers
                .iter()
                .enumerate()
                .map(|(index, c)| ClimberSummary {
                    index,
                    position: c.position().to_degrees(),
                    cost: c.cost(),
                    iterations: c.iteration(),
                })
                .collect(),
        };
        info!(
            "best hub: climber {} at {} cost={:.3}",
            report.best_index, report.best, report.cost
        );
        Ok(report)
    }

    fn climb(&self, seed: u64) -> Climber {
        let mut rng = climber_rng(seed);
        Climber::spawn(&mut rng, &self.region, &self.surface).run(&self.surface, &self.params)
    }

    /// Map over climbers on a worker pool; results are put back in population
    /// order so the reduction matches the sequential run.
    fn run_pool(&self, seeds: &[u64]) -> HubResult<Vec<Climber>> {
        let (job_tx, job_rx) = unbounded::<(usize, u64)>();
        let (done_tx, done_rx) = unbounded::<(usize, Climber)>();
        for job in seeds.iter().copied().enumerate() {
            job_tx
                .send(job)
                .map_err(|e| HubError::other(format!("climber queue closed: {e}")))?;
        }
        drop(job_tx);

        let workers = self.threads.min(seeds.len()).max(1);
        thread::scope(|scope| {
            for _ in 0..workers {
                let job_rx = job_rx.clone();
                let done_tx = done_tx.clone();
                scope.spawn(move || {
                    for (index, seed) in job_rx.iter() {
                        if done_tx.send((index, self.climb(seed))).is_err() {
                            break;
                        }
                    }
                });
            }
        });
        drop(done_tx);

        let mut slots: Vec<Option<Climber>> = (0..seeds.len()).map(|_| None).collect();
        for (index, climber) in done_rx.iter() {
            slots[index] = Some(climber);
        }
        slots
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| HubError::other("a climber worker exited without reporting"))
    }
}

/// Index of the lowest-cost climber. Strict comparison: on ties the lowest index wins.
pub fn select_best(climbers: &[Climber]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, climber) in climbers.iter().enumerate() {
        if best.map_or(true, |(_, cost)| climber.cost() < cost) {
            best = Some((index, climber.cost()));
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubloc_core::{Category, CityWeighting};

    #[test]
    fn select_best_prefers_first_on_ties() {
        let surface = CostSurface::new(&[], CityWeighting::Doubled);
        let climbers: Vec<Climber> = (0..5)
            .map(|i| Climber::new(Coordinate::from_degrees(50.0 + i as f64, 0.0), &surface))
            .collect();
        assert_eq!(select_best(&climbers), Some(0));
        assert_eq!(select_best(&[]), None);
    }

    #[test]
    fn select_best_picks_lowest_cost() {
        let points = vec![WeightedPoint::from_degrees("A", Category::Town, 1, 53.0, -1.0)];
        let surface = CostSurface::new(&points, CityWeighting::Doubled);
        let climbers: Vec<Climber> = [57.0, 53.5, 51.0, 53.5]
            .iter()
            .map(|&lat| Climber::new(Coordinate::from_degrees(lat, -1.0), &surface))
            .collect();
        assert_eq!(select_best(&climbers), Some(1));
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = PlacementConfig {
            climber_count: 0,
            ..PlacementConfig::default()
        };
        assert!(Optimizer::new(&[], &config).is_err());
    }

    #[test]
    fn report_lists_every_climber() {
        let points = vec![WeightedPoint::from_degrees("A", Category::Town, 3, 53.0, -1.0)];
        let config = PlacementConfig {
            climber_count: 7,
            iterations: 10,
            ..PlacementConfig::default()
        };
        let report = Optimizer::new(&points, &config).unwrap().run().unwrap();
        assert_eq!(report.climbers.len(), 7);
        assert!(report.climbers.iter().all(|c| c.iterations == 10));
        let min = report
            .climbers
            .iter()
            .map(|c| c.cost)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(report.cost, min);
        assert_eq!(report.climbers[report.best_index].cost, min);
    }
}
