use log::{debug, info, trace};
use ordered_float::OrderedFloat;
use crate::MIN_CITIES;
use crate::component::{Ant, PheromoneMatrix, Solution};
use crate::network::DistanceGraph;
use crate::utils::config::{Config, Parameters};
use crate::utils::error::{Error, Result};
use super::{CarryOver, CarryOverEnum, Executor, RandomMode, TourConstructor};


/// Drives the iterations: every ant builds a tour against the same snapshot,
/// the shortest tour challenges the best solution, and the carry-over policy
/// folds the ants' private views back into the global pheromone matrix.
pub struct Colony {
    graph: DistanceGraph,
    pheromone: PheromoneMatrix,
    ants: Vec<Ant>,
    best: Solution,
    history: Vec<f64>,
    iteration: usize,
    max_iterations: usize,
    params: Parameters,
    policy: CarryOverEnum,
    executor: Executor,
    random: RandomMode,
}

impl Colony {
    pub fn new(graph: DistanceGraph, config: &Config) -> Result<Self> {
        config.validate()?;
        let n = graph.len();
        if n < MIN_CITIES {
            return Err(Error::TooFewCities(n, MIN_CITIES));
        }
        let params = config.parameters.clone();
        let population = config.ants
            .unwrap_or((n as f64 * params.ant_factor) as usize);
        if population == 0 {
            return Err(Error::EmptyPopulation { cities: n, ant_factor: params.ant_factor });
        }

        let ants = vec![Ant::new(n); population];
        let best = Solution::seed(&ants[0]);
        let pheromone = PheromoneMatrix::new(n, params.c);
        let policy = CarryOverEnum::from_name(&config.policy)?;
        let executor = Executor::from_config(config);
        let random = RandomMode::from_config(config);
        info!("colony `{}`: {} cities, {} ants, {:?} policy, {:?} executor, {:?} randomness",
              config.name, n, population, policy, executor, random);

        Ok(Colony {
            graph,
            pheromone,
            ants,
            best,
            history: Vec::with_capacity(config.max_iterations),
            iteration: 0,
            max_iterations: config.max_iterations,
            params,
            policy,
            executor,
            random,
        })
    }
    /// Runs one full round and returns the length of its shortest tour.
    pub fn iterate(&mut self) -> f64 {
        let snapshot = self.pheromone.snapshot();
        let constructor = TourConstructor::new(&self.graph, &snapshot, &self.params);
        let (iteration, random) = (self.iteration, self.random);

        let items: Vec<(usize, &mut Ant)> = self.ants.iter_mut().enumerate().collect();
        let ranking = self.executor.rank(items, |(id, ant)| {
            let mut rng = random.task_rng(iteration, id);
            constructor.construct(ant, &mut rng);
            (OrderedFloat(ant.length()), id)
        });

        let ants = &self.ants;
        let ranked: Vec<&Ant> = ranking.iter()
            .map(|&(_, id)| &ants[id])
            .collect();
        let winner = ranked[0];
        let length = winner.length();
        if self.best.challenge(winner) {
            debug!("iteration #{} found shorter tour {}", iteration, length);
        }

        self.policy.carry_over(&mut self.pheromone, &snapshot, &ranked);
        self.pheromone.evaporate(self.params.evaporation);
        trace!("iteration #{} pheromone within [{}, {}]",
               iteration, self.pheromone.min(), self.pheromone.max());

        self.history.push(self.best.length);
        self.iteration += 1;
        debug!("iteration #{}: winner {}, best {}", iteration, length, self.best.length);
        length
    }
    pub fn run(&mut self) -> &Solution {
        while self.iteration < self.max_iterations {
            self.iterate();
        }
        info!("colony finished {} iterations with best length {}",
              self.iteration, self.best.length);
        &self.best
    }
    pub fn best(&self) -> &Solution {
        &self.best
    }
    /// Best length after each finished iteration.
    pub fn history(&self) -> &[f64] {
        &self.history
    }
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }
    pub fn graph(&self) -> &DistanceGraph {
        &self.graph
    }
    pub fn population(&self) -> usize {
        self.ants.len()
    }
    pub fn iteration(&self) -> usize {
        self.iteration
    }
}
