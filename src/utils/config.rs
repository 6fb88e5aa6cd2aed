use serde::Deserialize;
use argh::FromArgs;
use super::error::{Error, Result};

/// Approximate the shortest closed tour over random cities with an ant colony
#[derive(FromArgs)]
pub struct Arguments {
    /// number of cities to generate
    #[argh(positional)]
    pub cities: usize,
    /// path to configuration file
    #[argh(option, short='c')]
    pub config: Option<String>,
    /// override base random seed
    #[argh(option, short='s')]
    pub seed: Option<u64>,
    /// override number of iterations
    #[argh(option, short='i')]
    pub iterations: Option<usize>,
    /// override pheromone carry-over policy (winner or aggregate)
    #[argh(option, short='p')]
    pub policy: Option<String>,
    /// override probability of the exploration shortcut
    #[argh(option, short='r')]
    pub random_factor: Option<f64>,
    /// draw randomness from OS entropy instead of the base seed
    #[argh(switch)]
    pub ambient: bool,
    /// construct tours on the calling thread only
    #[argh(switch)]
    pub sequential: bool,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub name: String,
    pub policy: String,
    pub parallel: bool,
    pub deterministic: bool,
    pub seed: u64,
    pub max_iterations: usize,
    pub ants: Option<usize>,
    pub parameters: Parameters,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Parameters {
    /// weight of pheromone strength
    pub alpha: f64,
    /// weight of inverse distance
    pub beta: f64,
    /// factor every pheromone entry is multiplied by after an iteration
    pub evaporation: f64,
    /// pheromone laid per unit of inverse tour length
    pub q: f64,
    /// initial pheromone on every edge
    pub c: f64,
    /// ants per city
    pub ant_factor: f64,
    /// probability of trying the exploration shortcut
    pub random_factor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: String::from("default"),
            policy: String::from("winner"),
            parallel: true,
            deterministic: true,
            seed: 0,
            max_iterations: 100,
            ants: None,
            parameters: Parameters::default(),
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            alpha: 1.0,
            beta: 5.0,
            evaporation: 0.5,
            q: 500.0,
            c: 1.0,
            ant_factor: 0.8,
            random_factor: 0.01,
        }
    }
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(iterations) = args.iterations {
            self.max_iterations = iterations;
        }
        if let Some(policy) = &args.policy {
            self.policy = policy.clone();
        }
        if let Some(random_factor) = args.random_factor {
            self.parameters.random_factor = num::clamp(random_factor, 0.0, 1.0);
        }
        if args.ambient {
            self.deterministic = false;
        }
        if args.sequential {
            self.parallel = false;
        }
    }
    pub fn validate(&self) -> Result<()> {
        let params = &self.parameters;
        let checks = [
            ("alpha", params.alpha, params.alpha >= 0.0),
            ("beta", params.beta, params.beta >= 0.0),
            ("evaporation", params.evaporation, (0.0..=1.0).contains(&params.evaporation)),
            ("q", params.q, params.q >= 0.0),
            ("c", params.c, params.c >= 0.0),
            ("ant_factor", params.ant_factor, params.ant_factor > 0.0),
            ("random_factor", params.random_factor, (0.0..=1.0).contains(&params.random_factor)),
            ("max_iterations", self.max_iterations as f64, self.max_iterations > 0),
        ];
        for &(name, value, ok) in checks.iter() {
            if !ok {
                return Err(Error::InvalidParameter { name, value });
            }
        }
        match self.policy.as_str() {
            "winner" | "aggregate" => Ok(()),
            other => Err(Error::UnknownPolicy(other.to_owned())),
        }
    }
}
