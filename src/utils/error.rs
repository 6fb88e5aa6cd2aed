use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("a tour needs at least {1} cities, got {0}")]
    TooFewCities(usize, usize),
    #[error("{cities} cities with ant factor {ant_factor} leaves no ant to run")]
    EmptyPopulation { cities: usize, ant_factor: f64 },
    #[error("distance matrix row #{0:02} has {1} columns, expected {2}")]
    NotSquare(usize, usize, usize),
    #[error("distance from city #{from:02} to #{to:02} is out of range: {distance}")]
    InvalidDistance { from: usize, to: usize, distance: f64 },
    #[error("parameter `{name}` is out of range: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("unknown pheromone policy `{0}`")]
    UnknownPolicy(String),
    #[error("failed to read config file")]
    ReadConfig(#[from] std::io::Error),
    #[error("failed to parse config file")]
    ParseConfig(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
