mod ant;
mod pheromone;
mod solution;

pub use ant::{Ant, AntState};
pub use pheromone::PheromoneMatrix;
pub use solution::Solution;
