use rayon::prelude::*;
use crate::utils::config::Config;


/// Where the ants of one iteration run. Both variants map every item on its
/// own and rank the results by ascending key; nothing else is promised, so
/// the colony behaves the same on either.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Executor {
    Sequential,
    Parallel,
}

impl Executor {
    pub fn from_config(config: &Config) -> Self {
        match config.parallel {
            true  => Executor::Parallel,
            false => Executor::Sequential,
        }
    }
    /// The head of the returned ranking is the top-1 result. Equal keys keep
    /// the order of `items`.
    pub fn rank<T, K, V, F>(&self, items: Vec<T>, transform: F) -> Vec<(K, V)>
    where
        T: Send,
        K: Ord + Send,
        V: Send,
        F: Fn(T) -> (K, V) + Sync + Send,
    {
        let mut pairs: Vec<(K, V)> = match self {
            Executor::Sequential => items.into_iter().map(transform).collect(),
            Executor::Parallel   => items.into_par_iter().map(transform).collect(),
        };
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }
}
