use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use crate::utils::config::Config;

const GRAPH_STREAM: u64 = u64::MAX;


/// Source of randomness for each ant task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RandomMode {
    /// Every `(iteration, ant)` pair reads its own ChaCha stream of the base
    /// seed, so results do not depend on thread count or scheduling.
    Seeded(u64),
    /// Every task seeds from OS entropy. Runs are not reproducible.
    Ambient,
}

impl RandomMode {
    pub fn from_config(config: &Config) -> Self {
        match config.deterministic {
            true  => RandomMode::Seeded(config.seed),
            false => RandomMode::Ambient,
        }
    }
    pub fn task_rng(&self, iteration: usize, ant: usize) -> ChaChaRng {
        debug_assert!(ant <= u32::MAX as usize);
        let stream = ((iteration as u64) << 32) | ant as u64;
        self.stream_rng(stream)
    }
    pub fn graph_rng(&self) -> ChaChaRng {
        self.stream_rng(GRAPH_STREAM)
    }
    fn stream_rng(&self, stream: u64) -> ChaChaRng {
        match *self {
            RandomMode::Seeded(base) => {
                let mut rng = ChaChaRng::seed_from_u64(base);
                rng.set_stream(stream);
                rng
            }
            RandomMode::Ambient => ChaChaRng::from_entropy(),
        }
    }
}
