/// Square matrix of per-edge desirability. Entries only ever grow through
/// deposits of non-negative amounts and shrink through multiplication by a
/// non-negative factor, so they stay non-negative.
#[derive(Clone, Debug, PartialEq)]
pub struct PheromoneMatrix {
    n: usize,
    trails: Vec<f64>,
}

impl PheromoneMatrix {
    pub fn new(n: usize, c: f64) -> Self {
        debug_assert!(c >= 0.0);
        PheromoneMatrix { n, trails: vec![c; n * n] }
    }
    pub fn len(&self) -> usize {
        self.n
    }
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.trails[from * self.n + to]
    }
    /// Read-only copy handed to every ant of one iteration.
    pub fn snapshot(&self) -> PheromoneMatrix {
        self.clone()
    }
    pub fn deposit(&mut self, from: usize, to: usize, amount: f64) {
        debug_assert!(amount >= 0.0);
        self.trails[from * self.n + to] += amount;
    }
    pub fn evaporate(&mut self, rate: f64) {
        debug_assert!(rate >= 0.0);
        self.trails.iter_mut()
            .for_each(|trail| *trail *= rate);
    }
    pub fn replace_with(&mut self, view: &PheromoneMatrix) {
        debug_assert_eq!(self.n, view.n);
        self.trails.copy_from_slice(&view.trails);
    }
    /// Adds whatever `view` accumulated on top of `base`.
    pub fn absorb(&mut self, view: &PheromoneMatrix, base: &PheromoneMatrix) {
        debug_assert_eq!(self.n, view.n);
        debug_assert_eq!(self.n, base.n);
        for ((trail, after), before) in self.trails.iter_mut()
            .zip(view.trails.iter())
            .zip(base.trails.iter()) {
            *trail += f64::max(after - before, 0.0);
        }
    }
    pub fn min(&self) -> f64 {
        self.trails.iter().cloned().fold(f64::INFINITY, f64::min)
    }
    pub fn max(&self) -> f64 {
        self.trails.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }
}
