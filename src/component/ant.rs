use rand::Rng;
use crate::network::DistanceGraph;
use super::PheromoneMatrix;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AntState {
    Idle,
    Constructing,
    Complete,
}

/// One tour builder of the population. The buffers are allocated once and
/// reused by every iteration; `reset` clears the visited set but leaves the
/// tour buffer as the previous iteration left it.
#[derive(Clone, Debug)]
pub struct Ant {
    tour: Vec<usize>,
    visited: Vec<bool>,
    assigned: usize,
    length: f64,
    state: AntState,
    pub(crate) probabilities: Vec<f64>,
    pub(crate) trails: PheromoneMatrix,
}

impl Ant {
    pub fn new(n: usize) -> Self {
        Ant {
            tour: vec![0; n],
            visited: vec![false; n],
            assigned: 0,
            length: f64::INFINITY,
            state: AntState::Idle,
            probabilities: vec![0.0; n],
            trails: PheromoneMatrix::new(n, 0.0),
        }
    }
    pub fn len(&self) -> usize {
        self.tour.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.visited.iter_mut()
            .for_each(|visited| *visited = false);
        self.assigned = 0;
        self.length = f64::INFINITY;
        let start = rng.gen_range(0..self.len());
        self.visit(start);
        self.state = AntState::Constructing;
    }
    pub fn visit(&mut self, city: usize) {
        debug_assert!(!self.visited[city]);
        debug_assert!(self.assigned < self.len());
        self.tour[self.assigned] = city;
        self.visited[city] = true;
        self.assigned += 1;
    }
    pub fn is_visited(&self, city: usize) -> bool {
        self.visited[city]
    }
    pub fn first_unvisited(&self) -> Option<usize> {
        self.visited.iter().position(|&visited| !visited)
    }
    pub fn first(&self) -> usize {
        self.tour[0]
    }
    pub fn current(&self) -> usize {
        debug_assert!(self.assigned > 0);
        self.tour[self.assigned - 1]
    }
    pub fn assigned(&self) -> usize {
        self.assigned
    }
    /// Cyclic cost over the whole tour buffer, including slots this
    /// iteration has not assigned yet.
    pub fn partial_length(&self, graph: &DistanceGraph) -> f64 {
        graph.tour_length(&self.tour)
    }
    pub fn finalize(&mut self, graph: &DistanceGraph) {
        debug_assert_eq!(self.assigned, self.len());
        self.length = graph.tour_length(&self.tour);
        self.state = AntState::Complete;
    }
    pub fn state(&self) -> AntState {
        self.state
    }
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }
    /// Only meaningful once the ant is complete; infinite before.
    pub fn length(&self) -> f64 {
        self.length
    }
    pub fn trails(&self) -> &PheromoneMatrix {
        &self.trails
    }
}
