use rand::Rng;
use crate::component::{Ant, PheromoneMatrix};
use crate::network::DistanceGraph;
use crate::utils::config::Parameters;


/// Builds one ant's tour against a fixed pheromone snapshot. Deposits go to
/// the ant's private copy of the snapshot, never to the snapshot itself.
pub struct TourConstructor<'a> {
    graph: &'a DistanceGraph,
    snapshot: &'a PheromoneMatrix,
    params: &'a Parameters,
}

impl<'a> TourConstructor<'a> {
    pub fn new(graph: &'a DistanceGraph, snapshot: &'a PheromoneMatrix, params: &'a Parameters) -> Self {
        debug_assert_eq!(graph.len(), snapshot.len());
        TourConstructor { graph, snapshot, params }
    }
    pub fn construct<R: Rng>(&self, ant: &mut Ant, rng: &mut R) {
        ant.reset(rng);
        ant.trails.replace_with(self.snapshot);
        while self.step(ant, rng).is_some() {}
        ant.finalize(self.graph);
    }
    /// Moves the ant one city further and returns that city, or `None` once
    /// every city is visited.
    pub fn step<R: Rng>(&self, ant: &mut Ant, rng: &mut R) -> Option<usize> {
        let from = ant.current();
        let next = self.select_next(ant, rng)?;
        ant.visit(next);

        let contribution = self.params.q / ant.partial_length(self.graph);
        ant.trails.deposit(from, next, contribution);
        ant.trails.deposit(next, ant.first(), contribution);
        Some(next)
    }
    fn select_next<R: Rng>(&self, ant: &mut Ant, rng: &mut R) -> Option<usize> {
        if ant.assigned() == ant.len() {
            return None;
        }
        // exploration shortcut: jump to a random index if it is still unvisited
        let t = rng.gen_range(0..ant.len() - ant.assigned() + 1);
        let explore = rng.gen::<f64>() < self.params.random_factor;
        if explore && !ant.is_visited(t) {
            return Some(t);
        }

        self.weigh(ant);
        let r: f64 = rng.gen();
        // nothing qualifies when every probability is NaN or below `r`
        last_at_least(&ant.probabilities, |city| ant.is_visited(city), r)
            .or_else(|| ant.first_unvisited())
    }
    /// Fills the ant's probability buffer for moving away from its current
    /// city. Visited cities get zero. A zero total leaves NaN, which no draw
    /// satisfies.
    fn weigh(&self, ant: &mut Ant) {
        let from = ant.current();
        let total: f64 = (0..ant.len())
            .filter(|&to| !ant.is_visited(to))
            .map(|to| self.desirability(from, to))
            .sum();
        for to in 0..ant.len() {
            let probability = match ant.is_visited(to) {
                true  => 0.0,
                false => self.desirability(from, to) / total,
            };
            ant.probabilities[to] = probability;
        }
    }
    fn desirability(&self, from: usize, to: usize) -> f64 {
        let pheromone = self.snapshot.get(from, to).powf(self.params.alpha);
        let visibility = (1.0 / self.graph.distance(from, to)).powf(self.params.beta);
        pheromone * visibility
    }
}

/// Scans all cities in ascending order and keeps the LAST unvisited one whose
/// probability is at least `r`. Returning on the first match picks a
/// different city whenever several qualify.
pub fn last_at_least<F>(probabilities: &[f64], is_visited: F, r: f64) -> Option<usize>
where
    F: Fn(usize) -> bool,
{
    let mut chosen = None;
    for (city, &probability) in probabilities.iter().enumerate() {
        if probability >= r && !is_visited(city) {
            chosen = Some(city);
        }
    }
    chosen
}


#[cfg(test)]
mod tests {
    use super::{last_at_least, TourConstructor};
    use crate::component::{Ant, AntState, PheromoneMatrix};
    use crate::network::DistanceGraph;
    use crate::utils::config::Parameters;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    fn square() -> DistanceGraph {
        DistanceGraph::new(vec![
            vec![ 0.0, 10.0, 15.0, 20.0],
            vec![10.0,  0.0, 35.0, 25.0],
            vec![15.0, 35.0,  0.0, 30.0],
            vec![20.0, 25.0, 30.0,  0.0],
        ]).unwrap()
    }

    fn setup() -> DistanceGraph {
        DistanceGraph::new(vec![
            vec![ 0.0, 10.0, 15.0, 20.0, 12.0],
            vec![10.0,  0.0, 35.0, 25.0, 17.0],
            vec![15.0, 35.0,  0.0, 30.0,  8.0],
            vec![20.0, 25.0, 30.0,  0.0, 40.0],
            vec![12.0, 17.0,  8.0, 40.0,  0.0],
        ]).unwrap()
    }

    fn assert_permutation(tour: &[usize], n: usize) {
        let mut sorted = tour.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn it_keeps_last_qualifying_city() {
        let probabilities = [0.6, 0.1, 0.5, 0.7];
        assert_eq!(last_at_least(&probabilities, |_| false, 0.5), Some(3));
        assert_eq!(last_at_least(&probabilities, |city| city == 3, 0.5), Some(2));
        assert_eq!(last_at_least(&probabilities, |city| city >= 2, 0.5), Some(0));
        assert_eq!(last_at_least(&probabilities, |_| false, 0.9), None);
        assert_eq!(last_at_least(&[f64::NAN, f64::NAN], |_| false, 0.0), None);
    }

    #[test]
    fn it_builds_permutation() {
        let graph = setup();
        let snapshot = PheromoneMatrix::new(5, 1.0);
        let params = Parameters { random_factor: 0.5, ..Parameters::default() };
        let constructor = TourConstructor::new(&graph, &snapshot, &params);
        let mut ant = Ant::new(5);
        for seed in 0..20 {
            let mut rng = ChaChaRng::seed_from_u64(seed);
            constructor.construct(&mut ant, &mut rng);
            assert_eq!(ant.state(), AntState::Complete);
            assert_permutation(ant.tour(), 5);
            assert_eq!(ant.length(), graph.tour_length(ant.tour()));
        }
    }

    #[test]
    fn it_falls_back_to_first_unvisited() {
        let graph = setup();
        let snapshot = PheromoneMatrix::new(5, 0.0);
        let params = Parameters { random_factor: 0.0, ..Parameters::default() };
        let constructor = TourConstructor::new(&graph, &snapshot, &params);
        let mut ant = Ant::new(5);
        let mut rng = ChaChaRng::seed_from_u64(5);
        constructor.construct(&mut ant, &mut rng);

        let start = ant.first();
        let rest: Vec<usize> = (0..5).filter(|&city| city != start).collect();
        assert_eq!(&ant.tour()[1..], rest.as_slice());
    }

    #[test]
    fn it_follows_dominant_trail() {
        let graph = setup();
        let mut snapshot = PheromoneMatrix::new(5, 1.0);
        for city in 0..5 {
            snapshot.deposit(city, (city + 1) % 5, 1e12);
        }
        let params = Parameters { beta: 0.0, random_factor: 0.0, ..Parameters::default() };
        let constructor = TourConstructor::new(&graph, &snapshot, &params);
        let mut ant = Ant::new(5);
        let mut rng = ChaChaRng::seed_from_u64(17);
        constructor.construct(&mut ant, &mut rng);

        let tour = ant.tour();
        for pair in tour.windows(2) {
            assert_eq!(pair[1], (pair[0] + 1) % 5);
        }
    }

    #[test]
    fn it_deposits_on_private_view() {
        let graph = setup();
        let snapshot = PheromoneMatrix::new(5, 1.0);
        let params = Parameters::default();
        let constructor = TourConstructor::new(&graph, &snapshot, &params);
        let mut ant = Ant::new(5);
        let mut rng = ChaChaRng::seed_from_u64(23);
        constructor.construct(&mut ant, &mut rng);

        let (first, second) = (ant.tour()[0], ant.tour()[1]);
        assert!(ant.trails().get(first, second) > 1.0);
        assert_eq!(ant.trails().get(first, first), 1.0);
        assert!(ant.trails().min() >= 1.0);
        assert_eq!(snapshot, PheromoneMatrix::new(5, 1.0));
    }

    #[test]
    fn it_deposits_nothing_without_q() {
        let graph = setup();
        let snapshot = PheromoneMatrix::new(5, 2.0);
        let params = Parameters { q: 0.0, ..Parameters::default() };
        let constructor = TourConstructor::new(&graph, &snapshot, &params);
        let mut ant = Ant::new(5);
        let mut rng = ChaChaRng::seed_from_u64(29);
        constructor.construct(&mut ant, &mut rng);
        assert_eq!(ant.trails(), &snapshot);
    }

    #[test]
    fn it_deposits_on_step_and_wrap_edges() {
        let graph = square();
        let snapshot = PheromoneMatrix::new(4, 0.0);
        let params = Parameters { random_factor: 0.0, ..Parameters::default() };
        let constructor = TourConstructor::new(&graph, &snapshot, &params);
        let mut rng = ChaChaRng::seed_from_u64(1);
        let mut ant = Ant::new(4);
        ant.visit(2);
        ant.trails.replace_with(&snapshot);

        // buffer [2, 0, 0, 0] costs 15 + 0 + 0 + 15
        assert_eq!(constructor.step(&mut ant, &mut rng), Some(0));
        assert_eq!(ant.trails().get(2, 0), 500.0 / 30.0);
        assert_eq!(ant.trails().get(0, 2), 500.0 / 30.0);

        // buffer [2, 0, 1, 0] costs 15 + 10 + 10 + 15
        assert_eq!(constructor.step(&mut ant, &mut rng), Some(1));
        assert_eq!(ant.trails().get(0, 1), 500.0 / 50.0);
        assert_eq!(ant.trails().get(1, 2), 500.0 / 50.0);

        // buffer [2, 0, 1, 3] costs 15 + 10 + 25 + 30
        assert_eq!(constructor.step(&mut ant, &mut rng), Some(3));
        assert_eq!(ant.trails().get(1, 3), 500.0 / 80.0);
        assert_eq!(ant.trails().get(3, 2), 500.0 / 80.0);

        let trails = ant.trails().clone();
        assert_eq!(constructor.step(&mut ant, &mut rng), None);
        assert_eq!(ant.trails(), &trails);
        assert_eq!(trails.get(2, 0), 500.0 / 30.0);
        assert_eq!(trails.get(0, 3), 0.0);
    }

    #[test]
    fn it_measures_deposit_over_stale_buffer() {
        let graph = square();
        let snapshot = PheromoneMatrix::new(4, 0.0);
        let params = Parameters { random_factor: 0.0, ..Parameters::default() };
        let constructor = TourConstructor::new(&graph, &snapshot, &params);
        let mut rng = ChaChaRng::seed_from_u64(2);
        let mut ant = Ant::new(4);
        [3, 1, 0, 2].iter().for_each(|&city| ant.visit(city));
        ant.finalize(&graph);
        ant.reset(&mut rng);
        ant.trails.replace_with(&snapshot);

        let mut buffer = ant.tour().to_vec();
        let start = buffer[0];
        let next = (0..4).find(|&city| city != start).unwrap();
        buffer[1] = next;
        let contribution = 500.0 / graph.tour_length(&buffer);

        assert_eq!(constructor.step(&mut ant, &mut rng), Some(next));
        assert_eq!(ant.tour(), buffer.as_slice());
        assert_eq!(ant.trails().get(start, next), contribution);
        assert_eq!(ant.trails().get(next, start), contribution);
    }

    #[test]
    fn it_prefers_shortcut_over_weighted_rule() {
        let graph = square();
        let mut snapshot = PheromoneMatrix::new(4, 1.0);
        snapshot.deposit(0, 1, 1e12);
        let params = Parameters { beta: 0.0, random_factor: 1.0, ..Parameters::default() };
        let constructor = TourConstructor::new(&graph, &snapshot, &params);

        let mut shortcuts = 0;
        for seed in 0..64 {
            let mut rng = ChaChaRng::seed_from_u64(seed);
            let t: usize = rng.clone().gen_range(0..4);
            let mut ant = Ant::new(4);
            ant.visit(0);
            ant.trails.replace_with(&snapshot);
            let next = constructor.step(&mut ant, &mut rng);
            match t {
                0 => assert_eq!(next, Some(1)),
                _ => assert_eq!(next, Some(t)),
            }
            if t > 1 {
                shortcuts += 1;
            }
        }
        assert!(shortcuts > 0);
    }
}
