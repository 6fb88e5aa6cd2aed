use std::fmt;
use itertools::Itertools;
use crate::network::Tour;
use super::Ant;


/// Best tour seen so far. It only ever moves to a strictly shorter tour.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub length: f64,
    pub tour: Tour,
}

impl Solution {
    /// Seeds from any ant, even one that has not finished a tour; such an
    /// ant has an infinite length and is beaten by the first complete tour.
    pub fn seed(ant: &Ant) -> Self {
        Solution { length: ant.length(), tour: ant.tour().to_vec() }
    }
    /// Returns whether the ant replaced the current solution.
    pub fn challenge(&mut self, ant: &Ant) -> bool {
        if ant.length() < self.length {
            *self = Solution::seed(ant);
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Shortest distance length: {} and path = [{}]",
               self.length, self.tour.iter().join(", "))
    }
}
