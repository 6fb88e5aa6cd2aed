pub mod algorithm;
pub mod component;
pub mod network;
pub mod utils;

/// Smallest city count that forms a non-degenerate closed tour.
pub const MIN_CITIES: usize = 2;
