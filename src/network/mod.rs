mod graph;

pub use graph::DistanceGraph;

pub type Tour = Vec<usize>;
