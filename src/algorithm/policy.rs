use enum_dispatch::enum_dispatch;
use crate::component::{Ant, PheromoneMatrix};
use crate::utils::error::{Error, Result};


#[enum_dispatch]
#[derive(Clone, Copy, Debug)]
pub enum CarryOverEnum {
    WinnerTakesAll,
    Aggregate,
}

/// Decides which private pheromone views survive into the global matrix.
/// Evaporation happens afterwards and is not part of the policy.
#[enum_dispatch(CarryOverEnum)]
pub trait CarryOver {
    /// `ranked` holds the completed ants by ascending tour length and is
    /// never empty.
    fn carry_over(&self, global: &mut PheromoneMatrix, snapshot: &PheromoneMatrix, ranked: &[&Ant]);
}

/// The matrix becomes the winner's private view; other ants' deposits are
/// dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct WinnerTakesAll;

/// The matrix becomes the snapshot plus every ant's deposits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Aggregate;

impl CarryOver for WinnerTakesAll {
    fn carry_over(&self, global: &mut PheromoneMatrix, _snapshot: &PheromoneMatrix, ranked: &[&Ant]) {
        if let Some(winner) = ranked.first() {
            global.replace_with(winner.trails());
        }
    }
}

impl CarryOver for Aggregate {
    fn carry_over(&self, global: &mut PheromoneMatrix, snapshot: &PheromoneMatrix, ranked: &[&Ant]) {
        global.replace_with(snapshot);
        for ant in ranked.iter() {
            global.absorb(ant.trails(), snapshot);
        }
    }
}

impl CarryOverEnum {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "winner"    => Ok(WinnerTakesAll.into()),
            "aggregate" => Ok(Aggregate.into()),
            _           => Err(Error::UnknownPolicy(name.to_owned())),
        }
    }
}
