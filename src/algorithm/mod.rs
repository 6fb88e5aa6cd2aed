mod colony;
mod constructor;
mod executor;
mod policy;
mod seeding;

pub use colony::Colony;
pub use constructor::{last_at_least, TourConstructor};
pub use executor::Executor;
pub use policy::{Aggregate, CarryOver, CarryOverEnum, WinnerTakesAll};
pub use seeding::RandomMode;
