use ant_tour::algorithm::{Colony, RandomMode};
use ant_tour::network::DistanceGraph;
use ant_tour::utils::config::{Arguments, Config};
use ant_tour::utils::error::Result;
use ant_tour::utils::yaml;
use std::process;
use std::time::Instant;

fn main() {
    env_logger::init();
    let args: Arguments = argh::from_env();
    if let Err(err) = run(args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(args: Arguments) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => yaml::load_config(path)?,
        None       => Config::default(),
    };
    config.override_from_args(&args);
    config.validate()?;

    let mut rng = RandomMode::from_config(&config).graph_rng();
    let graph = DistanceGraph::random(args.cities, &mut rng)?;
    let mut colony = Colony::new(graph, &config)?;

    let start = Instant::now();
    let best = colony.run();
    let elapsed = start.elapsed().as_millis();

    println!("{}", best);
    println!("Execution time (in milliseconds) {}", elapsed);
    Ok(())
}
