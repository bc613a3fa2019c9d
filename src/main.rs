//! evosack command line.
//!
//! Runs the GA over an item catalog (a JSON file, or the built-in
//! expedition catalog) and reports the best selection found as plain
//! text.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use evosack::ga::{GaConfig, GaRunner};
use evosack::knapsack::{Item, Knapsack};

#[derive(Parser)]
#[command(name = "evosack")]
#[command(version, about = "Genetic-algorithm engine for 0/1 knapsack selection")]
struct Args {
    /// Item catalog: a JSON array of {"name", "value", "weight"}
    /// records. The built-in expedition catalog is used when absent.
    #[arg(long, value_name = "FILE")]
    items: Option<PathBuf>,

    /// Weight budget for the knapsack.
    #[arg(long, default_value_t = 30)]
    weight_limit: u64,

    /// Number of genomes per generation.
    #[arg(long, default_value_t = 10)]
    population_size: usize,

    /// Stop as soon as a genome reaches this fitness.
    #[arg(long, default_value_t = 1000)]
    fitness_limit: u64,

    /// Hard cap on the number of generations.
    #[arg(long, default_value_t = 100)]
    generation_limit: usize,

    /// Bit-flip attempts per offspring.
    #[arg(long, default_value_t = 1)]
    mutation_flips: usize,

    /// Probability that each attempted flip is applied.
    #[arg(long, default_value_t = 0.5)]
    mutation_probability: f64,

    /// Seed for the random stream; omit for a fresh run each time.
    #[arg(long)]
    seed: Option<u64>,
}

fn expedition_catalog() -> Vec<Item> {
    vec![
        Item::new("Sleeping Bag", 15, 15),
        Item::new("Rope", 7, 3),
        Item::new("Pocket Knife", 10, 2),
        Item::new("Flashlight", 5, 5),
        Item::new("Bottle", 8, 9),
        Item::new("Sugar Candy", 10, 2),
        Item::new("Pistol Crossbow", 13, 8),
        Item::new("Compass", 9, 2),
        Item::new("Solar Powered Radio", 15, 12),
        Item::new("Backpack", 14, 9),
    ]
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let items = match &args.items {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => expedition_catalog(),
    };
    log::info!(
        "{} items, weight limit {}",
        items.len(),
        args.weight_limit
    );

    let knapsack = Knapsack::new(items, args.weight_limit);
    let mut config = GaConfig::default()
        .with_population_size(args.population_size)
        .with_fitness_limit(args.fitness_limit)
        .with_generation_limit(args.generation_limit)
        .with_mutation_flips(args.mutation_flips)
        .with_mutation_probability(args.mutation_probability);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let result = GaRunner::run(&knapsack, &config)?;
    let best = &result.population[0];

    println!("number of generations: {}", result.generations);
    println!("best fitness: {}", result.best_fitness);
    println!(
        "total weight: {} / {}",
        knapsack.total_weight(best)?,
        knapsack.weight_limit()
    );
    let names: Vec<&str> = knapsack
        .selected(best)?
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    println!("best solution: {}", names.join(", "));

    Ok(())
}
