//! Genetic-algorithm engine for 0/1 knapsack selection.
//!
//! Provides a small, single-threaded GA engine over fixed-length binary
//! genomes, applied to the classic knapsack problem: pick a subset of
//! items maximizing total value under a weight budget.
//!
//! - **[`ga`]**: The engine itself — genome/population model, parent
//!   selection, single-point crossover, flip mutation, and the
//!   generational evolution loop with its termination policy.
//! - **[`knapsack`]**: The problem definition — an immutable item
//!   catalog plus a weight limit, scored with a hard feasibility
//!   constraint (overweight genomes have fitness 0).
//!
//! # Architecture
//!
//! The engine knows nothing about knapsacks. It drives any type
//! implementing [`ga::Problem`], which supplies genome creation and
//! fitness evaluation; the operators and the loop are fixed. The whole
//! random stream is seedable through [`ga::GaConfig`] for reproducible
//! runs.

pub mod ga;
pub mod knapsack;
