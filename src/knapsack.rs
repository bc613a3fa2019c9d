//! 0/1 knapsack problem definition.
//!
//! An immutable item catalog plus a weight budget, scored with a hard
//! feasibility constraint: a genome whose cumulative weight exceeds the
//! budget has fitness exactly 0, regardless of the value accrued.

use crate::ga::{GaError, Genome, Problem};
use serde::{Deserialize, Serialize};

/// A catalog entry. Created once from static configuration, never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub value: u64,
    pub weight: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, value: u64, weight: u64) -> Self {
        Self {
            name: name.into(),
            value,
            weight,
        }
    }
}

/// A knapsack instance: the item catalog and the weight budget.
///
/// Implements [`Problem`], so it plugs directly into
/// [`GaRunner`](crate::ga::GaRunner); genome position `i` encodes
/// whether item `i` is included.
#[derive(Debug, Clone)]
pub struct Knapsack {
    items: Vec<Item>,
    weight_limit: u64,
}

impl Knapsack {
    pub fn new(items: Vec<Item>, weight_limit: u64) -> Self {
        Self {
            items,
            weight_limit,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn weight_limit(&self) -> u64 {
        self.weight_limit
    }

    fn check_dimensions(&self, genome: &Genome) -> Result<(), GaError> {
        if genome.len() != self.items.len() {
            return Err(GaError::DimensionMismatch {
                genome: genome.len(),
                items: self.items.len(),
            });
        }
        Ok(())
    }

    /// Decodes a genome into the items it selects, in catalog order.
    ///
    /// # Errors
    ///
    /// [`GaError::DimensionMismatch`] if the genome's length does not
    /// match the catalog.
    pub fn selected(&self, genome: &Genome) -> Result<Vec<&Item>, GaError> {
        self.check_dimensions(genome)?;
        Ok(self
            .items
            .iter()
            .zip(genome.iter())
            .filter(|(_, included)| **included)
            .map(|(item, _)| item)
            .collect())
    }

    /// Total weight of the selection, with no regard for the budget.
    ///
    /// # Errors
    ///
    /// [`GaError::DimensionMismatch`] if the genome's length does not
    /// match the catalog.
    pub fn total_weight(&self, genome: &Genome) -> Result<u64, GaError> {
        Ok(self.selected(genome)?.iter().map(|item| item.weight).sum())
    }
}

impl Problem for Knapsack {
    fn genome_length(&self) -> usize {
        self.items.len()
    }

    /// Total value of the included items, or 0 for an infeasible
    /// selection.
    ///
    /// Items are scanned in index order and the running weight is
    /// checked after each inclusion; the scan stops at the first
    /// overweight prefix. Since weights are non-negative this is
    /// equivalent to checking the final weight, but the short-circuit
    /// is kept as the scoring contract.
    fn evaluate(&self, genome: &Genome) -> Result<u64, GaError> {
        self.check_dimensions(genome)?;

        let mut weight = 0u64;
        let mut value = 0u64;
        for (item, &included) in self.items.iter().zip(genome.iter()) {
            if included {
                weight += item.weight;
                value += item.value;
                if weight > self.weight_limit {
                    return Ok(0);
                }
            }
        }
        Ok(value)
    }
}
