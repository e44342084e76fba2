//! Cross-algorithm comparison.
//!
//! Picks the best algorithm per metric from a [`SimulationResults`] map:
//!
//! | Category | Best |
//! |----------|------|
//! | Avg Turnaround | lowest |
//! | Avg Waiting | lowest |
//! | CPU Utilization | highest |
//!
//! Ties go to the algorithm earlier in canonical order. An overall winner
//! exists when one algorithm takes at least two of the three categories.

use serde::{Deserialize, Serialize};

use crate::scheduler::AlgorithmKind;
use crate::simulator::SimulationResults;

/// Winner of one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWinner {
    pub algorithm: AlgorithmKind,
    pub value: f64,
}

/// Best algorithm per metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub best_turnaround: CategoryWinner,
    pub best_waiting: CategoryWinner,
    pub best_utilization: CategoryWinner,
}

impl Comparison {
    /// Compares every record in `results`. `None` if `results` is empty.
    pub fn from_results(results: &SimulationResults) -> Option<Self> {
        Some(Self {
            best_turnaround: pick(results, |m| m.avg_turnaround_time, Better::Lower)?,
            best_waiting: pick(results, |m| m.avg_waiting_time, Better::Lower)?,
            best_utilization: pick(results, |m| m.cpu_utilization, Better::Higher)?,
        })
    }

    /// Algorithm winning two or more categories, with its win count.
    pub fn overall_winner(&self) -> Option<(AlgorithmKind, usize)> {
        let winners = [
            self.best_turnaround.algorithm,
            self.best_waiting.algorithm,
            self.best_utilization.algorithm,
        ];
        winners
            .iter()
            .map(|&kind| (kind, winners.iter().filter(|&&w| w == kind).count()))
            .filter(|&(_, wins)| wins >= 2)
            .max_by_key(|&(_, wins)| wins)
    }
}

#[derive(Clone, Copy)]
enum Better {
    Lower,
    Higher,
}

fn pick(
    results: &SimulationResults,
    metric: impl Fn(&crate::models::Metrics) -> f64,
    better: Better,
) -> Option<CategoryWinner> {
    let mut best: Option<CategoryWinner> = None;
    for (&algorithm, record) in results {
        let value = metric(&record.metrics);
        let improves = match best {
            None => true,
            Some(current) => match better {
                Better::Lower => value < current.value,
                Better::Higher => value > current.value,
            },
        };
        if improves {
            best = Some(CategoryWinner { algorithm, value });
        }
    }
    best
}
