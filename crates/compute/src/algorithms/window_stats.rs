//! Rolling purchase statistics over a resolved social network.
//!
//! The baseline for a purchase is the most recent `T` purchases (by
//! sequence index) made by anyone in the buyer's network, summarised by
//! its mean and population standard deviation.

use std::cmp::Reverse;
use std::collections::HashSet;

use ripple_core::{PersonId, Purchase};
use ripple_graph::SocialGraph;

/// Fewest purchases a baseline needs before it can be scored.
pub const MIN_BASELINE: usize = 2;

/// Baseline statistics for one network window.
#[derive(Debug, Clone)]
pub struct WindowStats<'g> {
    /// Selected purchases, most recent first.
    pub selected: Vec<&'g Purchase>,
    pub mean: f64,
    /// Population standard deviation (divides by `n`, not `n - 1`).
    pub std_dev: f64,
}

impl WindowStats<'_> {
    /// Amounts strictly above this are anomalous at `sigma` deviations.
    pub fn threshold(&self, sigma: f64) -> f64 {
        self.mean + sigma * self.std_dev
    }
}

/// Gather the network's purchases, keep the `window` most recent, and score them.
///
/// Returns `None` when fewer than [`MIN_BASELINE`] purchases are selected.
pub fn aggregate_and_score<'g>(
    graph: &'g SocialGraph,
    network: &HashSet<PersonId>,
    window: usize,
) -> Option<WindowStats<'g>> {
    let mut selected: Vec<&Purchase> = network
        .iter()
        .filter_map(|id| graph.get(id))
        .flat_map(|person| person.purchases())
        .collect();

    selected.sort_unstable_by_key(|p| Reverse(p.seq));
    selected.truncate(window);

    if selected.len() < MIN_BASELINE {
        return None;
    }

    let (mean, std_dev) = mean_and_std(selected.iter().map(|p| p.amount.value()));
    Some(WindowStats {
        selected,
        mean,
        std_dev,
    })
}

/// Mean and population standard deviation. Empty input gives `(0.0, 0.0)`.
pub fn mean_and_std<I>(values: I) -> (f64, f64)
where
    I: Iterator<Item = f64> + Clone,
{
    let n = values.clone().count();
    if n == 0 {
        return (0.0, 0.0);
    }
    let n = n as f64;

    let mean = values.clone().sum::<f64>() / n;
    let variance = values.map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;

    (mean, variance.sqrt())
}
