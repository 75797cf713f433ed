//! Per-purchase anomaly decision.

use std::collections::HashSet;

use ripple_core::{Amount, PersonId};
use ripple_graph::SocialGraph;
use serde::Serialize;
use tracing::debug;

use crate::algorithms::window_stats::aggregate_and_score;

/// Standard deviations above the network mean at which a purchase is flagged.
pub const ANOMALY_SIGMA: f64 = 3.0;

const PURCHASE_EVENT_TYPE: &str = "purchase";

/// One flagged purchase, in output field order.
///
/// `amount` is the source text verbatim; `mean` and `sd` are fixed to two
/// decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnomalyRecord {
    pub event_type: String,
    pub timestamp: String,
    pub id: PersonId,
    pub amount: String,
    pub mean: String,
    pub sd: String,
}

impl AnomalyRecord {
    fn new(id: &str, amount: &Amount, timestamp: &str, mean: f64, sd: f64) -> Self {
        Self {
            event_type: PURCHASE_EVENT_TYPE.to_string(),
            timestamp: timestamp.to_string(),
            id: id.to_string(),
            amount: amount.raw().to_string(),
            mean: format!("{:.2}", mean),
            sd: format!("{:.2}", sd),
        }
    }
}

/// Score a purchase against its buyer's network baseline.
///
/// Must run before the purchase is recorded, otherwise it would count
/// toward its own baseline. Returns `None` when the baseline has fewer than
/// two purchases or the amount does not strictly exceed
/// `mean + ANOMALY_SIGMA * sd`.
pub fn evaluate(
    graph: &SocialGraph,
    buyer: &str,
    amount: &Amount,
    timestamp: &str,
    network: &HashSet<PersonId>,
    window: usize,
) -> Option<AnomalyRecord> {
    let stats = aggregate_and_score(graph, network, window)?;

    if amount.value() > stats.threshold(ANOMALY_SIGMA) {
        debug!(
            id = %buyer,
            amount = %amount,
            mean = stats.mean,
            sd = stats.std_dev,
            baseline = stats.selected.len(),
            "anomalous purchase"
        );
        Some(AnomalyRecord::new(
            buyer,
            amount,
            timestamp,
            stats.mean,
            stats.std_dev,
        ))
    } else {
        None
    }
}
