//! Live event replay with anomaly detection.

use ripple_core::{DetectionParams, Event, SeqIndex};
use ripple_graph::SocialGraph;

use super::anomaly::{evaluate, AnomalyRecord};
use super::history::replay_event;
use crate::algorithms::network::resolve_network;

/// Applies streamed events to a graph one at a time.
///
/// Each event gets the next sequence index, starting at the offset handed
/// over from the history build. A purchase is scored against the graph as
/// it stood *before* the purchase, then recorded.
pub struct StreamProcessor<'g> {
    graph: &'g mut SocialGraph,
    params: DetectionParams,
    next_seq: SeqIndex,
}

impl<'g> StreamProcessor<'g> {
    pub fn new(graph: &'g mut SocialGraph, params: DetectionParams, offset: SeqIndex) -> Self {
        Self {
            graph,
            params,
            next_seq: offset,
        }
    }

    /// Sequence index the next event will receive.
    pub fn next_seq(&self) -> SeqIndex {
        self.next_seq
    }

    /// Apply one event, returning the anomaly record it triggered, if any.
    pub fn apply(&mut self, event: Event) -> Option<AnomalyRecord> {
        let seq = self.next_seq;
        self.next_seq += 1;

        let record = match &event {
            Event::Purchase {
                id,
                amount,
                timestamp,
            } if self.graph.contains(id) => {
                let network = resolve_network(self.graph, id, self.params.degree());
                if network.is_empty() {
                    None
                } else {
                    evaluate(
                        self.graph,
                        id,
                        amount,
                        timestamp,
                        &network,
                        self.params.window(),
                    )
                }
            }
            // Unknown buyer: nothing to compare against yet.
            _ => None,
        };

        replay_event(self.graph, event, seq);
        record
    }

    /// Apply every event in order, collecting anomaly records in emission order.
    pub fn process<I>(&mut self, events: I) -> Vec<AnomalyRecord>
    where
        I: IntoIterator<Item = Event>,
    {
        events
            .into_iter()
            .filter_map(|event| self.apply(event))
            .collect()
    }
}

/// Replay `events` onto `graph`, numbering them from `offset`.
pub fn process_stream<I>(
    graph: &mut SocialGraph,
    events: I,
    params: DetectionParams,
    offset: SeqIndex,
) -> Vec<AnomalyRecord>
where
    I: IntoIterator<Item = Event>,
{
    StreamProcessor::new(graph, params, offset).process(events)
}
