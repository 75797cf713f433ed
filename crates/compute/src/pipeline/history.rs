//! Initial state from the historical batch.

use ripple_core::{Event, SeqIndex, SequencedEvent};
use ripple_graph::SocialGraph;

/// Apply one event to the graph with no anomaly check.
///
/// Unfriend with an unknown endpoint is tolerated: the batch may have lost
/// the matching befriend.
pub fn replay_event(graph: &mut SocialGraph, event: Event, seq: SeqIndex) {
    match event {
        Event::Purchase {
            id,
            amount,
            timestamp,
        } => graph.record_purchase(&id, amount, &timestamp, seq),
        Event::Befriend { id1, id2, .. } => graph.add_friend(&id1, &id2),
        Event::Unfriend { id1, id2, .. } => {
            graph.remove_friend(&id1, &id2);
        }
    }
}

/// Replay the batch into a fresh graph.
///
/// Returns the graph and the highest sequence index consumed, which is
/// where stream numbering continues from. `None` for an empty batch.
pub fn build_history<I>(events: I) -> (SocialGraph, Option<SeqIndex>)
where
    I: IntoIterator<Item = SequencedEvent>,
{
    let mut graph = SocialGraph::new();
    let mut last_seq: Option<SeqIndex> = None;

    for SequencedEvent { seq, event } in events {
        last_seq = Some(last_seq.map_or(seq, |last| last.max(seq)));
        replay_event(&mut graph, event, seq);
    }

    (graph, last_seq)
}
