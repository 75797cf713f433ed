use ripple_core::{DetectionParams, Event, SeqIndex};
use ripple_graph::SocialGraph;
use tracing::info;

use crate::pipeline::{build_history, sequence_from, AnomalyRecord, StreamProcessor};

/// Owns the social graph for a run: built once from the batch, then fed the
/// stream.
pub struct DetectionEngine {
    graph: SocialGraph,
    params: DetectionParams,
    /// Sequence index the next streamed event will receive.
    next_seq: SeqIndex,
}

impl DetectionEngine {
    /// Replay the batch log into a fresh graph.
    pub fn from_history<I>(params: DetectionParams, batch: I) -> Self
    where
        I: IntoIterator<Item = Event>,
    {
        let start = std::time::Instant::now();

        info!("Building history (D={}, T={})...", params.degree(), params.window());
        let (graph, last_seq) = build_history(sequence_from(0, batch));
        let next_seq = last_seq.map_or(0, |last| last + 1);

        let stats = graph.stats();
        info!(
            "  History built in {:.3}s: {} persons, {} friendships, {} purchases",
            start.elapsed().as_secs_f64(),
            stats.person_count,
            stats.friendship_count,
            stats.purchase_count
        );

        Self {
            graph,
            params,
            next_seq,
        }
    }

    /// Replay streamed events, returning anomaly records in emission order.
    ///
    /// Numbering continues across calls, so a stream may be fed in chunks.
    pub fn process_stream<I>(&mut self, events: I) -> Vec<AnomalyRecord>
    where
        I: IntoIterator<Item = Event>,
    {
        let start = std::time::Instant::now();
        let first_seq = self.next_seq;

        let mut processor = StreamProcessor::new(&mut self.graph, self.params, self.next_seq);
        let anomalies = processor.process(events);
        self.next_seq = processor.next_seq();

        info!(
            "Stream processed in {:.3}s: {} events, {} anomalies",
            start.elapsed().as_secs_f64(),
            self.next_seq - first_seq,
            anomalies.len()
        );

        anomalies
    }

    pub fn graph(&self) -> &SocialGraph {
        &self.graph
    }

    pub fn next_seq(&self) -> SeqIndex {
        self.next_seq
    }

    /// Hand back the final graph state.
    pub fn into_graph(self) -> SocialGraph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> ripple_core::Amount {
        s.parse().unwrap()
    }

    #[test]
    fn stream_numbering_continues_after_batch() {
        let params = DetectionParams::new(1, 2).unwrap();
        let batch = vec![
            Event::befriend("1", "2", "t"),
            Event::purchase("2", amount("5"), "t"),
        ];
        let mut engine = DetectionEngine::from_history(params, batch);
        assert_eq!(engine.next_seq(), 2);

        engine.process_stream(vec![Event::purchase("2", amount("6"), "t")]);
        engine.process_stream(vec![Event::purchase("2", amount("7"), "t")]);

        let seqs: Vec<SeqIndex> = engine
            .graph()
            .get("2")
            .unwrap()
            .purchases()
            .iter()
            .map(|p| p.seq)
            .collect();
        assert_eq!(seqs, vec![1, 2, 3]);
        assert_eq!(engine.next_seq(), 4);
    }

    #[test]
    fn empty_batch_starts_at_zero() {
        let params = DetectionParams::new(1, 2).unwrap();
        let mut engine = DetectionEngine::from_history(params, Vec::new());
        assert_eq!(engine.next_seq(), 0);
        engine.process_stream(vec![Event::purchase("1", amount("1"), "t")]);
        assert_eq!(engine.into_graph().get("1").unwrap().purchases()[0].seq, 0);
    }
}
