pub mod algorithms;
pub mod engine;
pub mod pipeline;

pub use algorithms::network::resolve_network;
pub use algorithms::window_stats::{aggregate_and_score, WindowStats};
pub use engine::DetectionEngine;
pub use pipeline::{AnomalyRecord, StreamProcessor};
