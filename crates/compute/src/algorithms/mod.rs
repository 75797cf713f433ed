pub mod network;
pub mod window_stats;
