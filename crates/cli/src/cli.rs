use std::path::PathBuf;

use clap::Parser;
use ripple_core::Config;

/// Flag purchases that stand out against the buyer's social network.
///
/// Replays the batch log to build the network, then scores every purchase
/// in the stream log against the most recent purchases of the buyer's
/// D-degree friends. Unset paths fall back to `RIPPLE_*` environment
/// variables, then to the `log_input/` / `log_output/` layout.
#[derive(Parser, Debug)]
#[command(name = "ripple", version, about)]
pub struct CliArgs {
    /// Batch log; its first record carries D and T
    pub batch_log: Option<PathBuf>,

    /// Stream log scored against the batch state
    pub stream_log: Option<PathBuf>,

    /// Output file for flagged purchases
    pub output: Option<PathBuf>,

    /// Override the network degree D from the batch log
    #[arg(long, short = 'D')]
    pub degree: Option<u32>,

    /// Override the purchase window T from the batch log
    #[arg(long, short = 'T')]
    pub window: Option<u32>,

    /// Print a person's friend and purchase counts after the run (repeatable)
    #[arg(long, value_name = "ID")]
    pub inspect: Vec<String>,

    /// Log graph statistics after the run
    #[arg(long)]
    pub stats: bool,
}

impl CliArgs {
    /// Layer command-line values over the environment config.
    pub fn merge_into(&self, mut config: Config) -> Config {
        if let Some(path) = &self.batch_log {
            config.batch_log = path.clone();
        }
        if let Some(path) = &self.stream_log {
            config.stream_log = path.clone();
        }
        if let Some(path) = &self.output {
            config.output = path.clone();
        }
        if self.degree.is_some() {
            config.degree = self.degree;
        }
        if self.window.is_some() {
            config.window = self.window;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_paths_override_config() {
        let args = CliArgs::parse_from(["ripple", "in/b.json", "in/s.json", "out/f.json", "-D", "2"]);
        let config = args.merge_into(Config::default());

        assert_eq!(config.batch_log, PathBuf::from("in/b.json"));
        assert_eq!(config.stream_log, PathBuf::from("in/s.json"));
        assert_eq!(config.output, PathBuf::from("out/f.json"));
        assert_eq!(config.degree, Some(2));
        assert_eq!(config.window, None);
    }

    #[test]
    fn missing_args_keep_config_values() {
        let args = CliArgs::parse_from(["ripple", "--inspect", "1", "--inspect", "2", "--stats"]);
        let config = args.merge_into(Config::default());

        assert_eq!(config.batch_log, Config::default().batch_log);
        assert_eq!(args.inspect, vec!["1".to_string(), "2".to_string()]);
        assert!(args.stats);
    }
}
