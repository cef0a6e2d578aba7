pub mod config;
pub mod inputs;
pub mod report;

pub use config::{AppConfig, ContrastConfig, ExtractConfig, PaletteConfig};
pub use inputs::{build_locks, parse_lock, parse_stop};
pub use report::{ClusterReport, ColorReport, ContrastReport, SimulationReport, SuggestionReport};
