pub mod aggregate;
pub mod config;
pub mod params;
pub mod parse;
pub mod stats;
pub mod watch;
