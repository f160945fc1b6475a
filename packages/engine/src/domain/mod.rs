pub mod config;
pub mod dice;
pub mod style;
