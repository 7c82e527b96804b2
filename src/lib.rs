pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod finder;
pub mod matcher;
pub mod normalizer;
pub mod roster;
