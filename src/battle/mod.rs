pub mod calculators;
pub mod engine;
pub mod runner;
pub mod state;
pub mod stats;

#[cfg(test)]
mod tests;
