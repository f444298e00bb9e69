//! Netsim Report
//!
//! Consolidation and comparison of network simulation results.
//!
//! Reads the `resultados_*.txt` files written by the simulator, writes a
//! consolidated CSV, grouped statistics and a four-panel comparison chart.
//! This crate provides the implementation behind the `netsim-report` CLI.

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod dataset;
pub mod output;
pub mod parser;
pub mod utils;
