//! Decision Economics - cost/benefit analysis for competing architecture options
//!
//! This crate models each option as a scenario of typed cash-flow components
//! over a fixed horizon, then answers ROI, breakeven, NPV and
//! probability-weighted expected value queries across them.

pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;
