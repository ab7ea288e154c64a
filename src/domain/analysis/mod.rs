//! Analysis Module - comparing options and recommending one.
//!
//! # Components
//!
//! - `DecisionModel` - Scenarios, decision points and a shared discount rate
//! - `RankingAnalyzer` - Deterministic ROI ranking with tie-breaks
//! - `ComparisonReport` / `Recommendation` - Results for reporting layers
//!
//! # Design Philosophy
//!
//! Every query is a pure function of the model's current inputs. The only
//! state is each scenario's cached series, dropped whenever it is edited.

mod decision_model;
mod ranking;
mod report;

pub use decision_model::{DecisionModel, DecisionModelBuilder};
pub use ranking::RankingAnalyzer;
pub use report::{ComparisonReport, Recommendation, RecommendationBasis, ScenarioMetrics};
