//! Cash-flow module - typed cost and benefit line items.
//!
//! A `CashFlowComponent` stands in for one row of a cost table. Its sign is
//! carried by `FlowKind`; its timing by `FlowPattern` and a start period.

mod component;
mod flow_type;
mod unit_series;

pub use component::CashFlowComponent;
pub use flow_type::{FlowKind, FlowPattern};
pub use unit_series::UnitSeries;
