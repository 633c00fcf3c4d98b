//! Return projection engine: baseline, product, timeline and comparison

mod returns;
mod engine;
mod comparison;

pub use returns::{BaselineReturn, ProductReturn, TimelinePoint, TierProfile};
pub use engine::{
    ProjectionEngine, annualized_rate, baseline_return, compound_growth_factor, compound_return,
    round_half_up,
};
pub use comparison::{ComparisonMetrics, comparison_metrics};
