//! Comfort adjustment engine.
//!
//! Starting from a measurement outside the comfort band, the engine searches
//! for air and radiant temperatures (and, under heat or cold stress, an air
//! speed) that bring the PMV back inside it, then derives the corrective
//! measures that would get the workplace there.

mod adjust;
mod recommend;
mod root_find;

pub use adjust::{
    AdjustError, AdjusterConfig, Adjustment, AdjustmentStep, Anomaly, ConfigError, Strategy,
    Termination, VentilationPolicy, adjust, damping_factor, target_pmv,
};
pub use recommend::{Category, Priority, Recommendation, RecommendationConfig, recommend};
pub use root_find::{RootFindConfig, RootFindError, Sweep, solve_joint, solve_single};
