//! Default gas properties for air.

use bc_core::units::SpecHeatCapacity;

/// Specific heat of air at constant pressure [J/(kg·K)].
pub const DEFAULT_CP: SpecHeatCapacity = 1005.0;

/// Heat capacity ratio of air.
pub const DEFAULT_GAMMA: f64 = 1.4;
