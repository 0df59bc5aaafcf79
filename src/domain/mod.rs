// ============================================================================
// Domain Models Module
// Value objects shared by the backend and its consumers
// ============================================================================

pub mod class;
pub mod config;

pub use class::FpClass;
pub use config::{FloatStyle, FormatOptions, MAX_FORMAT_PRECISION};
