// ============================================================================
// Interfaces Module
// Trait contracts a generic number front end consumes
// ============================================================================

mod arithmetic_backend;
mod float_hooks;
mod numeric_limits;

pub use arithmetic_backend::ArithmeticBackend;
pub use float_hooks::FloatHooks;
pub use numeric_limits::NumericLimits;
