//! Per-axis alignment factors, each in [0, 1] and symmetric in its arguments.

pub mod context;
pub mod emotional;
pub mod evolution;
pub mod taste;
