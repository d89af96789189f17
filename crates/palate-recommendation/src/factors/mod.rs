//! Built-in recommendation factors, each in [0, 1].

pub mod context;
pub mod emotional;
pub mod taste;
