//! Reduction of a table along an axis.
//! The row and column cases share one code path, parameterized by [Axis].
//! Iteration can be done with a lane function, an explicit loop, ndarray mapping or rayon,
//! see [IterStyle].

pub mod axisreducer;
pub mod params;

pub use axisreducer::{AxisReducer, reduce};
pub use params::{Axis, IterStyle, ReducerParams};
