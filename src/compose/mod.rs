//! Adapting producers
//!
//! This module provides combinators that wrap a producer and change what it
//! yields, what it completes with, or what happens when it is closed.

mod close;
mod map;

pub use close::{OnClose, on_close};
pub use map::{MapReturn, MapYield, map_return, map_yield};
