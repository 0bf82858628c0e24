//! Building producers from scratch
//!
//! This module provides functions and types for creating new producers without
//! writing a dedicated struct.

mod func;
mod iter;

pub use func::{Completed, Empty, FromFn, complete, empty, from_fn};
pub use iter::{IterProducer, from_iter};
