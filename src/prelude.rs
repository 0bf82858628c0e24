//! Commonly used imports
//!
//! Use `use yield_from::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Capabilities, Outcome, Producer, Signal, Step};

// Delegation
pub use crate::{Delegation, Driver, DriverState, Emit, yield_from};

// Most common constructors
pub use crate::build::{complete, empty, from_fn, from_iter};

// Transformations
pub use crate::compose::{map_return, map_yield, on_close};

// Execution
pub use crate::handler::{handle, handle_from};

// Errors
pub use crate::{Exception, ExceptionKind};
