//! # yield-from: delegating producers
//!
//! Build lazy, resumable computations that hand production off to nested
//! computations and get their results back.
//!
//! ## Core Types
//!
//! - **[`Producer`]**: a stateful computation that yields values one at a time and
//!   completes with an optional completion value. It can be resumed plainly, with a
//!   sent value, or with an injected exception, and optionally closed early.
//! - **[`Delegation`]**: a one-shot marker asking the driver to run another producer
//!   to completion in place.
//! - **[`Driver`]**: runs an outer producer yielding [`Emit`] values, flattening its
//!   delegations depth-first and routing sends, exceptions and close requests to the
//!   innermost active producer. A driver is itself a producer.
//!
//! ## Example
//!
//! ```
//! use yield_from::prelude::*;
//!
//! // yields 2 and 3, then completes with 100
//! let inner = || {
//!     let mut line = 0;
//!     from_fn(move |signal: Signal<i32, Exception>| {
//!         if let Signal::Throw(e) = signal {
//!             return Err(e);
//!         }
//!         line += 1;
//!         match line {
//!             1 => Ok(Step::Yielded(2)),
//!             2 => Ok(Step::Yielded(3)),
//!             _ => Ok(Step::done(100)),
//!         }
//!     })
//! };
//!
//! // yields 1, delegates to `inner`, then yields 4 and the completion value
//! let mut line = 0;
//! let mut saved = 0;
//! let mut inner = Some(inner());
//! let outer = from_fn(move |signal: Signal<i32, Exception>| {
//!     line += 1;
//!     match (line, signal) {
//!         (_, Signal::Throw(e)) => Err(e),
//!         (1, _) => Ok(Step::Yielded(Emit::Value(1))),
//!         (2, _) => Ok(Step::Yielded(Delegation::maybe(inner.take()).into())),
//!         (3, Signal::Send(ret)) => {
//!             saved = ret;
//!             Ok(Step::Yielded(Emit::Value(4)))
//!         }
//!         (4, _) => Ok(Step::Yielded(Emit::Value(saved))),
//!         _ => Ok(Step::<_, Option<()>>::exhausted()),
//!     }
//! });
//!
//! let values: Result<Vec<i32>, Exception> = yield_from(outer).values().collect();
//! assert_eq!(values, Ok(vec![1, 2, 3, 4, 100]));
//! ```
//!
//! ## Common Functions
//!
//! **Building producers:**
//! - [`from_fn(f)`](build::from_fn) - a producer from a closure receiving each [`Signal`]
//! - [`from_iter(i)`](build::from_iter) - a resume-only producer over an iterator
//! - [`empty()`](build::empty) / [`complete(v)`](build::complete) - producers that finish at once
//!
//! **Delegating:**
//! - [`yield_from(outer)`] - the composed producer for an outer producer
//! - [`Delegation::new`], [`Delegation::nested`], [`Delegation::iter`], [`Delegation::maybe`]
//!
//! **Execution:**
//! - [`Producer::values`] - iterate over yielded values
//! - [`handle(producer, responder)`](handle) - drive to completion, answering each value

pub mod build;
pub mod compose;
mod delegation;
mod driver;
mod exception;
mod handler;
pub mod iter;
pub mod prelude;
mod producer;
mod step;

pub use delegation::*;
pub use driver::*;
pub use exception::*;
pub use handler::*;
pub use producer::*;
pub use step::*;
