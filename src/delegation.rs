//! Delegation markers.
//!
//! A producer driven by a [`Driver`](crate::Driver) yields [`Emit`] values.
//! `Emit::Value` passes straight through to the driver's caller, while
//! `Emit::Delegate` carries a [`Delegation`]: a one-shot wrapper around the
//! producer the driver should run to completion before resuming the delegating
//! producer with its completion value.
//!
//! Anything can be turned into a delegation target. Producers and iterables are
//! wrapped; "nothing to delegate to" becomes an empty producer that completes at
//! once without a value, so delegating to it is a silent no-op.

use std::fmt;

use crate::build::{empty, from_iter};
use crate::producer::{BoxProducer, Capabilities, Producer};

/// A delegated producer as the driver holds it.
///
/// It yields [`Emit`] values (so it may delegate further), receives `S`, and
/// completes with an `S` that is handed back to the level below.
pub type Frame<T, S, E> = BoxProducer<Emit<T, S, E>, S, S, E>;

/// What a delegating producer yields.
pub enum Emit<T, S, E> {
    /// A value for the driver's caller.
    Value(T),
    /// A request to delegate to another producer.
    Delegate(Delegation<T, S, E>),
}

impl<T, S, E> Emit<T, S, E> {
    /// Returns `true` for `Emit::Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, Emit::Value(_))
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Emit::Value(value) => Some(value),
            Emit::Delegate(_) => None,
        }
    }

    pub fn into_delegation(self) -> Option<Delegation<T, S, E>> {
        match self {
            Emit::Value(_) => None,
            Emit::Delegate(delegation) => Some(delegation),
        }
    }
}

impl<T, S, E> From<Delegation<T, S, E>> for Emit<T, S, E> {
    fn from(delegation: Delegation<T, S, E>) -> Self {
        Emit::Delegate(delegation)
    }
}

impl<T: fmt::Debug, S, E> fmt::Debug for Emit<T, S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emit::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Emit::Delegate(delegation) => f.debug_tuple("Delegate").field(delegation).finish(),
        }
    }
}

/// A one-shot request to delegate to a producer.
///
/// Consumed by value by the driver that observes it; the driver owns the inner
/// producer until it completes, raises, or is closed.
///
/// ```rust
/// use yield_from::prelude::*;
///
/// let mut frame = Delegation::<i32, (), Exception>::iter([2, 3]).into_frame();
/// assert_eq!(frame.resume().unwrap().unwrap_yielded().into_value(), Some(2));
///
/// let mut nothing = Delegation::<i32, (), Exception>::empty().into_frame();
/// assert!(nothing.resume().unwrap().is_complete());
/// ```
pub struct Delegation<T, S, E> {
    frame: Frame<T, S, E>,
}

impl<T, S, E> Delegation<T, S, E>
where
    T: 'static,
    S: 'static,
    E: 'static,
{
    /// Delegate to a producer yielding plain values.
    ///
    /// Its completion value is sent into the delegating producer.
    pub fn new<P>(producer: P) -> Self
    where
        P: Producer<Yield = T, Input = S, Return = S, Error = E> + 'static,
    {
        Self::nested(producer.map_yield(Emit::<T, S, E>::Value))
    }

    /// Delegate to a producer that itself yields [`Emit`] values.
    ///
    /// Its own delegations are run by the same driver, on top of it.
    pub fn nested<P>(producer: P) -> Self
    where
        P: Producer<Yield = Emit<T, S, E>, Input = S, Return = S, Error = E> + 'static,
    {
        Delegation {
            frame: Box::new(producer),
        }
    }

    /// Delegate to the items of an iterable.
    ///
    /// The resulting producer only supports plain resumption: sent values are
    /// dropped and an injected exception goes to the delegating producer.
    pub fn iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::new(from_iter::<_, S, S, E>(iter))
    }

    /// Delegate to nothing: completes at once without a value.
    pub fn empty() -> Self {
        Self::new(empty::<T, S, S, E>())
    }

    /// Delegate to `source` if there is one, otherwise to nothing.
    pub fn maybe<P>(source: Option<P>) -> Self
    where
        P: Producer<Yield = T, Input = S, Return = S, Error = E> + 'static,
    {
        match source {
            Some(producer) => Self::new(producer),
            None => Self::empty(),
        }
    }
}

impl<T, S, E> Delegation<T, S, E> {
    /// The capabilities of the wrapped producer.
    pub fn capabilities(&self) -> Capabilities {
        self.frame.capabilities()
    }

    /// Unwrap the delegated producer.
    pub fn into_frame(self) -> Frame<T, S, E> {
        self.frame
    }
}

impl<T, S, E> Default for Delegation<T, S, E>
where
    T: 'static,
    S: 'static,
    E: 'static,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, S, E> fmt::Debug for Delegation<T, S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegation")
            .field("capabilities", &self.capabilities())
            .finish_non_exhaustive()
    }
}
