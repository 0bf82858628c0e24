//! Core trait for lazily yielding, resumable computations.
//!
//! This module defines the [`Producer`] trait, the leaf abstraction every other
//! part of the crate builds on. A producer yields a sequence of values, one per
//! call, and eventually completes with an optional completion value.
//!
//! # Capabilities
//!
//! Only [`Producer::resume`] is mandatory. Receiving a value ([`Producer::send`]),
//! receiving an injected exception ([`Producer::throw`]) and cleaning up early
//! ([`Producer::close`]) are optional and advertised through
//! [`Producer::capabilities`]. Callers query the capability set before relying on
//! an optional operation and fall back to a fixed policy when it is missing.
//!
//! # Examples
//!
//! ```rust
//! use yield_from::prelude::*;
//!
//! struct Countdown(u32);
//!
//! impl Producer for Countdown {
//!     type Yield = u32;
//!     type Input = ();
//!     type Return = &'static str;
//!     type Error = Exception;
//!
//!     fn resume(&mut self) -> Outcome<u32, &'static str, Exception> {
//!         if self.0 == 0 {
//!             return Ok(Step::done("liftoff"));
//!         }
//!         self.0 -= 1;
//!         Ok(Step::Yielded(self.0 + 1))
//!     }
//! }
//!
//! let mut countdown = Countdown(2);
//! assert_eq!(countdown.resume(), Ok(Step::Yielded(2)));
//! assert_eq!(countdown.resume(), Ok(Step::Yielded(1)));
//! assert_eq!(countdown.resume(), Ok(Step::done("liftoff")));
//! assert!(!countdown.capabilities().can_throw());
//! ```

use std::{cell::RefCell, rc::Rc};

use either::Either;

use crate::{
    compose::{MapReturn, MapYield, OnClose},
    delegation::Delegation,
    iter::ProducerIter,
    step::Step,
};

/// Result of driving a producer by one step.
///
/// `Ok(Step::Yielded(y))` is a yielded value, `Ok(Step::Complete(r))` is the
/// completion signal with its optional completion value, and `Err(e)` is an
/// exception the producer did not handle.
pub type Outcome<Y, R, E> = Result<Step<Y, Option<R>>, E>;

/// A boxed producer, erased to its four associated types.
pub type BoxProducer<Y, I, R, E> = Box<dyn Producer<Yield = Y, Input = I, Return = R, Error = E>>;

/// The ways a caller can drive a producer.
///
/// An absent resume-value is `Resume`, never a `Send` of some "empty" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal<S, E> {
    /// Resume without a value.
    Resume,
    /// Resume with a value.
    Send(S),
    /// Resume by raising an exception at the suspension point.
    Throw(E),
}

impl<S, E> Signal<S, E> {
    /// `Send(v)` for `Some(v)` and `Resume` for `None`.
    ///
    /// This is how a completion value travels back into a delegating producer.
    #[inline]
    pub fn from_value(value: Option<S>) -> Self {
        match value {
            Some(value) => Signal::Send(value),
            None => Signal::Resume,
        }
    }

    /// Returns `true` for `Throw`.
    #[inline]
    pub const fn is_throw(&self) -> bool {
        matches!(self, Signal::Throw(_))
    }
}

/// The optional operations a producer supports.
///
/// ```rust
/// use yield_from::Capabilities;
///
/// let caps = Capabilities::RESUME_ONLY.with_throw();
/// assert!(caps.can_throw());
/// assert!(!caps.can_send());
/// assert!(!caps.can_close());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities {
    send: bool,
    throw: bool,
    close: bool,
}

impl Capabilities {
    /// Plain resumption only, the capability set of an ordinary iterator.
    pub const RESUME_ONLY: Self = Self {
        send: false,
        throw: false,
        close: false,
    };

    /// Every optional operation.
    pub const ALL: Self = Self {
        send: true,
        throw: true,
        close: true,
    };

    #[inline]
    pub const fn with_send(self) -> Self {
        Self { send: true, ..self }
    }

    #[inline]
    pub const fn with_throw(self) -> Self {
        Self {
            throw: true,
            ..self
        }
    }

    #[inline]
    pub const fn with_close(self) -> Self {
        Self {
            close: true,
            ..self
        }
    }

    #[inline]
    pub const fn can_send(&self) -> bool {
        self.send
    }

    #[inline]
    pub const fn can_throw(&self) -> bool {
        self.throw
    }

    #[inline]
    pub const fn can_close(&self) -> bool {
        self.close
    }
}

/// A stateful computation yielding a lazy sequence of values.
///
/// Every operation returns an [`Outcome`]. Once a producer has completed or
/// raised, further `resume`/`send` calls should answer `Complete(None)` and
/// `throw(e)` should answer `Err(e)`.
pub trait Producer {
    /// Values handed to the caller at each suspension.
    type Yield;
    /// Values the caller may send in when resuming.
    type Input;
    /// Completion value.
    type Return;
    /// Exceptions raised by, or injected into, the producer.
    type Error;

    /// Resume without a value.
    fn resume(&mut self) -> Outcome<Self::Yield, Self::Return, Self::Error>;

    /// Resume with a value.
    ///
    /// The default discards the value and resumes; producers that actually
    /// receive values override this and advertise [`Capabilities::can_send`].
    fn send(&mut self, value: Self::Input) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        drop(value);
        self.resume()
    }

    /// Raise `error` at the current suspension point.
    ///
    /// The default does not handle it. Producers that override this advertise
    /// [`Capabilities::can_throw`].
    fn throw(&mut self, error: Self::Error) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        Err(error)
    }

    /// Release resources early. No-op unless [`Capabilities::can_close`].
    fn close(&mut self) {}

    /// The optional operations this producer supports.
    fn capabilities(&self) -> Capabilities {
        Capabilities::RESUME_ONLY
    }

    /// Dispatch a [`Signal`] to `resume`, `send` or `throw`.
    fn signal(
        &mut self,
        signal: Signal<Self::Input, Self::Error>,
    ) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        match signal {
            Signal::Resume => self.resume(),
            Signal::Send(value) => self.send(value),
            Signal::Throw(error) => self.throw(error),
        }
    }

    /// Transform yielded values.
    fn map_yield<Y2, F>(self, f: F) -> MapYield<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Yield) -> Y2,
    {
        crate::compose::map_yield(f, self)
    }

    /// Transform the completion value, when there is one.
    fn map_return<R2, F>(self, f: F) -> MapReturn<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Return) -> R2,
    {
        crate::compose::map_return(f, self)
    }

    /// Run `f` once, after this producer has been closed.
    fn on_close<F>(self, f: F) -> OnClose<Self, F>
    where
        Self: Sized,
        F: FnOnce(),
    {
        crate::compose::on_close(f, self)
    }

    fn boxed(self) -> BoxProducer<Self::Yield, Self::Input, Self::Return, Self::Error>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    /// Wrap this producer in a [`Delegation`] marker.
    ///
    /// Shorthand for [`Delegation::new`].
    fn delegate<S>(self) -> Delegation<Self::Yield, S, Self::Error>
    where
        Self: Sized + Producer<Input = S, Return = S> + 'static,
        Self::Yield: 'static,
        Self::Error: 'static,
        S: 'static,
    {
        Delegation::new(self)
    }

    /// Iterate over the yielded values by resuming repeatedly.
    fn values(self) -> ProducerIter<Self>
    where
        Self: Sized,
    {
        ProducerIter::new(self)
    }
}

/// Close `producer` if it supports closing. Returns whether `close` was called.
pub fn close_if_supported<P>(producer: &mut P) -> bool
where
    P: Producer + ?Sized,
{
    if producer.capabilities().can_close() {
        producer.close();
        true
    } else {
        false
    }
}

impl<P> Producer for Box<P>
where
    P: Producer + ?Sized,
{
    type Yield = P::Yield;
    type Input = P::Input;
    type Return = P::Return;
    type Error = P::Error;

    fn resume(&mut self) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        (**self).resume()
    }

    fn send(&mut self, value: Self::Input) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        (**self).send(value)
    }

    fn throw(&mut self, error: Self::Error) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        (**self).throw(error)
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }
}

impl<P> Producer for &'_ mut P
where
    P: Producer + ?Sized,
{
    type Yield = P::Yield;
    type Input = P::Input;
    type Return = P::Return;
    type Error = P::Error;

    fn resume(&mut self) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        (**self).resume()
    }

    fn send(&mut self, value: Self::Input) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        (**self).send(value)
    }

    fn throw(&mut self, error: Self::Error) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        (**self).throw(error)
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }
}

/// `None` behaves as an already exhausted producer.
impl<P> Producer for Option<P>
where
    P: Producer,
{
    type Yield = P::Yield;
    type Input = P::Input;
    type Return = P::Return;
    type Error = P::Error;

    fn resume(&mut self) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        match self {
            Some(p) => p.resume(),
            None => Ok(Step::exhausted()),
        }
    }

    fn send(&mut self, value: Self::Input) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        match self {
            Some(p) => p.send(value),
            None => Ok(Step::exhausted()),
        }
    }

    fn throw(&mut self, error: Self::Error) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        match self {
            Some(p) => p.throw(error),
            None => Err(error),
        }
    }

    fn close(&mut self) {
        if let Some(p) = self {
            p.close();
        }
    }

    fn capabilities(&self) -> Capabilities {
        match self {
            Some(p) => p.capabilities(),
            None => Capabilities::RESUME_ONLY,
        }
    }
}

/// A shared handle. Panics if the producer is already borrowed, which only
/// happens when a producer tries to drive itself.
impl<P> Producer for Rc<RefCell<P>>
where
    P: Producer,
{
    type Yield = P::Yield;
    type Input = P::Input;
    type Return = P::Return;
    type Error = P::Error;

    fn resume(&mut self) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        self.borrow_mut().resume()
    }

    fn send(&mut self, value: Self::Input) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        self.borrow_mut().send(value)
    }

    fn throw(&mut self, error: Self::Error) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        self.borrow_mut().throw(error)
    }

    fn close(&mut self) {
        self.borrow_mut().close()
    }

    fn capabilities(&self) -> Capabilities {
        self.borrow().capabilities()
    }
}

impl<L, R> Producer for Either<L, R>
where
    L: Producer,
    R: Producer<Yield = L::Yield, Input = L::Input, Return = L::Return, Error = L::Error>,
{
    type Yield = L::Yield;
    type Input = L::Input;
    type Return = L::Return;
    type Error = L::Error;

    fn resume(&mut self) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        match self {
            Either::Left(l) => l.resume(),
            Either::Right(r) => r.resume(),
        }
    }

    fn send(&mut self, value: Self::Input) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        match self {
            Either::Left(l) => l.send(value),
            Either::Right(r) => r.send(value),
        }
    }

    fn throw(&mut self, error: Self::Error) -> Outcome<Self::Yield, Self::Return, Self::Error> {
        match self {
            Either::Left(l) => l.throw(error),
            Either::Right(r) => r.throw(error),
        }
    }

    fn close(&mut self) {
        match self {
            Either::Left(l) => l.close(),
            Either::Right(r) => r.close(),
        }
    }

    fn capabilities(&self) -> Capabilities {
        match self {
            Either::Left(l) => l.capabilities(),
            Either::Right(r) => r.capabilities(),
        }
    }
}
