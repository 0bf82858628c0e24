use std::marker::PhantomData;

use crate::producer::{Capabilities, Outcome, Producer, Signal};
use crate::step::Step;

/// A producer driven by a closure that receives every [`Signal`].
pub struct FromFn<F, S, E> {
    f: F,
    _signal: PhantomData<fn(Signal<S, E>)>,
}

/// Create a producer from a closure.
///
/// The closure sees each resume, send and throw as a [`Signal`] and keeps its
/// own state between calls. The producer advertises `send` and `throw`.
///
/// ```rust
/// use yield_from::prelude::*;
///
/// let mut total = 0;
/// let mut adder = from_fn(move |signal: Signal<i32, Exception>| match signal {
///     Signal::Resume => Ok(Step::Yielded(total)),
///     Signal::Send(n) if n < 0 => Ok(Step::done(total)),
///     Signal::Send(n) => {
///         total += n;
///         Ok(Step::Yielded(total))
///     }
///     Signal::Throw(e) => Err(e),
/// });
///
/// assert_eq!(adder.resume(), Ok(Step::Yielded(0)));
/// assert_eq!(adder.send(5), Ok(Step::Yielded(5)));
/// assert_eq!(adder.send(-1), Ok(Step::done(5)));
/// ```
pub fn from_fn<F, Y, S, R, E>(f: F) -> FromFn<F, S, E>
where
    F: FnMut(Signal<S, E>) -> Outcome<Y, R, E>,
{
    FromFn {
        f,
        _signal: PhantomData,
    }
}

impl<F, Y, S, R, E> Producer for FromFn<F, S, E>
where
    F: FnMut(Signal<S, E>) -> Outcome<Y, R, E>,
{
    type Yield = Y;
    type Input = S;
    type Return = R;
    type Error = E;

    fn resume(&mut self) -> Outcome<Y, R, E> {
        (self.f)(Signal::Resume)
    }

    fn send(&mut self, value: S) -> Outcome<Y, R, E> {
        (self.f)(Signal::Send(value))
    }

    fn throw(&mut self, error: E) -> Outcome<Y, R, E> {
        (self.f)(Signal::Throw(error))
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::RESUME_ONLY.with_send().with_throw()
    }
}

/// A producer with nothing to yield.
///
/// Completes without a value on every call.
pub struct Empty<Y, S, R, E>(PhantomData<fn(S) -> (Y, R, E)>);

/// Create a producer that completes immediately, without a completion value.
pub fn empty<Y, S, R, E>() -> Empty<Y, S, R, E> {
    Empty(PhantomData)
}

impl<Y, S, R, E> Producer for Empty<Y, S, R, E> {
    type Yield = Y;
    type Input = S;
    type Return = R;
    type Error = E;

    fn resume(&mut self) -> Outcome<Y, R, E> {
        Ok(Step::exhausted())
    }
}

/// A producer that completes with a value on its first call.
pub struct Completed<Y, S, R, E> {
    value: Option<R>,
    _types: PhantomData<fn(S) -> (Y, E)>,
}

/// Create a producer that yields nothing and completes with `value`.
///
/// Later calls complete without a value, like any exhausted producer.
///
/// ```rust
/// use yield_from::prelude::*;
///
/// let mut p = complete::<(), (), _, Exception>(100);
/// assert_eq!(p.resume(), Ok(Step::done(100)));
/// assert_eq!(p.resume(), Ok(Step::exhausted()));
/// ```
pub fn complete<Y, S, R, E>(value: R) -> Completed<Y, S, R, E> {
    Completed {
        value: Some(value),
        _types: PhantomData,
    }
}

impl<Y, S, R, E> Producer for Completed<Y, S, R, E> {
    type Yield = Y;
    type Input = S;
    type Return = R;
    type Error = E;

    fn resume(&mut self) -> Outcome<Y, R, E> {
        Ok(Step::Complete(self.value.take()))
    }
}
