//! The delegation driver.
//!
//! A [`Driver`] wraps an *outer* producer that yields [`Emit`] values. Plain
//! values pass through to the caller. A [`Delegation`] pushes its producer onto
//! the driver's frame stack, and from then on every resume, send and throw goes
//! to the innermost frame until it completes. Its completion value is then sent
//! into the level below, and the delegating producer carries on from its
//! delegation point.
//!
//! # Routing
//!
//! Each call becomes a [`Signal`] delivered to the innermost active level:
//!
//! - a yielded `Emit::Value` is returned to the caller;
//! - a yielded `Emit::Delegate` pushes a frame, which is resumed at once;
//! - a frame completing with `Some(v)` is popped and `v` is sent below; with
//!   `None` the level below is resumed;
//! - a frame raising `e` is popped and `e` is thrown into the level below;
//! - a frame that cannot receive an exception is closed and popped, and the
//!   exception goes to the level below;
//! - the outer producer completing or raising terminates the driver.
//!
//! A sent value reaches a frame through `send` only if it advertises the send
//! capability; otherwise the frame is plainly resumed.
//!
//! # Cleanup
//!
//! Closing the driver, or dropping it before it terminated, closes every
//! active frame innermost first and then the outer producer. Whichever way the
//! driver terminates, `close` is attempted on the outer producer exactly once.

use log::{debug, trace};

use crate::delegation::{Emit, Frame};
use crate::producer::{Capabilities, Outcome, Producer, Signal, close_if_supported};
use crate::step::Step;

/// Where a driver is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverState {
    /// No delegation in progress; signals go to the outer producer.
    Outer,
    /// `depth` delegated producers are active; signals go to the innermost one.
    Delegating { depth: usize },
    /// The driver finished and produces nothing further.
    Terminated,
}

/// Runs an outer producer, carrying out the delegations it yields.
///
/// A driver is itself a [`Producer`] yielding `T`, with every optional
/// capability, so it can be delegated to by another driver.
///
/// ```rust
/// use yield_from::prelude::*;
///
/// let mut line = 0;
/// let outer = from_fn(move |signal: Signal<i32, Exception>| {
///     if let Signal::Throw(e) = signal {
///         return Err(e);
///     }
///     line += 1;
///     match line {
///         1 => Ok(Step::Yielded(Emit::Value(1))),
///         2 => Ok(Step::Yielded(Delegation::iter([2, 3]).into())),
///         3 => Ok(Step::Yielded(Emit::Value(4))),
///         _ => Ok(Step::<_, Option<()>>::exhausted()),
///     }
/// });
///
/// let values: Result<Vec<i32>, Exception> = yield_from(outer).values().collect();
/// assert_eq!(values, Ok(vec![1, 2, 3, 4]));
/// ```
pub struct Driver<P, T, S, E>
where
    P: Producer<Yield = Emit<T, S, E>, Input = S, Error = E>,
{
    outer: P,
    frames: Vec<Frame<T, S, E>>,
    terminated: bool,
}

/// Build the composed producer for `outer`.
///
/// Equivalent to [`Driver::new`].
pub fn yield_from<P, T, S, E>(outer: P) -> Driver<P, T, S, E>
where
    P: Producer<Yield = Emit<T, S, E>, Input = S, Error = E>,
{
    Driver::new(outer)
}

/// A signal handed to a level, or the exception it refused for lack of `throw`.
enum Delivery<O, E> {
    Handled(O),
    Refused(E),
}

/// Deliver `signal` using the most specific operation `producer` supports.
fn deliver<Q>(
    producer: &mut Q,
    signal: Signal<Q::Input, Q::Error>,
) -> Delivery<Outcome<Q::Yield, Q::Return, Q::Error>, Q::Error>
where
    Q: Producer + ?Sized,
{
    let caps = producer.capabilities();
    match signal {
        Signal::Resume => Delivery::Handled(producer.resume()),
        Signal::Send(value) if caps.can_send() => Delivery::Handled(producer.send(value)),
        Signal::Send(value) => {
            drop(value);
            Delivery::Handled(producer.resume())
        }
        Signal::Throw(error) if caps.can_throw() => Delivery::Handled(producer.throw(error)),
        Signal::Throw(error) => Delivery::Refused(error),
    }
}

impl<P, T, S, E> Driver<P, T, S, E>
where
    P: Producer<Yield = Emit<T, S, E>, Input = S, Error = E>,
{
    /// Create a driver for `outer`; nothing runs until the first call.
    pub fn new(outer: P) -> Self {
        Driver {
            outer,
            frames: Vec::new(),
            terminated: false,
        }
    }

    /// Where the driver is in its lifecycle.
    pub fn state(&self) -> DriverState {
        if self.terminated {
            DriverState::Terminated
        } else if self.frames.is_empty() {
            DriverState::Outer
        } else {
            DriverState::Delegating {
                depth: self.frames.len(),
            }
        }
    }

    /// Number of active delegated producers.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Check if the driver has finished.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// The outer producer.
    pub fn outer(&self) -> &P {
        &self.outer
    }

    fn drive(&mut self, signal: Signal<S, E>) -> Outcome<T, P::Return, E> {
        if self.terminated {
            return match signal {
                Signal::Throw(error) => Err(error),
                _ => Ok(Step::exhausted()),
            };
        }

        let mut signal = signal;
        loop {
            let emitted = match self.frames.last_mut() {
                Some(frame) => match deliver(frame, signal) {
                    Delivery::Handled(Ok(Step::Yielded(emit))) => emit,
                    Delivery::Handled(Ok(Step::Complete(value))) => {
                        self.frames.pop();
                        trace!(
                            "delegation completed (value: {}), depth {}",
                            value.is_some(),
                            self.frames.len()
                        );
                        signal = Signal::from_value(value);
                        continue;
                    }
                    Delivery::Handled(Err(error)) => {
                        self.frames.pop();
                        trace!("delegation raised, depth {}", self.frames.len());
                        signal = Signal::Throw(error);
                        continue;
                    }
                    Delivery::Refused(error) => {
                        if let Some(mut frame) = self.frames.pop() {
                            close_if_supported(&mut frame);
                        }
                        trace!(
                            "delegation cannot take an exception, routing it to depth {}",
                            self.frames.len()
                        );
                        signal = Signal::Throw(error);
                        continue;
                    }
                },
                None => match deliver(&mut self.outer, signal) {
                    Delivery::Handled(Ok(Step::Yielded(emit))) => emit,
                    Delivery::Handled(Ok(Step::Complete(value))) => {
                        debug!("outer producer completed");
                        self.finish();
                        return Ok(Step::Complete(value));
                    }
                    Delivery::Handled(Err(error)) | Delivery::Refused(error) => {
                        debug!("outer producer raised, terminating");
                        self.finish();
                        return Err(error);
                    }
                },
            };

            match emitted {
                Emit::Value(value) => return Ok(Step::Yielded(value)),
                Emit::Delegate(delegation) => {
                    self.frames.push(delegation.into_frame());
                    trace!("delegating, depth {}", self.frames.len());
                    signal = Signal::Resume;
                }
            }
        }
    }

    /// Close active frames innermost first, then the outer producer, once.
    fn finish(&mut self) {
        if self.terminated {
            return;
        }
        self.terminated = true;
        while let Some(mut frame) = self.frames.pop() {
            close_if_supported(&mut frame);
        }
        close_if_supported(&mut self.outer);
    }
}

impl<P, T, S, E> Producer for Driver<P, T, S, E>
where
    P: Producer<Yield = Emit<T, S, E>, Input = S, Error = E>,
{
    type Yield = T;
    type Input = S;
    type Return = P::Return;
    type Error = E;

    fn resume(&mut self) -> Outcome<T, P::Return, E> {
        self.drive(Signal::Resume)
    }

    fn send(&mut self, value: S) -> Outcome<T, P::Return, E> {
        self.drive(Signal::Send(value))
    }

    fn throw(&mut self, error: E) -> Outcome<T, P::Return, E> {
        self.drive(Signal::Throw(error))
    }

    fn close(&mut self) {
        if !self.terminated {
            debug!("closing driver at depth {}", self.frames.len());
            self.finish();
        }
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::ALL
    }
}

impl<P, T, S, E> Drop for Driver<P, T, S, E>
where
    P: Producer<Yield = Emit<T, S, E>, Input = S, Error = E>,
{
    fn drop(&mut self) {
        if !self.terminated {
            debug!("driver dropped before termination, closing");
            self.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::build::{complete, from_fn, from_iter};
    use crate::delegation::Delegation;
    use crate::exception::{Exception, ExceptionKind};

    type Item = Emit<i32, i32, Exception>;
    type Log = Rc<RefCell<Vec<String>>>;

    /// A producer from a closure, typed for these tests.
    fn script<F>(f: F) -> impl Producer<Yield = Item, Input = i32, Return = i32, Error = Exception> + 'static
    where
        F: FnMut(Signal<i32, Exception>) -> Outcome<Item, i32, Exception> + 'static,
    {
        from_fn(f)
    }

    /// Yields `items` in order, then completes with `ret`. Does not handle exceptions.
    fn linear(
        items: Vec<Item>,
        ret: Option<i32>,
    ) -> impl Producer<Yield = Item, Input = i32, Return = i32, Error = Exception> + 'static {
        let mut items = items.into_iter();
        let mut ret = ret;
        script(move |signal| {
            if let Signal::Throw(e) = signal {
                return Err(e);
            }
            match items.next() {
                Some(item) => Ok(Step::Yielded(item)),
                None => Ok(Step::Complete(ret.take())),
            }
        })
    }

    fn value(v: i32) -> Item {
        Emit::Value(v)
    }

    fn drain<P>(mut p: P) -> (Vec<i32>, Result<Option<P::Return>, Exception>)
    where
        P: Producer<Yield = i32, Error = Exception>,
    {
        let mut out = Vec::new();
        loop {
            match p.resume() {
                Ok(Step::Yielded(v)) => out.push(v),
                Ok(Step::Complete(r)) => return (out, Ok(r)),
                Err(e) => return (out, Err(e)),
            }
        }
    }

    fn logged(log: &Log, name: &'static str, items: Vec<i32>) -> Delegation<i32, i32, Exception> {
        let log = Rc::clone(log);
        Delegation::new(
            from_iter::<_, i32, i32, Exception>(items)
                .on_close(move || log.borrow_mut().push(name.to_string())),
        )
    }

    #[test]
    fn test_passes_plain_values_through() {
        let d = yield_from(linear(vec![value(1), value(2)], Some(9)));
        assert_eq!(drain(d), (vec![1, 2], Ok(Some(9))));
    }

    #[test]
    fn test_delegation_is_flattened_in_order() {
        let d = yield_from(linear(
            vec![value(1), Delegation::iter([2, 3]).into(), value(4)],
            None,
        ));
        assert_eq!(drain(d), (vec![1, 2, 3, 4], Ok(None)));
    }

    #[test]
    fn test_completion_value_is_sent_to_delegation_point() {
        let mut line = 0;
        let outer = script(move |signal| {
            line += 1;
            match (line, signal) {
                (1, _) => Ok(Step::Yielded(value(1))),
                (2, _) => Ok(Step::Yielded(
                    Delegation::nested(linear(vec![value(2), value(3)], Some(100))).into(),
                )),
                (3, Signal::Send(ret)) => Ok(Step::Yielded(value(ret + 1000))),
                (3, other) => panic!("expected the completion value, got {other:?}"),
                _ => Ok(Step::exhausted()),
            }
        });

        assert_eq!(drain(yield_from(outer)), (vec![1, 2, 3, 1100], Ok(None)));
    }

    #[test]
    fn test_absent_completion_value_resumes() {
        let mut line = 0;
        let outer = script(move |signal| {
            line += 1;
            match (line, signal) {
                (1, _) => Ok(Step::Yielded(Delegation::empty().into())),
                (2, Signal::Resume) => Ok(Step::Yielded(value(1))),
                (2, other) => panic!("expected a plain resume, got {other:?}"),
                _ => Ok(Step::exhausted()),
            }
        });

        assert_eq!(drain(yield_from(outer)), (vec![1], Ok(None)));
    }

    #[test]
    fn test_zero_completion_value_is_still_sent() {
        let mut line = 0;
        let outer = script(move |signal| {
            line += 1;
            match (line, signal) {
                (1, _) => Ok(Step::Yielded(Delegation::new(complete(0)).into())),
                (2, Signal::Send(0)) => Ok(Step::Yielded(value(-1))),
                (2, other) => panic!("expected Send(0), got {other:?}"),
                _ => Ok(Step::exhausted()),
            }
        });

        assert_eq!(drain(yield_from(outer)), (vec![-1], Ok(None)));
    }

    #[test]
    fn test_nested_delegation_uses_frame_stack() {
        let inner = linear(vec![Delegation::iter([2]).into(), value(3)], None);
        let outer = linear(vec![value(1), Delegation::nested(inner).into(), value(4)], None);
        let mut d = yield_from(outer);

        assert_eq!(d.resume(), Ok(Step::Yielded(1)));
        assert_eq!(d.state(), DriverState::Outer);
        assert_eq!(d.resume(), Ok(Step::Yielded(2)));
        assert_eq!(d.state(), DriverState::Delegating { depth: 2 });
        assert_eq!(d.resume(), Ok(Step::Yielded(3)));
        assert_eq!(d.depth(), 1);
        assert_eq!(d.resume(), Ok(Step::Yielded(4)));
        assert_eq!(d.resume(), Ok(Step::exhausted()));
        assert_eq!(d.state(), DriverState::Terminated);
    }

    #[test]
    fn test_driver_composes_as_inner_producer() {
        let inner = yield_from(linear(vec![Delegation::iter([2]).into(), value(3)], Some(7)));
        let outer = linear(vec![value(1), Delegation::new(inner).into(), value(4)], None);
        let mut d = yield_from(outer);

        assert_eq!(d.resume(), Ok(Step::Yielded(1)));
        assert_eq!(d.resume(), Ok(Step::Yielded(2)));
        // one frame: the inner driver keeps its own stack
        assert_eq!(d.depth(), 1);
        assert_eq!(drain(d), (vec![3, 4], Ok(None)));
    }

    #[test]
    fn test_send_reaches_innermost_frame() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let echo = script(move |signal| match signal {
            Signal::Send(v) if v < 0 => Ok(Step::done(v)),
            Signal::Send(v) => {
                sink.borrow_mut().push(v);
                Ok(Step::Yielded(value(v * 2)))
            }
            Signal::Resume => Ok(Step::Yielded(value(0))),
            Signal::Throw(e) => Err(e),
        });

        let mut line = 0;
        let mut echo = Some(echo);
        let outer = script(move |signal| {
            line += 1;
            match (line, signal) {
                (1, _) => Ok(Step::Yielded(
                    echo.take().map_or(value(0), |p| Delegation::nested(p).into()),
                )),
                (2, Signal::Send(ret)) => Ok(Step::done(ret)),
                (2, other) => panic!("expected the completion value, got {other:?}"),
                _ => Ok(Step::exhausted()),
            }
        });
        let mut d = yield_from(outer);

        assert_eq!(d.resume(), Ok(Step::Yielded(0)));
        assert_eq!(d.send(0), Ok(Step::Yielded(0)));
        assert_eq!(d.send(5), Ok(Step::Yielded(10)));
        assert_eq!(d.send(-3), Ok(Step::done(-3)));
        assert_eq!(&*received.borrow(), &[0, 5]);
    }

    #[test]
    fn test_send_falls_back_to_resume_without_send_capability() {
        let mut d = yield_from(linear(vec![Delegation::iter([1, 2]).into()], None));
        assert_eq!(d.resume(), Ok(Step::Yielded(1)));
        assert_eq!(d.send(42), Ok(Step::Yielded(2)));
        assert_eq!(d.send(42), Ok(Step::exhausted()));
    }

    #[test]
    fn test_exception_handled_by_inner_frame() {
        let mut state = 0;
        let inner = script(move |signal| {
            state += 1;
            match (state, signal) {
                (1, _) => Ok(Step::Yielded(value(2))),
                (2, Signal::Throw(e)) if e.is(ExceptionKind::Value) => Ok(Step::Yielded(value(200))),
                (_, Signal::Throw(e)) => Err(e),
                _ => Ok(Step::exhausted()),
            }
        });
        let mut d = yield_from(linear(vec![value(1), Delegation::nested(inner).into(), value(4)], None));

        assert_eq!(d.resume(), Ok(Step::Yielded(1)));
        assert_eq!(d.resume(), Ok(Step::Yielded(2)));
        assert_eq!(d.throw(Exception::value("at 2")), Ok(Step::Yielded(200)));
        assert_eq!(drain(d), (vec![4], Ok(None)));
    }

    #[test]
    fn test_exception_raised_by_inner_goes_to_outer() {
        let mut line = 0;
        let outer = script(move |signal| {
            line += 1;
            match (line, signal) {
                (1, _) => Ok(Step::Yielded(Delegation::iter([1, 2]).into())),
                (2, Signal::Throw(e)) if e.is(ExceptionKind::Value) => Ok(Step::Yielded(value(3))),
                (_, Signal::Throw(e)) => Err(e),
                _ => Ok(Step::exhausted()),
            }
        });
        let mut d = yield_from(outer);

        assert_eq!(d.resume(), Ok(Step::Yielded(1)));
        // the iterable cannot take the exception, so the delegating scope handles it
        assert_eq!(d.throw(Exception::value("x")), Ok(Step::Yielded(3)));
        assert_eq!(d.state(), DriverState::Outer);
        assert_eq!(drain(d), (vec![], Ok(None)));
    }

    #[test]
    fn test_refused_exception_closes_abandoned_frame() {
        let log: Log = Rc::default();
        let mut line = 0;
        let mut marker = Some(logged(&log, "inner", vec![1, 2]));
        let outer = script(move |signal| {
            line += 1;
            match (line, signal) {
                (1, _) => Ok(Step::Yielded(marker.take().map_or(value(0), Emit::from))),
                (2, Signal::Throw(_)) => Ok(Step::Yielded(value(99))),
                (_, Signal::Throw(e)) => Err(e),
                _ => Ok(Step::exhausted()),
            }
        });
        let mut d = yield_from(outer);

        assert_eq!(d.resume(), Ok(Step::Yielded(1)));
        assert_eq!(d.throw(Exception::runtime("stop")), Ok(Step::Yielded(99)));
        assert_eq!(&*log.borrow(), &["inner"]);
    }

    #[test]
    fn test_exception_completing_inner_sends_its_value() {
        let mut inner = Some(script(|signal| match signal {
            Signal::Throw(_) => Ok(Step::done(7)),
            _ => Ok(Step::Yielded(value(1))),
        }));
        let mut line = 0;
        let outer = script(move |signal| {
            line += 1;
            match (line, signal) {
                (1, _) => Ok(Step::Yielded(
                    inner.take().map_or(value(0), |p| Delegation::nested(p).into()),
                )),
                (2, Signal::Send(v)) => Ok(Step::Yielded(value(v * 10))),
                (2, other) => panic!("expected the completion value, got {other:?}"),
                _ => Ok(Step::exhausted()),
            }
        });
        let mut d = yield_from(outer);

        assert_eq!(d.resume(), Ok(Step::Yielded(1)));
        assert_eq!(d.throw(Exception::value("stop")), Ok(Step::Yielded(70)));
        assert_eq!(d.state(), DriverState::Outer);
        assert_eq!(drain(d), (vec![], Ok(None)));
    }

    #[test]
    fn test_refused_exception_reaches_nested_middle_frame() {
        let mut line = 0;
        let middle = script(move |signal| {
            line += 1;
            match (line, signal) {
                (1, _) => Ok(Step::Yielded(Delegation::iter([5]).into())),
                (2, Signal::Throw(e)) if e.is(ExceptionKind::Value) => Ok(Step::Yielded(value(55))),
                (_, Signal::Throw(e)) => Err(e),
                (3, _) => Ok(Step::Yielded(value(3))),
                _ => Ok(Step::exhausted()),
            }
        });
        let mut d = yield_from(linear(vec![Delegation::nested(middle).into()], None));

        assert_eq!(d.resume(), Ok(Step::Yielded(5)));
        assert_eq!(d.depth(), 2);
        assert_eq!(d.throw(Exception::value("x")), Ok(Step::Yielded(55)));
        assert_eq!(d.depth(), 1);
        assert_eq!(drain(d), (vec![3], Ok(None)));
    }

    #[test]
    fn test_unhandled_exception_propagates_verbatim() {
        let log: Log = Rc::default();
        let outer_log = Rc::clone(&log);
        let outer = linear(vec![value(1), logged(&log, "inner", vec![2, 3]).into()], None)
            .on_close(move || outer_log.borrow_mut().push("outer".to_string()));
        let mut d = yield_from(outer);

        assert_eq!(d.resume(), Ok(Step::Yielded(1)));
        assert_eq!(d.resume(), Ok(Step::Yielded(2)));
        let err = Exception::custom("KeyError", "k");
        assert_eq!(d.throw(err.clone()), Err(err));
        assert!(d.is_terminated());
        assert_eq!(&*log.borrow(), &["inner", "outer"]);

        assert_eq!(d.resume(), Ok(Step::exhausted()));
        assert_eq!(d.throw(Exception::value("late")), Err(Exception::value("late")));
    }

    #[test]
    fn test_close_is_lifo_and_happens_once() {
        let log: Log = Rc::default();
        let outer_log = Rc::clone(&log);
        let middle_log = Rc::clone(&log);

        let middle = linear(vec![logged(&log, "inner", vec![2, 3]).into()], None)
            .on_close(move || middle_log.borrow_mut().push("middle".to_string()));
        let outer = linear(vec![value(1), Delegation::nested(middle).into()], None)
            .on_close(move || outer_log.borrow_mut().push("outer".to_string()));
        let mut d = yield_from(outer);

        assert_eq!(d.resume(), Ok(Step::Yielded(1)));
        assert_eq!(d.resume(), Ok(Step::Yielded(2)));
        assert_eq!(d.depth(), 2);

        d.close();
        d.close();
        drop(d);
        assert_eq!(&*log.borrow(), &["inner", "middle", "outer"]);
    }

    #[test]
    fn test_close_before_first_value_closes_outer() {
        let log: Log = Rc::default();
        let outer_log = Rc::clone(&log);
        let outer = linear(vec![value(1)], None)
            .on_close(move || outer_log.borrow_mut().push("outer".to_string()));
        let mut d = yield_from(outer);

        d.close();
        assert_eq!(d.state(), DriverState::Terminated);
        assert_eq!(&*log.borrow(), &["outer"]);
        assert_eq!(d.resume(), Ok(Step::exhausted()));
    }

    #[test]
    fn test_drop_closes_active_producers() {
        let log: Log = Rc::default();
        let outer_log = Rc::clone(&log);
        let outer = linear(vec![logged(&log, "inner", vec![1, 2]).into()], None)
            .on_close(move || outer_log.borrow_mut().push("outer".to_string()));
        {
            let mut d = yield_from(outer);
            assert_eq!(d.resume(), Ok(Step::Yielded(1)));
        }
        assert_eq!(&*log.borrow(), &["inner", "outer"]);
    }

    #[test]
    fn test_outer_closed_once_after_exhaustion() {
        let log: Log = Rc::default();
        let outer_log = Rc::clone(&log);
        let outer = linear(vec![value(1)], None)
            .on_close(move || outer_log.borrow_mut().push("outer".to_string()));
        let mut d = yield_from(outer);

        assert_eq!(drain(&mut d), (vec![1], Ok(None)));
        d.close();
        drop(d);
        assert_eq!(&*log.borrow(), &["outer"]);
    }

    #[test]
    fn test_outer_without_throw_capability_terminates() {
        let outer = from_iter::<_, i32, (), Exception>(vec![value(1), value(2)]);
        let mut d = yield_from(outer);

        assert_eq!(d.resume(), Ok(Step::Yielded(1)));
        assert_eq!(d.throw(Exception::value("x")), Err(Exception::value("x")));
        assert_eq!(d.state(), DriverState::Terminated);
    }

    #[test]
    fn test_first_call_may_throw_into_outer() {
        let mut d = yield_from(linear(vec![value(1)], None));
        assert_eq!(d.throw(Exception::value("early")), Err(Exception::value("early")));
        assert!(d.is_terminated());
    }

    #[test]
    fn test_capabilities_and_outer_access() {
        let d = yield_from(linear(vec![], Some(1)));
        assert_eq!(d.capabilities(), Capabilities::ALL);
        assert_eq!(d.outer().capabilities(), Capabilities::RESUME_ONLY.with_send().with_throw());
    }
}
