use crate::producer::{Capabilities, Outcome, Producer};

/// Runs a hook once the wrapped producer has been closed.
///
/// The wrapped producer is closed first (if it supports closing), then the
/// hook runs. The hook runs at most once; later `close` calls are no-ops.
pub struct OnClose<P, F> {
    producer: P,
    hook: Option<F>,
}

/// Attach a cleanup hook to `producer`.
///
/// The result always advertises the `close` capability.
///
/// ```
/// use std::{cell::Cell, rc::Rc};
/// use yield_from::prelude::*;
///
/// let closed = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&closed);
/// let mut p = on_close(move || flag.set(true), from_iter::<_, (), (), Exception>([1]));
///
/// assert!(p.capabilities().can_close());
/// p.close();
/// assert!(closed.get());
/// ```
pub fn on_close<P, F>(hook: F, producer: P) -> OnClose<P, F>
where
    P: Producer,
    F: FnOnce(),
{
    OnClose {
        producer,
        hook: Some(hook),
    }
}

impl<P, F> Producer for OnClose<P, F>
where
    P: Producer,
    F: FnOnce(),
{
    type Yield = P::Yield;
    type Input = P::Input;
    type Return = P::Return;
    type Error = P::Error;

    fn resume(&mut self) -> Outcome<P::Yield, P::Return, P::Error> {
        self.producer.resume()
    }

    fn send(&mut self, value: P::Input) -> Outcome<P::Yield, P::Return, P::Error> {
        self.producer.send(value)
    }

    fn throw(&mut self, error: P::Error) -> Outcome<P::Yield, P::Return, P::Error> {
        self.producer.throw(error)
    }

    fn close(&mut self) {
        crate::producer::close_if_supported(&mut self.producer);
        if let Some(hook) = self.hook.take() {
            hook();
        }
    }

    fn capabilities(&self) -> Capabilities {
        self.producer.capabilities().with_close()
    }
}
