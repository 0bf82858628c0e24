//! Functions for driving producers to completion.
//!
//! A *responder* answers every yielded value with the [`Signal`] the producer
//! is resumed with next: a plain resume, a sent value, or an injected exception.

use crate::producer::{Producer, Signal};
use crate::step::Step;

/// Drive `producer` to completion, starting with a plain resume.
///
/// Returns the completion value, or the exception the producer did not handle.
///
/// ```rust
/// use yield_from::prelude::*;
///
/// let mut total = 0;
/// let adder = from_fn(move |signal: Signal<i32, Exception>| match signal {
///     Signal::Resume => Ok(Step::Yielded(total)),
///     Signal::Send(n) if total + n > 10 => Ok(Step::done(total + n)),
///     Signal::Send(n) => {
///         total += n;
///         Ok(Step::Yielded(total))
///     }
///     Signal::Throw(e) => Err(e),
/// });
///
/// assert_eq!(handle(adder, |_| Signal::Send(4)), Ok(Some(12)));
/// ```
pub fn handle<P, R>(producer: P, responder: R) -> Result<Option<P::Return>, P::Error>
where
    P: Producer,
    R: FnMut(P::Yield) -> Signal<P::Input, P::Error>,
{
    handle_from(producer, Signal::Resume, responder)
}

/// Drive `producer` to completion, starting with `first`.
pub fn handle_from<P, R>(
    mut producer: P,
    first: Signal<P::Input, P::Error>,
    mut responder: R,
) -> Result<Option<P::Return>, P::Error>
where
    P: Producer,
    R: FnMut(P::Yield) -> Signal<P::Input, P::Error>,
{
    let mut signal = first;
    loop {
        match producer.signal(signal)? {
            Step::Yielded(value) => signal = responder(value),
            Step::Complete(ret) => return Ok(ret),
        }
    }
}
