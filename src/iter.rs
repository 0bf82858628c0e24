//! Iterator adapter for producers.
//!
//! [`ProducerIter`] resumes a producer until it completes, yielding
//! `Ok(value)` for every value and `Err(e)` once if the producer raises. The
//! completion value stays available afterwards.
//!
//! # Examples
//!
//! ```rust
//! use yield_from::prelude::*;
//!
//! let mut iter = from_iter::<_, (), (), Exception>([1, 2, 3]).values();
//! let values: Result<Vec<_>, _> = iter.by_ref().collect();
//! assert_eq!(values, Ok(vec![1, 2, 3]));
//! assert!(iter.is_complete());
//! ```

use std::iter::FusedIterator;

use crate::producer::{Producer, Signal};
use crate::step::Step;

/// Iterator over the values of a producer.
///
/// Both `ProducerIter` and `&mut ProducerIter` implement `Iterator`, so the
/// adapter can be iterated without being consumed and queried afterwards.
/// [`send`](ProducerIter::send) and [`throw`](ProducerIter::throw) drive the
/// producer with a value or an exception in the middle of an iteration.
pub struct ProducerIter<P>
where
    P: Producer,
{
    state: IterState<P>,
}

enum IterState<P>
where
    P: Producer,
{
    Active(P),
    Complete(Option<P::Return>),
    Failed,
    Invalid,
}

impl<P> IterState<P>
where
    P: Producer,
{
    fn take(&mut self) -> Self {
        std::mem::replace(self, IterState::Invalid)
    }
}

impl<P> ProducerIter<P>
where
    P: Producer,
{
    pub fn new(producer: P) -> Self {
        Self {
            state: IterState::Active(producer),
        }
    }

    /// Check if the producer has completed.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, IterState::Complete(_))
    }

    /// Check if the producer raised an exception.
    pub fn is_failed(&self) -> bool {
        matches!(self.state, IterState::Failed)
    }

    /// The completion value, if the producer completed with one.
    pub fn return_value(&self) -> Option<&P::Return> {
        match &self.state {
            IterState::Complete(ret) => ret.as_ref(),
            _ => None,
        }
    }

    /// Consume the iterator and return the completion value, if any.
    pub fn into_return(self) -> Option<P::Return> {
        match self.state {
            IterState::Complete(ret) => ret,
            _ => None,
        }
    }

    /// Resume the producer with `value` instead of a plain resume.
    ///
    /// Returns `None` once the producer is no longer active.
    pub fn send(&mut self, value: P::Input) -> Option<Result<P::Yield, P::Error>> {
        self.advance(Signal::Send(value))
    }

    /// Raise `error` inside the producer at its current suspension point.
    ///
    /// If the producer is no longer active the exception comes straight back.
    pub fn throw(&mut self, error: P::Error) -> Option<Result<P::Yield, P::Error>> {
        self.advance(Signal::Throw(error))
    }

    fn advance(&mut self, signal: Signal<P::Input, P::Error>) -> Option<Result<P::Yield, P::Error>> {
        match self.state.take() {
            IterState::Active(mut producer) => match producer.signal(signal) {
                Ok(Step::Yielded(value)) => {
                    self.state = IterState::Active(producer);
                    Some(Ok(value))
                }
                Ok(Step::Complete(ret)) => {
                    self.state = IterState::Complete(ret);
                    None
                }
                Err(error) => {
                    self.state = IterState::Failed;
                    Some(Err(error))
                }
            },
            finished => {
                self.state = finished;
                match signal {
                    Signal::Throw(error) => Some(Err(error)),
                    _ => None,
                }
            }
        }
    }
}

impl<P> Iterator for ProducerIter<P>
where
    P: Producer,
{
    type Item = Result<P::Yield, P::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            IterState::Active(_) => self.advance(Signal::Resume),
            _ => None,
        }
    }
}

impl<P> FusedIterator for ProducerIter<P> where P: Producer {}
