use std::marker::PhantomData;

use crate::producer::{Outcome, Producer};
use crate::step::Step;

/// A resume-only producer over an iterator.
///
/// It cannot receive values, exceptions or close requests; it completes
/// without a value once the iterator is exhausted.
pub struct IterProducer<I, S, R, E> {
    iter: I,
    _types: PhantomData<fn(S) -> (R, E)>,
}

/// Adapt anything iterable into a producer.
///
/// ```rust
/// use yield_from::prelude::*;
///
/// let mut p = from_iter::<_, (), (), Exception>([1, 2]);
/// assert_eq!(p.resume(), Ok(Step::Yielded(1)));
/// assert_eq!(p.resume(), Ok(Step::Yielded(2)));
/// assert_eq!(p.resume(), Ok(Step::exhausted()));
/// ```
pub fn from_iter<I, S, R, E>(iter: I) -> IterProducer<I::IntoIter, S, R, E>
where
    I: IntoIterator,
{
    IterProducer {
        iter: iter.into_iter(),
        _types: PhantomData,
    }
}

impl<I, S, R, E> Producer for IterProducer<I, S, R, E>
where
    I: Iterator,
{
    type Yield = I::Item;
    type Input = S;
    type Return = R;
    type Error = E;

    fn resume(&mut self) -> Outcome<I::Item, R, E> {
        match self.iter.next() {
            Some(item) => Ok(Step::Yielded(item)),
            None => Ok(Step::exhausted()),
        }
    }
}
