//! Transforming yielded values and completion values.
//!
//! [`MapYield`] and [`MapReturn`] adapt a producer to different types while
//! forwarding every optional operation, and its capabilities, unchanged.

use crate::producer::{Capabilities, Outcome, Producer};

/// Transforms yielded values from the wrapped producer.
pub struct MapYield<P, F> {
    f: F,
    producer: P,
}

/// Create a producer that transforms yielded values from `producer`.
///
/// # Examples
///
/// ```
/// use yield_from::prelude::*;
///
/// let mut mapped = map_yield(|n: i32| n.to_string(), from_iter::<_, (), (), Exception>([1, 2]));
/// assert_eq!(mapped.resume(), Ok(Step::Yielded("1".to_string())));
/// ```
pub fn map_yield<P, F, Y2>(f: F, producer: P) -> MapYield<P, F>
where
    P: Producer,
    F: FnMut(P::Yield) -> Y2,
{
    MapYield { f, producer }
}

impl<P, F, Y2> Producer for MapYield<P, F>
where
    P: Producer,
    F: FnMut(P::Yield) -> Y2,
{
    type Yield = Y2;
    type Input = P::Input;
    type Return = P::Return;
    type Error = P::Error;

    fn resume(&mut self) -> Outcome<Y2, P::Return, P::Error> {
        Ok(self.producer.resume()?.map_yielded(&mut self.f))
    }

    fn send(&mut self, value: P::Input) -> Outcome<Y2, P::Return, P::Error> {
        Ok(self.producer.send(value)?.map_yielded(&mut self.f))
    }

    fn throw(&mut self, error: P::Error) -> Outcome<Y2, P::Return, P::Error> {
        Ok(self.producer.throw(error)?.map_yielded(&mut self.f))
    }

    fn close(&mut self) {
        self.producer.close()
    }

    fn capabilities(&self) -> Capabilities {
        self.producer.capabilities()
    }
}

/// Transforms the completion value of the wrapped producer.
///
/// A completion without a value stays without a value.
pub struct MapReturn<P, F> {
    f: F,
    producer: P,
}

/// Create a producer that transforms the completion value of `producer`.
///
/// Useful when a delegated producer's completion value must match the type a
/// delegating producer accepts.
///
/// # Examples
///
/// ```
/// use yield_from::prelude::*;
///
/// let mut p = map_return(|n: i32| n * 2, complete::<(), (), _, Exception>(21));
/// assert_eq!(p.resume(), Ok(Step::done(42)));
/// ```
pub fn map_return<P, F, R2>(f: F, producer: P) -> MapReturn<P, F>
where
    P: Producer,
    F: FnMut(P::Return) -> R2,
{
    MapReturn { f, producer }
}

impl<P, F, R2> Producer for MapReturn<P, F>
where
    P: Producer,
    F: FnMut(P::Return) -> R2,
{
    type Yield = P::Yield;
    type Input = P::Input;
    type Return = R2;
    type Error = P::Error;

    fn resume(&mut self) -> Outcome<P::Yield, R2, P::Error> {
        let f = &mut self.f;
        Ok(self.producer.resume()?.map_complete(|r| r.map(f)))
    }

    fn send(&mut self, value: P::Input) -> Outcome<P::Yield, R2, P::Error> {
        let f = &mut self.f;
        Ok(self.producer.send(value)?.map_complete(|r| r.map(f)))
    }

    fn throw(&mut self, error: P::Error) -> Outcome<P::Yield, R2, P::Error> {
        let f = &mut self.f;
        Ok(self.producer.throw(error)?.map_complete(|r| r.map(f)))
    }

    fn close(&mut self) {
        self.producer.close()
    }

    fn capabilities(&self) -> Capabilities {
        self.producer.capabilities()
    }
}
