/// One step of a producer: either a value it yielded or the signal that it finished.
///
/// Producers in this crate complete with `Step::Complete(Option<R>)`, so a
/// completion value is optional and is never confused with an error: failures
/// travel in the surrounding `Result`.
///
/// # Examples
///
/// ```rust
/// use yield_from::Step;
///
/// let value: Step<i32, Option<&str>> = Step::Yielded(1);
/// let done: Step<i32, Option<&str>> = Step::Complete(Some("done"));
///
/// assert_eq!(value.map_yielded(|v| v + 1), Step::Yielded(2));
/// assert_eq!(done.complete_value(), Some(Some("done")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D> {
    /// The producer suspended after yielding a value.
    Yielded(Y),
    /// The producer is exhausted.
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step is `Yielded`.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// The yielded value, discarding a completion.
    ///
    /// ```rust
    /// use yield_from::Step;
    ///
    /// assert_eq!(Step::<i32, ()>::Yielded(7).yielded_value(), Some(7));
    /// assert_eq!(Step::<i32, ()>::Complete(()).yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// The completion payload, discarding a yielded value.
    #[inline]
    pub fn complete_value(self) -> Option<D> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(d) => Some(d),
        }
    }

    /// Applies `f` to a yielded value, leaving a completion untouched.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Applies `f` to the completion payload, leaving a yielded value untouched.
    #[inline]
    pub fn map_complete<D2, F>(self, f: F) -> Step<Y, D2>
    where
        F: FnOnce(D) -> D2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(f(d)),
        }
    }

    /// Converts from `&Step<Y, D>` to `Step<&Y, &D>`.
    #[inline]
    pub const fn as_ref(&self) -> Step<&Y, &D> {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Returns the yielded value.
    ///
    /// # Panics
    ///
    /// Panics if the producer completed instead.
    ///
    /// ```should_panic
    /// use yield_from::Step;
    ///
    /// Step::<i32, Option<i32>>::Complete(None).unwrap_yielded();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }

    /// Returns the completion payload.
    ///
    /// # Panics
    ///
    /// Panics if the producer yielded instead.
    #[inline]
    #[track_caller]
    pub fn unwrap_complete(self) -> D {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(d) => d,
        }
    }
}

impl<Y, R> Step<Y, Option<R>> {
    /// Builds the completion step of a producer that finished with `value`.
    #[inline]
    pub const fn done(value: R) -> Self {
        Step::Complete(Some(value))
    }

    /// Builds the completion step of a producer that finished without a value.
    #[inline]
    pub const fn exhausted() -> Self {
        Step::Complete(None)
    }
}
