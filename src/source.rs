//! Building sequences from scratch.
//!
//! This module provides the producers behind the crate's free constructors:
//! [`from_iter`] wraps anything iterable, [`from_fn`] wraps a closure (which
//! may be unbounded), [`once`] yields a single value, and [`empty`] yields
//! nothing.

use crate::{pull::Pull, producer::Producer, seq::Seq};

/// Producer over any standard iterator.
pub struct FromIter<I>(I);

impl<I> Producer for FromIter<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        self.0.next().into()
    }
}

/// Wrap anything iterable as a lazy sequence.
///
/// ```rust
/// use lazyseq::from_iter;
///
/// let doubled: Vec<_> = from_iter(1..=3).map(|x| x * 2).collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn from_iter<I>(iterable: I) -> Seq<FromIter<I::IntoIter>>
where
    I: IntoIterator,
{
    Seq::new(FromIter(iterable.into_iter()))
}

/// Producer driven by a closure returning [`Pull`] values.
///
/// The closure is in full control of termination, so `from_fn` sources may
/// be unbounded.
pub struct FromFn<F>(F);

impl<T, F> Producer for FromFn<F>
where
    F: FnMut() -> Pull<T>,
{
    type Item = T;

    fn pull(&mut self) -> Pull<T> {
        (self.0)()
    }
}

/// Create a sequence from a closure.
///
/// ```rust
/// use lazyseq::{from_fn, Pull};
///
/// let mut n = 0;
/// let mut squares = from_fn(move || {
///     n += 1;
///     Pull::Item(n * n)
/// });
/// assert_eq!(squares.take(4).unwrap(), vec![1, 4, 9, 16]);
/// ```
pub fn from_fn<T, F: FnMut() -> Pull<T>>(f: F) -> Seq<FromFn<F>> {
    Seq::new(FromFn(f))
}

/// Producer that yields a single value, then is exhausted.
pub struct Once<T>(Option<T>);

impl<T> Producer for Once<T> {
    type Item = T;

    fn pull(&mut self) -> Pull<T> {
        self.0.take().into()
    }
}

/// Create a single-element sequence.
///
/// ```rust
/// use lazyseq::once;
///
/// assert_eq!(once(7).collect::<Vec<_>>(), vec![7]);
/// ```
pub fn once<T>(value: T) -> Seq<Once<T>> {
    Seq::new(Once(Some(value)))
}

/// Producer that is exhausted from the start.
pub struct Empty<T>(std::marker::PhantomData<T>);

impl<T> Producer for Empty<T> {
    type Item = T;

    fn pull(&mut self) -> Pull<T> {
        Pull::Done
    }
}

/// Create an empty sequence.
///
/// ```rust
/// use lazyseq::empty;
///
/// assert!(empty::<i32>().next().is_err());
/// ```
pub fn empty<T>() -> Seq<Empty<T>> {
    Seq::new(Empty(std::marker::PhantomData))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter_preserves_order() {
        let values: Vec<_> = from_iter(vec!["a", "b", "c"]).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_fn_unbounded() {
        let mut n = 0u64;
        let mut naturals = from_fn(move || {
            n += 1;
            Pull::Item(n)
        });
        assert_eq!(naturals.take(3).unwrap(), vec![1, 2, 3]);
        assert_eq!(naturals.next().unwrap(), 4);
    }

    #[test]
    fn test_from_fn_terminating() {
        let mut left = 2;
        let seq = from_fn(move || {
            if left == 0 {
                Pull::Done
            } else {
                left -= 1;
                Pull::Item(left)
            }
        });
        assert_eq!(seq.collect::<Vec<_>>(), vec![1, 0]);
    }

    #[test]
    fn test_once_and_empty() {
        assert_eq!(once(1).collect::<Vec<_>>(), vec![1]);

        let mut nothing = empty::<i32>();
        assert!(nothing.next().is_err());
        assert!(nothing.next().is_err());
    }
}
