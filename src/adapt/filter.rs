use crate::{pull::Pull, producer::Producer};

/// Keeps only the upstream elements matching a predicate.
///
/// Created by [`Seq::filter`](crate::Seq::filter).
pub struct Filter<P, F> {
    upstream: P,
    pred: F,
}

impl<P, F> Filter<P, F> {
    pub(crate) fn new(upstream: P, pred: F) -> Self {
        Filter { upstream, pred }
    }
}

impl<P, F> Producer for Filter<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn pull(&mut self) -> Pull<P::Item> {
        loop {
            match self.upstream.pull() {
                Pull::Item(item) if (self.pred)(&item) => return Pull::Item(item),
                Pull::Item(_) => continue,
                Pull::Done => return Pull::Done,
            }
        }
    }
}

/// Unwraps `Some` elements and drops `None`s from an upstream of options.
///
/// Created by [`Seq::compact`](crate::Seq::compact). This is the crate's
/// rendition of filtering without a predicate: only the non-empty values
/// survive.
pub struct Compact<P> {
    upstream: P,
}

impl<P> Compact<P> {
    pub(crate) fn new(upstream: P) -> Self {
        Compact { upstream }
    }
}

impl<P, T> Producer for Compact<P>
where
    P: Producer<Item = Option<T>>,
{
    type Item = T;

    fn pull(&mut self) -> Pull<T> {
        loop {
            match self.upstream.pull() {
                Pull::Item(Some(item)) => return Pull::Item(item),
                Pull::Item(None) => continue,
                Pull::Done => return Pull::Done,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::from_iter;

    #[test]
    fn test_filter_keeps_matching() {
        let evens: Vec<_> = from_iter(1..=10).filter(|x| x % 2 == 0).collect();
        assert_eq!(evens, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_filter_none_match() {
        let none: Vec<i32> = from_iter(1..=5).filter(|_| false).collect();
        assert!(none.is_empty());
    }

    #[test]
    fn test_compact_drops_nones_in_order() {
        let present: Vec<_> = from_iter(vec![Some(1), None, Some(2), None, Some(3)])
            .compact()
            .collect();
        assert_eq!(present, vec![1, 2, 3]);
    }
}
