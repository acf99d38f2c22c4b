use crate::{pull::Pull, producer::Producer};

/// Yields running left-fold results, seeded by the first upstream element.
///
/// The first yield is the first element itself; each later yield is
/// `f(acc, next)`. Created by [`Seq::accumulate`](crate::Seq::accumulate)
/// and [`Seq::running_sum`](crate::Seq::running_sum).
pub struct Accumulate<P: Producer, F> {
    upstream: P,
    acc: Option<P::Item>,
    f: F,
}

impl<P: Producer, F> Accumulate<P, F> {
    pub(crate) fn new(upstream: P, f: F) -> Self {
        Accumulate {
            upstream,
            acc: None,
            f,
        }
    }
}

impl<P, F> Producer for Accumulate<P, F>
where
    P: Producer,
    P::Item: Clone,
    F: FnMut(P::Item, P::Item) -> P::Item,
{
    type Item = P::Item;

    fn pull(&mut self) -> Pull<P::Item> {
        let item = match self.upstream.pull() {
            Pull::Item(item) => item,
            Pull::Done => return Pull::Done,
        };
        let next = match self.acc.take() {
            None => item,
            Some(acc) => (self.f)(acc, item),
        };
        self.acc = Some(next.clone());
        Pull::Item(next)
    }
}

/// Yields running left-fold results seeded with an explicit initial value.
///
/// The first yield is `f(initial, first_element)`; the accumulator type may
/// differ from the element type. Created by
/// [`Seq::accumulate_from`](crate::Seq::accumulate_from).
pub struct AccumulateFrom<P, U, F> {
    upstream: P,
    acc: Option<U>,
    f: F,
}

impl<P, U, F> AccumulateFrom<P, U, F> {
    pub(crate) fn new(upstream: P, initial: U, f: F) -> Self {
        AccumulateFrom {
            upstream,
            acc: Some(initial),
            f,
        }
    }
}

impl<P, U, F> Producer for AccumulateFrom<P, U, F>
where
    P: Producer,
    U: Clone,
    F: FnMut(U, P::Item) -> U,
{
    type Item = U;

    fn pull(&mut self) -> Pull<U> {
        let item = match self.upstream.pull() {
            Pull::Item(item) => item,
            Pull::Done => return Pull::Done,
        };
        let Some(acc) = self.acc.take() else {
            return Pull::Done;
        };
        let next = (self.f)(acc, item);
        self.acc = Some(next.clone());
        Pull::Item(next)
    }
}

#[cfg(test)]
mod tests {
    use crate::from_iter;

    #[test]
    fn test_accumulate_starts_at_first_element() {
        let running: Vec<_> = from_iter([1, 2, 3]).accumulate(|a, b| a + b).collect();
        assert_eq!(running, vec![1, 3, 6]);
    }

    #[test]
    fn test_running_sum_matches_accumulate() {
        let running: Vec<_> = from_iter([1, 2, 3, 4]).running_sum().collect();
        assert_eq!(running, vec![1, 3, 6, 10]);
    }

    #[test]
    fn test_accumulate_empty_is_empty() {
        let running: Vec<i32> = crate::empty().accumulate(|a, b| a + b).collect();
        assert!(running.is_empty());
    }

    #[test]
    fn test_accumulate_from_seeds_first_yield() {
        let running: Vec<_> = from_iter([1, 2, 3])
            .accumulate_from(10, |a, b| a + b)
            .collect();
        assert_eq!(running, vec![11, 13, 16]);
    }

    #[test]
    fn test_accumulate_from_different_accumulator_type() {
        let built: Vec<String> = from_iter([1, 2, 3])
            .accumulate_from(String::new(), |mut s, n| {
                s.push_str(&n.to_string());
                s
            })
            .collect();
        assert_eq!(built, vec!["1", "12", "123"]);
    }
}
