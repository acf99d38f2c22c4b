use crate::{pull::Pull, producer::Producer};

/// Drains the upstream into a buffer on first pull, rearranges it once, then
/// yields the buffer in order.
///
/// Backs [`Seq::sorted`](crate::Seq::sorted) and friends plus
/// [`Seq::reversed`](crate::Seq::reversed): those operations need to see every
/// remaining element, but the drain is still deferred until this producer is
/// actually driven.
pub struct Materialized<P: Producer, F> {
    state: State<P, F>,
}

enum State<P: Producer, F> {
    Pending { upstream: P, arrange: F },
    Active(std::vec::IntoIter<P::Item>),
    Invalid,
}

impl<P: Producer, F> State<P, F> {
    fn take(&mut self) -> Self {
        std::mem::replace(self, State::Invalid)
    }
}

impl<P: Producer, F> Materialized<P, F> {
    pub(crate) fn new(upstream: P, arrange: F) -> Self {
        Materialized {
            state: State::Pending { upstream, arrange },
        }
    }
}

impl<P, F> Producer for Materialized<P, F>
where
    P: Producer,
    F: FnOnce(&mut Vec<P::Item>),
{
    type Item = P::Item;

    fn pull(&mut self) -> Pull<P::Item> {
        match self.state.take() {
            State::Pending {
                mut upstream,
                arrange,
            } => {
                let mut buf = Vec::new();
                while let Pull::Item(item) = upstream.pull() {
                    buf.push(item);
                }
                arrange(&mut buf);

                let mut items = buf.into_iter();
                let out = items.next();
                self.state = State::Active(items);
                out.into()
            }
            State::Active(mut items) => {
                let out = items.next();
                self.state = State::Active(items);
                out.into()
            }
            State::Invalid => Pull::Done,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::from_iter;

    #[test]
    fn test_sorted_ascending_and_stable() {
        let sorted: Vec<_> = from_iter([3, 1, 2]).sorted().collect();
        assert_eq!(sorted, vec![1, 2, 3]);

        // stable: equal keys keep their original relative order
        let sorted: Vec<_> = from_iter([(1, 'b'), (0, 'a'), (1, 'a'), (0, 'b')])
            .sorted_by_key(|&(k, _)| k)
            .collect();
        assert_eq!(sorted, vec![(0, 'a'), (0, 'b'), (1, 'b'), (1, 'a')]);
    }

    #[test]
    fn test_sorted_by_reversed_comparator() {
        let sorted: Vec<_> = from_iter([2, 3, 1]).sorted_by(|a, b| b.cmp(a)).collect();
        assert_eq!(sorted, vec![3, 2, 1]);
    }

    #[test]
    fn test_reversed() {
        let rev: Vec<_> = from_iter([1, 2, 3]).reversed().collect();
        assert_eq!(rev, vec![3, 2, 1]);
    }

    #[test]
    fn test_sorted_then_reversed_is_descending() {
        let source = vec![4, 1, 3, 2];
        let ascending: Vec<_> = from_iter(source.clone()).sorted().collect();
        let descending: Vec<_> = from_iter(source).sorted().reversed().collect();

        let mut expected = ascending.clone();
        expected.reverse();
        assert_eq!(descending, expected);
    }

    #[test]
    fn test_materialization_is_deferred() {
        use std::{cell::Cell, rc::Rc};

        let pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulls);
        let mut seq = from_iter(0..4)
            .map(move |x| {
                counter.set(counter.get() + 1);
                x
            })
            .sorted();

        assert_eq!(pulls.get(), 0);
        seq.next().unwrap();
        assert_eq!(pulls.get(), 4); // full drain happens on first demand
    }
}
