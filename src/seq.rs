//! The lazy sequence wrapper.
//!
//! [`Seq`] wraps a single-pass [`Producer`] and exposes two kinds of methods:
//!
//! - **Transformations** (`map`, `filter`, `chunk`, `window`, `chain`,
//!   `accumulate`, `sorted`, `reversed`, `tee`, the combinatorial expansions)
//!   move `self` into a new adaptor and return a new `Seq`. Nothing is pulled
//!   from the source until the returned sequence is driven.
//! - **Terminals** (`next`, `skip`, `nth`, `take`, `collect`, `reduce`,
//!   `fold`, `sum`, `min`, `max`, `count`, `for_each`) consume elements
//!   eagerly and return concrete values. Operations that need more elements
//!   than remain return [`Exhausted`].
//!
//! Because transformations take `self` by value, a partially consumed
//! sequence cannot be driven from two places; [`Seq::tee`] is the one
//! sanctioned way to split a sequence into independent views.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::from_iter;
//!
//! let total: i32 = from_iter(1..=10)
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * x)
//!     .sum();
//! assert_eq!(total, 220);
//! ```

use std::{cmp::Ordering, iter::Sum, ops::Add};

use crate::{
    adapt::{
        Accumulate, AccumulateFrom, Chain, Chunk, ChunkDefault, Combinations,
        CombinationsWithReplacement, Compact, Filter, Map, Materialized, Permutations, Tee,
        Window,
    },
    error::Exhausted,
    producer::Producer,
    pull::Pull,
};

/// A lazily-evaluated sequence over a single-pass producer.
///
/// Construct one with [`from_iter`](crate::from_iter),
/// [`from_fn`](crate::from_fn), or [`Seq::new`] over a hand-written
/// [`Producer`].
pub struct Seq<P> {
    producer: P,
}

impl<P: Producer> Seq<P> {
    /// Wrap a producer.
    pub fn new(producer: P) -> Self {
        Seq { producer }
    }

    /// Pull the next element, or [`Pull::Done`] if the sequence is exhausted.
    ///
    /// This is the primitive the convenience terminals are built on; there is
    /// no way to check for exhaustion without consuming.
    pub fn pull(&mut self) -> Pull<P::Item> {
        self.producer.pull()
    }

    /// Unwrap the sequence, returning the underlying producer with its
    /// remaining elements.
    pub fn into_inner(self) -> P {
        self.producer
    }

    /// Erase the producer type behind a box.
    ///
    /// Useful when branches of different adaptor chains must share a type.
    pub fn boxed(self) -> Seq<Box<dyn Producer<Item = P::Item>>>
    where
        P: 'static,
    {
        Seq::new(Box::new(self.producer))
    }

    // --- transformations ---

    /// Apply `f` to each element.
    ///
    /// ```rust
    /// use lazyseq::from_iter;
    ///
    /// let doubled: Vec<_> = from_iter([1, 2, 3]).map(|x| x * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    pub fn map<U, F>(self, f: F) -> Seq<Map<P, F>>
    where
        F: FnMut(P::Item) -> U,
    {
        Seq::new(Map::new(self.producer, f))
    }

    /// Keep only elements matching `pred`.
    ///
    /// ```rust
    /// use lazyseq::from_iter;
    ///
    /// let odd: Vec<_> = from_iter(1..=5).filter(|x| x % 2 == 1).collect();
    /// assert_eq!(odd, vec![1, 3, 5]);
    /// ```
    pub fn filter<F>(self, pred: F) -> Seq<Filter<P, F>>
    where
        F: FnMut(&P::Item) -> bool,
    {
        Seq::new(Filter::new(self.producer, pred))
    }

    /// Group elements into non-overlapping runs of `n`, dropping a partial
    /// trailing run.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero, regardless of whether the sequence has
    /// elements.
    ///
    /// ```rust
    /// use lazyseq::from_iter;
    ///
    /// let groups: Vec<_> = from_iter([1, 2, 3, 4, 5]).chunk(2).collect();
    /// assert_eq!(groups, vec![vec![1, 2], vec![3, 4]]);
    /// ```
    pub fn chunk(self, n: usize) -> Seq<Chunk<P>> {
        Seq::new(Chunk::new(self.producer, n))
    }

    /// Group elements into runs of `n`, padding a partial trailing run with
    /// clones of `default`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    ///
    /// ```rust
    /// use lazyseq::from_iter;
    ///
    /// let groups: Vec<_> = from_iter([1, 2, 3, 4, 5]).chunk_default(2, 0).collect();
    /// assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5, 0]]);
    /// ```
    pub fn chunk_default(self, n: usize, default: P::Item) -> Seq<ChunkDefault<P>>
    where
        P::Item: Clone,
    {
        Seq::new(ChunkDefault::new(self.producer, n, default))
    }

    /// Slide a window of `n` consecutive elements, advancing by one each
    /// yield. Empty when fewer than `n` elements exist.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    ///
    /// ```rust
    /// use lazyseq::from_iter;
    ///
    /// let windows: Vec<_> = from_iter([1, 2, 3]).window(2).collect();
    /// assert_eq!(windows, vec![vec![1, 2], vec![2, 3]]);
    /// ```
    pub fn window(self, n: usize) -> Seq<Window<P>>
    where
        P::Item: Clone,
    {
        Seq::new(Window::new(self.producer, n))
    }

    /// This sequence's remaining elements, then `other`'s.
    pub fn chain<Q>(self, other: Seq<Q>) -> Seq<Chain<P, Q>>
    where
        Q: Producer<Item = P::Item>,
    {
        Seq::new(Chain::new(self.producer, other.producer))
    }

    /// Running left fold: the first yield is the first element, then
    /// `f(acc, next)` for each later element.
    ///
    /// ```rust
    /// use lazyseq::from_iter;
    ///
    /// let running: Vec<_> = from_iter([1, 2, 3]).accumulate(|a, b| a + b).collect();
    /// assert_eq!(running, vec![1, 3, 6]);
    /// ```
    pub fn accumulate<F>(self, f: F) -> Seq<Accumulate<P, F>>
    where
        P::Item: Clone,
        F: FnMut(P::Item, P::Item) -> P::Item,
    {
        Seq::new(Accumulate::new(self.producer, f))
    }

    /// Running left fold seeded with `initial`: the first yield is
    /// `f(initial, first_element)`. The accumulator type may differ from the
    /// element type.
    pub fn accumulate_from<U, F>(self, initial: U, f: F) -> Seq<AccumulateFrom<P, U, F>>
    where
        U: Clone,
        F: FnMut(U, P::Item) -> U,
    {
        Seq::new(AccumulateFrom::new(self.producer, initial, f))
    }

    /// Running sums: `accumulate` with addition.
    pub fn running_sum(self) -> Seq<Accumulate<P, impl FnMut(P::Item, P::Item) -> P::Item>>
    where
        P::Item: Add<Output = P::Item> + Clone,
    {
        Seq::new(Accumulate::new(self.producer, |a, b| a + b))
    }

    /// Sort the remaining elements ascending (stable).
    ///
    /// Materializes the sequence internally, but not before the returned
    /// sequence is first driven.
    pub fn sorted(self) -> Seq<Materialized<P, impl FnOnce(&mut Vec<P::Item>)>>
    where
        P::Item: Ord,
    {
        Seq::new(Materialized::new(self.producer, |buf: &mut Vec<P::Item>| {
            buf.sort()
        }))
    }

    /// Sort the remaining elements with a comparator (stable).
    pub fn sorted_by<F>(self, mut cmp: F) -> Seq<Materialized<P, impl FnOnce(&mut Vec<P::Item>)>>
    where
        F: FnMut(&P::Item, &P::Item) -> Ordering,
    {
        Seq::new(Materialized::new(
            self.producer,
            move |buf: &mut Vec<P::Item>| buf.sort_by(&mut cmp),
        ))
    }

    /// Sort the remaining elements by a key (stable).
    pub fn sorted_by_key<K, F>(self, mut key: F) -> Seq<Materialized<P, impl FnOnce(&mut Vec<P::Item>)>>
    where
        K: Ord,
        F: FnMut(&P::Item) -> K,
    {
        Seq::new(Materialized::new(
            self.producer,
            move |buf: &mut Vec<P::Item>| buf.sort_by_key(|item| key(item)),
        ))
    }

    /// Yield the remaining elements in reverse order.
    ///
    /// Materializes the sequence internally on first demand.
    pub fn reversed(self) -> Seq<Materialized<P, impl FnOnce(&mut Vec<P::Item>)>> {
        Seq::new(Materialized::new(self.producer, |buf: &mut Vec<P::Item>| {
            buf.reverse()
        }))
    }

    /// Split into two independent sequences, each replaying the full
    /// remaining elements.
    ///
    /// The branches share a buffer of elements not yet consumed by both and
    /// may be driven in any interleaved order.
    ///
    /// ```rust
    /// use lazyseq::from_iter;
    ///
    /// let (a, b) = from_iter([1, 2, 3]).tee();
    /// assert_eq!(a.collect::<Vec<_>>(), vec![1, 2, 3]);
    /// assert_eq!(b.collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn tee(self) -> (Seq<Tee<P>>, Seq<Tee<P>>)
    where
        P::Item: Clone,
    {
        let mut branches = Tee::split(self.producer, 2).into_iter();
        let a = branches.next().map(Seq::new);
        let b = branches.next().map(Seq::new);
        match (a, b) {
            (Some(a), Some(b)) => (a, b),
            // split(_, 2) always yields two branches
            _ => unreachable!(),
        }
    }

    /// Split into `n` independent sequences.
    pub fn tee_n(self, n: usize) -> Vec<Seq<Tee<P>>>
    where
        P::Item: Clone,
    {
        Tee::split(self.producer, n).into_iter().map(Seq::new).collect()
    }

    /// All permutations of the remaining elements, full length, in
    /// lexicographic-by-position order.
    pub fn permutations(self) -> Seq<Permutations<P>>
    where
        P::Item: Clone,
    {
        Seq::new(Permutations::new(self.producer, None))
    }

    /// All length-`r` permutations. Empty when `r` exceeds the number of
    /// remaining elements.
    pub fn permutations_len(self, r: usize) -> Seq<Permutations<P>>
    where
        P::Item: Clone,
    {
        Seq::new(Permutations::new(self.producer, Some(r)))
    }

    /// All length-`r` combinations without replacement. Empty when `r`
    /// exceeds the number of remaining elements.
    pub fn combinations(self, r: usize) -> Seq<Combinations<P>>
    where
        P::Item: Clone,
    {
        Seq::new(Combinations::new(self.producer, r))
    }

    /// All length-`r` combinations with replacement.
    pub fn combinations_with_replacement(self, r: usize) -> Seq<CombinationsWithReplacement<P>>
    where
        P::Item: Clone,
    {
        Seq::new(CombinationsWithReplacement::new(self.producer, r))
    }

    // --- terminals ---

    /// Return and consume the next element.
    ///
    /// ```rust
    /// use lazyseq::from_iter;
    ///
    /// let mut seq = from_iter([1, 2]);
    /// assert_eq!(seq.next().unwrap(), 1);
    /// assert_eq!(seq.next().unwrap(), 2);
    /// assert!(seq.next().is_err());
    /// ```
    pub fn next(&mut self) -> Result<P::Item, Exhausted> {
        self.producer.pull().into_option().ok_or(Exhausted)
    }

    /// Consume and discard `n` elements. Errors if fewer remain.
    ///
    /// Returns `&mut self` so skipping chains with further consumption:
    ///
    /// ```rust
    /// use lazyseq::from_iter;
    ///
    /// let third = from_iter([1, 2, 3]).skip(2).and_then(|s| s.next());
    /// assert_eq!(third.unwrap(), 3);
    /// ```
    pub fn skip(&mut self, n: usize) -> Result<&mut Self, Exhausted> {
        for _ in 0..n {
            self.next()?;
        }
        Ok(self)
    }

    /// Skip `n` elements, then return the next one.
    pub fn nth(&mut self, n: usize) -> Result<P::Item, Exhausted> {
        self.skip(n)?.next()
    }

    /// Return the next `n` elements. All-or-nothing: errors without yielding
    /// a partial group if fewer than `n` remain.
    pub fn take(&mut self, n: usize) -> Result<Vec<P::Item>, Exhausted> {
        // cap the reservation: an oversized n must surface as Exhausted, not
        // as an allocation failure
        let mut out = Vec::with_capacity(n.min(1024));
        for _ in 0..n {
            out.push(self.next()?);
        }
        Ok(out)
    }

    /// Drain everything remaining into a collection.
    ///
    /// ```rust
    /// use lazyseq::from_iter;
    ///
    /// let all: Vec<_> = from_iter(1..=3).collect();
    /// assert_eq!(all, vec![1, 2, 3]);
    /// ```
    pub fn collect<C>(self) -> C
    where
        C: FromIterator<P::Item>,
    {
        self.into_iter().collect()
    }

    /// Left fold seeded by the first element. Errors on an empty sequence.
    ///
    /// ```rust
    /// use lazyseq::from_iter;
    ///
    /// assert_eq!(from_iter([1, 2, 3, 4]).reduce(|a, b| a + b).unwrap(), 10);
    /// assert!(lazyseq::empty::<i32>().reduce(|a, b| a + b).is_err());
    /// ```
    pub fn reduce<F>(mut self, mut f: F) -> Result<P::Item, Exhausted>
    where
        F: FnMut(P::Item, P::Item) -> P::Item,
    {
        let mut acc = self.next()?;
        while let Pull::Item(item) = self.producer.pull() {
            acc = f(acc, item);
        }
        Ok(acc)
    }

    /// Left fold with an explicit initial value. Returns `initial` unchanged
    /// on an empty sequence.
    pub fn fold<U, F>(mut self, initial: U, mut f: F) -> U
    where
        F: FnMut(U, P::Item) -> U,
    {
        let mut acc = initial;
        while let Pull::Item(item) = self.producer.pull() {
            acc = f(acc, item);
        }
        acc
    }

    /// Sum the remaining elements.
    ///
    /// ```rust
    /// use lazyseq::from_iter;
    ///
    /// let total: i32 = from_iter(1..=4).sum();
    /// assert_eq!(total, 10);
    /// ```
    pub fn sum<S>(self) -> S
    where
        S: Sum<P::Item>,
    {
        self.into_iter().sum()
    }

    /// Sum the remaining elements onto an explicit initial value.
    pub fn sum_from(self, initial: P::Item) -> P::Item
    where
        P::Item: Add<Output = P::Item>,
    {
        self.fold(initial, |acc, item| acc + item)
    }

    /// The smallest remaining element; the first one wins ties. Errors on an
    /// empty sequence.
    pub fn min(mut self) -> Result<P::Item, Exhausted>
    where
        P::Item: Ord,
    {
        let mut best = self.next()?;
        while let Pull::Item(item) = self.producer.pull() {
            if item < best {
                best = item;
            }
        }
        Ok(best)
    }

    /// The largest remaining element; the first one wins ties. Errors on an
    /// empty sequence.
    pub fn max(mut self) -> Result<P::Item, Exhausted>
    where
        P::Item: Ord,
    {
        let mut best = self.next()?;
        while let Pull::Item(item) = self.producer.pull() {
            if item > best {
                best = item;
            }
        }
        Ok(best)
    }

    /// The element with the smallest key; the first one wins ties.
    pub fn min_by_key<K, F>(mut self, mut key: F) -> Result<P::Item, Exhausted>
    where
        K: Ord,
        F: FnMut(&P::Item) -> K,
    {
        let mut best = self.next()?;
        let mut best_key = key(&best);
        while let Pull::Item(item) = self.producer.pull() {
            let item_key = key(&item);
            if item_key < best_key {
                best = item;
                best_key = item_key;
            }
        }
        Ok(best)
    }

    /// The element with the largest key; the first one wins ties.
    pub fn max_by_key<K, F>(mut self, mut key: F) -> Result<P::Item, Exhausted>
    where
        K: Ord,
        F: FnMut(&P::Item) -> K,
    {
        let mut best = self.next()?;
        let mut best_key = key(&best);
        while let Pull::Item(item) = self.producer.pull() {
            let item_key = key(&item);
            if item_key > best_key {
                best = item;
                best_key = item_key;
            }
        }
        Ok(best)
    }

    /// Drain the sequence and count its elements.
    pub fn count(mut self) -> usize {
        let mut n = 0;
        while self.producer.pull().is_item() {
            n += 1;
        }
        n
    }

    /// Apply `f` to every remaining element, immediately, for its side
    /// effects.
    pub fn for_each<F>(mut self, mut f: F)
    where
        F: FnMut(P::Item),
    {
        while let Pull::Item(item) = self.producer.pull() {
            f(item);
        }
    }
}

impl<P, T> Seq<P>
where
    P: Producer<Item = Option<T>>,
{
    /// Unwrap `Some` elements and drop `None`s.
    ///
    /// ```rust
    /// use lazyseq::from_iter;
    ///
    /// let present: Vec<_> = from_iter([Some(1), None, Some(2)]).compact().collect();
    /// assert_eq!(present, vec![1, 2]);
    /// ```
    pub fn compact(self) -> Seq<Compact<P>> {
        Seq::new(Compact::new(self.producer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_iter, source};

    #[test]
    fn test_next_and_exhaustion() {
        let mut seq = from_iter([1]);
        assert_eq!(seq.next(), Ok(1));
        assert_eq!(seq.next(), Err(Exhausted));
        assert_eq!(seq.next(), Err(Exhausted));
    }

    #[test]
    fn test_pull_is_the_primitive() {
        let mut seq = from_iter([7]);
        assert_eq!(seq.pull(), Pull::Item(7));
        assert_eq!(seq.pull(), Pull::Done);
        assert_eq!(seq.pull(), Pull::Done);
    }

    #[test]
    fn test_skip_and_nth() {
        let mut seq = from_iter(0..10);
        assert_eq!(seq.skip(3).unwrap().next().unwrap(), 3);
        assert_eq!(seq.nth(2).unwrap(), 6);

        let mut short = from_iter([1, 2]);
        assert!(short.skip(5).is_err());
    }

    #[test]
    fn test_take_is_all_or_nothing() {
        let mut seq = from_iter([1, 2, 3]);
        assert_eq!(seq.take(2).unwrap(), vec![1, 2]);
        // only one element remains; no partial group comes back
        assert_eq!(seq.take(2), Err(Exhausted));
    }

    #[test]
    fn test_take_huge_count_errors_without_allocating() {
        let mut seq = from_iter([1, 2, 3]);
        assert_eq!(seq.take(usize::MAX), Err(Exhausted));
    }

    #[test]
    fn test_reduce_and_fold() {
        assert_eq!(from_iter([1, 2, 3, 4]).reduce(|a, b| a + b), Ok(10));
        assert_eq!(crate::empty::<i32>().reduce(|a, b| a + b), Err(Exhausted));
        assert_eq!(crate::empty::<i32>().fold(0, |a, b| a + b), 0);
        assert_eq!(from_iter([1, 2]).fold(10, |a, b| a + b), 13);
    }

    #[test]
    fn test_sum_variants() {
        let total: i32 = from_iter([1, 2, 3]).sum();
        assert_eq!(total, 6);
        assert_eq!(from_iter([1, 2, 3]).sum_from(100), 106);
        assert_eq!(crate::empty::<i32>().sum_from(4), 4);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(from_iter([3, 1, 2]).min(), Ok(1));
        assert_eq!(from_iter([3, 1, 2]).max(), Ok(3));
        assert_eq!(crate::empty::<i32>().min(), Err(Exhausted));
        assert_eq!(crate::empty::<i32>().max(), Err(Exhausted));
    }

    #[test]
    fn test_min_max_by_key_first_wins_ties() {
        let words = ["bb", "a", "cc", "d"];
        assert_eq!(from_iter(words).max_by_key(|w| w.len()), Ok("bb"));
        assert_eq!(from_iter(words).min_by_key(|w| w.len()), Ok("a"));
    }

    #[test]
    fn test_count_and_for_each() {
        assert_eq!(from_iter(0..5).count(), 5);

        let mut seen = Vec::new();
        from_iter([1, 2, 3]).for_each(|x| seen.push(x));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_transformations_pull_nothing_until_driven() {
        use std::{cell::Cell, rc::Rc};

        let pulls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&pulls);
        let seq = from_iter(0..100)
            .map(move |x| {
                counter.set(counter.get() + 1);
                x
            })
            .filter(|x| x % 2 == 0)
            .chunk(3)
            .window(2);

        assert_eq!(pulls.get(), 0);
        drop(seq);
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn test_long_chain_end_to_end() -> anyhow::Result<()> {
        let mut seq = from_iter(1..=12)
            .map(|x| x * 2)
            .filter(|x| x % 3 != 0)
            .chunk(2)
            .map(|pair| pair.into_iter().sum::<i32>());

        let first = seq.next()?;
        if first != 6 {
            anyhow::bail!("wrong first chunk sum: {first}");
        }
        assert_eq!(seq.collect::<Vec<_>>(), vec![18, 30, 38]);
        Ok(())
    }

    #[test]
    fn test_boxed_unifies_branch_types() {
        let seq = if true {
            from_iter(0..3).map(|x| x + 1).boxed()
        } else {
            from_iter(vec![9]).boxed()
        };
        assert_eq!(seq.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_collect_into_other_containers() {
        let set: std::collections::BTreeSet<i32> = from_iter([3, 1, 3, 2]).collect();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);

        let s: String = source::from_iter(["ab", "cd"]).map(str::to_string).collect();
        assert_eq!(s, "abcd");
    }
}
