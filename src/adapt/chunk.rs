use crate::{pull::Pull, producer::Producer, seq::Seq, source};

/// Groups upstream elements into non-overlapping runs of a fixed size.
///
/// A trailing run with fewer than `size` elements is dropped. Created by
/// [`Seq::chunk`](crate::Seq::chunk) or the free [`chunk`] function.
pub struct Chunk<P> {
    upstream: P,
    size: usize,
}

impl<P> Chunk<P> {
    pub(crate) fn new(upstream: P, size: usize) -> Self {
        assert!(size >= 1, "chunk size must be at least 1");
        Chunk { upstream, size }
    }
}

impl<P> Producer for Chunk<P>
where
    P: Producer,
{
    type Item = Vec<P::Item>;

    fn pull(&mut self) -> Pull<Vec<P::Item>> {
        let mut group = Vec::with_capacity(self.size);
        while group.len() < self.size {
            match self.upstream.pull() {
                Pull::Item(item) => group.push(item),
                // partial trailing group is dropped
                Pull::Done => return Pull::Done,
            }
        }
        Pull::Item(group)
    }
}

/// Like [`Chunk`], but pads a trailing partial run with a default value.
///
/// Created by [`Seq::chunk_default`](crate::Seq::chunk_default) or the free
/// [`chunk_default`] function.
pub struct ChunkDefault<P: Producer> {
    upstream: P,
    size: usize,
    default: P::Item,
}

impl<P: Producer> ChunkDefault<P> {
    pub(crate) fn new(upstream: P, size: usize, default: P::Item) -> Self {
        assert!(size >= 1, "chunk size must be at least 1");
        ChunkDefault {
            upstream,
            size,
            default,
        }
    }
}

impl<P> Producer for ChunkDefault<P>
where
    P: Producer,
    P::Item: Clone,
{
    type Item = Vec<P::Item>;

    fn pull(&mut self) -> Pull<Vec<P::Item>> {
        let mut group = Vec::with_capacity(self.size);
        while group.len() < self.size {
            match self.upstream.pull() {
                Pull::Item(item) => group.push(item),
                Pull::Done => {
                    if group.is_empty() {
                        return Pull::Done;
                    }
                    group.resize(self.size, self.default.clone());
                    return Pull::Item(group);
                }
            }
        }
        Pull::Item(group)
    }
}

/// Group anything iterable into runs of `size`, dropping a partial trailing
/// run.
///
/// Standalone form of [`Seq::chunk`](crate::Seq::chunk).
///
/// # Panics
///
/// Panics if `size` is zero.
///
/// ```rust
/// use lazyseq::chunk;
///
/// let groups: Vec<_> = chunk([1, 2, 3, 4, 5], 2).collect();
/// assert_eq!(groups, vec![vec![1, 2], vec![3, 4]]);
/// ```
pub fn chunk<I>(iterable: I, size: usize) -> Seq<Chunk<source::FromIter<I::IntoIter>>>
where
    I: IntoIterator,
{
    source::from_iter(iterable).chunk(size)
}

/// Group anything iterable into runs of `size`, padding a partial trailing
/// run with `default`.
///
/// Standalone form of [`Seq::chunk_default`](crate::Seq::chunk_default).
///
/// # Panics
///
/// Panics if `size` is zero.
///
/// ```rust
/// use lazyseq::chunk_default;
///
/// let groups: Vec<_> = chunk_default([1, 2, 3, 4, 5], 2, 0).collect();
/// assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5, 0]]);
/// ```
pub fn chunk_default<I>(
    iterable: I,
    size: usize,
    default: I::Item,
) -> Seq<ChunkDefault<source::FromIter<I::IntoIter>>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    source::from_iter(iterable).chunk_default(size, default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_iter;

    #[test]
    fn test_chunk_drops_partial_tail() {
        let groups: Vec<_> = from_iter([1, 2, 3, 4, 5]).chunk(2).collect();
        assert_eq!(groups, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_chunk_exact_fit() {
        let groups: Vec<_> = from_iter([1, 2, 3, 4]).chunk(2).collect();
        assert_eq!(groups, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_chunk_concatenation_reproduces_prefix() {
        let source: Vec<i32> = (0..10).collect();
        let n = 3;
        let groups: Vec<Vec<i32>> = from_iter(source.clone()).chunk(n).collect();

        assert_eq!(groups.len(), source.len() / n);
        let rejoined: Vec<i32> = groups.into_iter().flatten().collect();
        assert_eq!(rejoined, source[..n * (source.len() / n)]);
    }

    #[test]
    fn test_chunk_default_pads_tail() {
        let groups: Vec<_> = from_iter([1, 2, 3, 4, 5]).chunk_default(2, 0).collect();
        assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5, 0]]);
    }

    #[test]
    fn test_chunk_default_no_padding_needed() {
        let groups: Vec<_> = from_iter([1, 2]).chunk_default(2, 9).collect();
        assert_eq!(groups, vec![vec![1, 2]]);
    }

    #[test]
    fn test_chunk_default_group_count_rounds_up() {
        let groups: Vec<Vec<i32>> = from_iter(0..7).chunk_default(3, -1).collect();
        assert_eq!(groups.len(), 3); // ceil(7 / 3)
        assert_eq!(groups[2], vec![6, -1, -1]);
    }

    #[test]
    fn test_free_functions_match_methods() {
        let via_fn: Vec<_> = chunk(0..5, 2).collect();
        let via_method: Vec<_> = from_iter(0..5).chunk(2).collect();
        assert_eq!(via_fn, via_method);

        let via_fn: Vec<_> = chunk_default(0..5, 2, 0).collect();
        let via_method: Vec<_> = from_iter(0..5).chunk_default(2, 0).collect();
        assert_eq!(via_fn, via_method);
    }

    #[test]
    #[should_panic(expected = "chunk size must be at least 1")]
    fn test_chunk_zero_size_panics_immediately() {
        // signals before any element is pulled, even on an empty source
        let _ = crate::empty::<i32>().chunk(0);
    }

    #[test]
    #[should_panic(expected = "chunk size must be at least 1")]
    fn test_chunk_default_zero_size_panics() {
        let _ = chunk_default(Vec::<i32>::new(), 0, 0);
    }
}
