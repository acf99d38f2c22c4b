//! Combinatorial expansion over a materialized pool.
//!
//! All three producers drain the upstream into a pool on first pull, then
//! generate index tuples in the standard lexicographic-by-position order,
//! cloning pool elements into each emitted group. A requested length larger
//! than the pool is a degenerate empty sequence, never an error.

use crate::{pull::Pull, producer::Producer};

fn drain<P: Producer>(upstream: &mut P) -> Vec<P::Item> {
    let mut pool = Vec::new();
    while let Pull::Item(item) = upstream.pull() {
        pool.push(item);
    }
    pool
}

fn emit<T: Clone>(pool: &[T], indices: &[usize]) -> Pull<Vec<T>> {
    Pull::Item(indices.iter().map(|&i| pool[i].clone()).collect())
}

/// Yields all length-`r` permutations of the materialized pool.
///
/// With no explicit `r`, permutes the whole pool. Created by
/// [`Seq::permutations`](crate::Seq::permutations) and
/// [`Seq::permutations_len`](crate::Seq::permutations_len).
pub struct Permutations<P: Producer> {
    state: PermState<P>,
}

enum PermState<P: Producer> {
    Pending { upstream: P, r: Option<usize> },
    Active {
        pool: Vec<P::Item>,
        indices: Vec<usize>,
        cycles: Vec<usize>,
        started: bool,
    },
    Done,
}

impl<P: Producer> Permutations<P> {
    pub(crate) fn new(upstream: P, r: Option<usize>) -> Self {
        Permutations {
            state: PermState::Pending { upstream, r },
        }
    }
}

impl<P> Producer for Permutations<P>
where
    P: Producer,
    P::Item: Clone,
{
    type Item = Vec<P::Item>;

    fn pull(&mut self) -> Pull<Vec<P::Item>> {
        if let PermState::Pending { upstream, r } = &mut self.state {
            let pool = drain(upstream);
            let n = pool.len();
            let r = r.unwrap_or(n);
            if r > n {
                self.state = PermState::Done;
                return Pull::Done;
            }
            self.state = PermState::Active {
                pool,
                indices: (0..n).collect(),
                cycles: (0..r).map(|i| n - i).collect(),
                started: false,
            };
        }

        let PermState::Active {
            pool,
            indices,
            cycles,
            started,
        } = &mut self.state
        else {
            return Pull::Done;
        };

        let n = pool.len();
        let r = cycles.len();
        if !*started {
            *started = true;
            return emit(pool, &indices[..r]);
        }

        // itertools permutation step: decrement cycles right to left, rotating
        // a position's tail when its cycle runs out
        let mut i = r;
        while i > 0 {
            i -= 1;
            cycles[i] -= 1;
            if cycles[i] == 0 {
                indices[i..].rotate_left(1);
                cycles[i] = n - i;
            } else {
                indices.swap(i, n - cycles[i]);
                return emit(pool, &indices[..r]);
            }
        }
        self.state = PermState::Done;
        Pull::Done
    }
}

/// Yields all length-`r` combinations (no replacement) of the materialized
/// pool, preserving the pool's relative order within each group.
///
/// Created by [`Seq::combinations`](crate::Seq::combinations).
pub struct Combinations<P: Producer> {
    state: ComboState<P>,
}

enum ComboState<P: Producer> {
    Pending { upstream: P, r: usize },
    Active {
        pool: Vec<P::Item>,
        indices: Vec<usize>,
        started: bool,
    },
    Done,
}

impl<P: Producer> Combinations<P> {
    pub(crate) fn new(upstream: P, r: usize) -> Self {
        Combinations {
            state: ComboState::Pending { upstream, r },
        }
    }
}

impl<P> Producer for Combinations<P>
where
    P: Producer,
    P::Item: Clone,
{
    type Item = Vec<P::Item>;

    fn pull(&mut self) -> Pull<Vec<P::Item>> {
        if let ComboState::Pending { upstream, r } = &mut self.state {
            let pool = drain(upstream);
            let r = *r;
            if r > pool.len() {
                self.state = ComboState::Done;
                return Pull::Done;
            }
            self.state = ComboState::Active {
                pool,
                indices: (0..r).collect(),
                started: false,
            };
        }

        let ComboState::Active {
            pool,
            indices,
            started,
        } = &mut self.state
        else {
            return Pull::Done;
        };

        if !*started {
            *started = true;
            return emit(pool, indices);
        }

        let n = pool.len();
        let r = indices.len();
        // rightmost index that can still move up
        let mut i = r;
        loop {
            if i == 0 {
                self.state = ComboState::Done;
                return Pull::Done;
            }
            i -= 1;
            if indices[i] != i + n - r {
                break;
            }
        }
        indices[i] += 1;
        for j in i + 1..r {
            indices[j] = indices[j - 1] + 1;
        }
        emit(pool, indices)
    }
}

/// Yields all length-`r` combinations with replacement of the materialized
/// pool.
///
/// Created by
/// [`Seq::combinations_with_replacement`](crate::Seq::combinations_with_replacement).
pub struct CombinationsWithReplacement<P: Producer> {
    state: ComboState<P>,
}

impl<P: Producer> CombinationsWithReplacement<P> {
    pub(crate) fn new(upstream: P, r: usize) -> Self {
        CombinationsWithReplacement {
            state: ComboState::Pending { upstream, r },
        }
    }
}

impl<P> Producer for CombinationsWithReplacement<P>
where
    P: Producer,
    P::Item: Clone,
{
    type Item = Vec<P::Item>;

    fn pull(&mut self) -> Pull<Vec<P::Item>> {
        if let ComboState::Pending { upstream, r } = &mut self.state {
            let pool = drain(upstream);
            let r = *r;
            if r > 0 && pool.is_empty() {
                self.state = ComboState::Done;
                return Pull::Done;
            }
            self.state = ComboState::Active {
                pool,
                indices: vec![0; r],
                started: false,
            };
        }

        let ComboState::Active {
            pool,
            indices,
            started,
        } = &mut self.state
        else {
            return Pull::Done;
        };

        if !*started {
            *started = true;
            return emit(pool, indices);
        }

        let n = pool.len();
        let r = indices.len();
        // rightmost index not yet at the last pool position
        let mut i = r;
        loop {
            if i == 0 {
                self.state = ComboState::Done;
                return Pull::Done;
            }
            i -= 1;
            if indices[i] != n - 1 {
                break;
            }
        }
        let bumped = indices[i] + 1;
        for slot in &mut indices[i..] {
            *slot = bumped;
        }
        emit(pool, indices)
    }
}
