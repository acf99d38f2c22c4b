use std::collections::VecDeque;

use crate::{pull::Pull, producer::Producer};

/// Slides a fixed-size window over the upstream, advancing one element per
/// yield.
///
/// The first pull seeds the window with `size` upstream elements; every later
/// pull takes one more element and drops the oldest. If the upstream runs out
/// before the first window fills, the sequence is simply empty. Underflow
/// here is not an error, unlike [`Seq::take`](crate::Seq::take).
///
/// Created by [`Seq::window`](crate::Seq::window).
pub struct Window<P: Producer> {
    upstream: P,
    size: usize,
    buf: VecDeque<P::Item>,
    primed: bool,
    done: bool,
}

impl<P: Producer> Window<P> {
    pub(crate) fn new(upstream: P, size: usize) -> Self {
        assert!(size >= 1, "window size must be at least 1");
        Window {
            upstream,
            size,
            buf: VecDeque::with_capacity(size),
            primed: false,
            done: false,
        }
    }
}

impl<P> Producer for Window<P>
where
    P: Producer,
    P::Item: Clone,
{
    type Item = Vec<P::Item>;

    fn pull(&mut self) -> Pull<Vec<P::Item>> {
        if self.done {
            return Pull::Done;
        }

        if !self.primed {
            while self.buf.len() < self.size {
                match self.upstream.pull() {
                    Pull::Item(item) => self.buf.push_back(item),
                    Pull::Done => {
                        self.done = true;
                        return Pull::Done;
                    }
                }
            }
            self.primed = true;
            return Pull::Item(self.buf.iter().cloned().collect());
        }

        match self.upstream.pull() {
            Pull::Item(item) => {
                self.buf.pop_front();
                self.buf.push_back(item);
                Pull::Item(self.buf.iter().cloned().collect())
            }
            Pull::Done => {
                self.done = true;
                Pull::Done
            }
        }
    }
}
