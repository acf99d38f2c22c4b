use crate::{pull::Pull, producer::Producer};

/// Applies a function to each upstream element.
///
/// Created by [`Seq::map`](crate::Seq::map).
pub struct Map<P, F> {
    upstream: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub(crate) fn new(upstream: P, f: F) -> Self {
        Map { upstream, f }
    }
}

impl<P, U, F> Producer for Map<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> U,
{
    type Item = U;

    fn pull(&mut self) -> Pull<U> {
        self.upstream.pull().map(&mut self.f)
    }
}
