use crate::{pull::Pull, producer::Producer};

/// Yields everything remaining in the first producer, then everything in the
/// second.
///
/// Created by [`Seq::chain`](crate::Seq::chain). The first producer is
/// dropped as soon as it is exhausted.
pub struct Chain<P, Q> {
    first: Option<P>,
    second: Q,
}

impl<P, Q> Chain<P, Q> {
    pub(crate) fn new(first: P, second: Q) -> Self {
        Chain {
            first: Some(first),
            second,
        }
    }
}

impl<P, Q> Producer for Chain<P, Q>
where
    P: Producer,
    Q: Producer<Item = P::Item>,
{
    type Item = P::Item;

    fn pull(&mut self) -> Pull<P::Item> {
        if let Some(first) = &mut self.first {
            match first.pull() {
                Pull::Item(item) => return Pull::Item(item),
                Pull::Done => {
                    // free the exhausted producer, fall through to the second
                    self.first = None;
                }
            }
        }
        self.second.pull()
    }
}
