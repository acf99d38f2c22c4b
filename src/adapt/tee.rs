use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use crate::{pull::Pull, producer::Producer};

/// One branch of a split sequence.
///
/// Created by [`Seq::tee`](crate::Seq::tee) / [`Seq::tee_n`](crate::Seq::tee_n).
/// Every branch replays the full remaining upstream independently, in any
/// interleaving, without requiring the upstream to be restartable: elements
/// some branch has not consumed yet are buffered, and the buffer is trimmed
/// to the slowest branch's cursor after every pull.
pub struct Tee<P: Producer> {
    shared: Rc<RefCell<Shared<P>>>,
    id: usize,
}

struct Shared<P: Producer> {
    source: P,
    buffer: VecDeque<P::Item>,
    /// Absolute index of `buffer[0]` within the original element stream.
    head: usize,
    /// Absolute index of the next element each branch wants.
    cursors: Vec<usize>,
    exhausted: bool,
}

impl<P: Producer> Tee<P> {
    pub(crate) fn split(source: P, n: usize) -> Vec<Tee<P>> {
        let shared = Rc::new(RefCell::new(Shared {
            source,
            buffer: VecDeque::new(),
            head: 0,
            cursors: vec![0; n],
            exhausted: false,
        }));
        (0..n)
            .map(|id| Tee {
                shared: Rc::clone(&shared),
                id,
            })
            .collect()
    }
}

impl<P> Producer for Tee<P>
where
    P: Producer,
    P::Item: Clone,
{
    type Item = P::Item;

    fn pull(&mut self) -> Pull<P::Item> {
        let mut shared = self.shared.borrow_mut();
        let shared = &mut *shared;

        let pos = shared.cursors[self.id];
        let offset = pos - shared.head;
        let item = if let Some(buffered) = shared.buffer.get(offset) {
            buffered.clone()
        } else {
            // this branch is the furthest ahead; pull a fresh element and
            // buffer it for the others
            if shared.exhausted {
                return Pull::Done;
            }
            match shared.source.pull() {
                Pull::Item(item) => {
                    shared.buffer.push_back(item.clone());
                    item
                }
                Pull::Done => {
                    shared.exhausted = true;
                    return Pull::Done;
                }
            }
        };

        shared.cursors[self.id] = pos + 1;
        if let Some(&slowest) = shared.cursors.iter().min() {
            while shared.head < slowest {
                shared.buffer.pop_front();
                shared.head += 1;
            }
        }
        Pull::Item(item)
    }
}
