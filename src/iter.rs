//! Bridge between [`Seq`] and the standard iterator ecosystem.
//!
//! [`Seq`] implements [`IntoIterator`], so sequences work with `for` loops
//! and everything else that consumes iterators. The other direction is
//! [`from_iter`](crate::from_iter).
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::from_iter;
//!
//! let mut total = 0;
//! for x in from_iter([1, 2, 3]).map(|x| x * 2) {
//!     total += x;
//! }
//! assert_eq!(total, 12);
//! ```

use crate::{producer::Producer, seq::Seq};

/// Iterator over a sequence's remaining elements.
///
/// Created by [`Seq::into_iter`]. Translates [`Pull`](crate::Pull) to
/// `Option` one pull at a time.
pub struct SeqIter<P> {
    producer: P,
}

impl<P: Producer> Iterator for SeqIter<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        self.producer.pull().into_option()
    }
}

impl<P: Producer> IntoIterator for Seq<P> {
    type Item = P::Item;
    type IntoIter = SeqIter<P>;

    fn into_iter(self) -> SeqIter<P> {
        SeqIter {
            producer: self.into_inner(),
        }
    }
}
