//! Core trait for single-pass element sources.
//!
//! A [`Producer`] is anything that can yield a next element or signal
//! exhaustion. It is the only capability [`Seq`](crate::Seq) requires of its
//! source. Producers are single-pass: an element pulled out is gone, and
//! there is no way to ask "are you exhausted?" other than pulling.
//!
//! # Examples
//!
//! Hand-written producers are ordinary structs:
//!
//! ```rust
//! use lazyseq::{Producer, Pull, Seq};
//!
//! struct Countdown(u32);
//!
//! impl Producer for Countdown {
//!     type Item = u32;
//!
//!     fn pull(&mut self) -> Pull<u32> {
//!         if self.0 == 0 {
//!             Pull::Done
//!         } else {
//!             self.0 -= 1;
//!             Pull::Item(self.0 + 1)
//!         }
//!     }
//! }
//!
//! let values: Vec<_> = Seq::new(Countdown(3)).collect();
//! assert_eq!(values, vec![3, 2, 1]);
//! ```

use crate::pull::Pull;

/// A single-pass source of elements.
///
/// Each call to `pull()` either yields the next element or signals that the
/// source is exhausted. Implementations in this crate are fused: once `pull`
/// returns [`Pull::Done`], every subsequent call returns `Done` as well.
/// Hand-written producers should uphold the same contract.
pub trait Producer {
    /// The element type this producer yields.
    type Item;

    /// Yield the next element, or `Done` if the source is exhausted.
    fn pull(&mut self) -> Pull<Self::Item>;
}

impl<P> Producer for &mut P
where
    P: Producer + ?Sized,
{
    type Item = P::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        (**self).pull()
    }
}

impl<P> Producer for Box<P>
where
    P: Producer + ?Sized,
{
    type Item = P::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        (**self).pull()
    }
}
