/// Result of pulling one element from a producer: either an element or the
/// end-of-sequence marker.
///
/// `Pull` is the return type of [`Producer::pull`](crate::Producer::pull),
/// similar to how `Option` represents optional values. `Done` carries no
/// payload, so an exhausted producer can never be confused with one that
/// yielded a valid element.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Pull;
///
/// let item: Pull<i32> = Pull::Item(42);
/// let done: Pull<i32> = Pull::Done;
///
/// assert_eq!(item.map(|x| x * 2), Pull::Item(84));
/// assert_eq!(done.map(|x| x * 2), Pull::Done);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pull<T> {
    /// The producer yielded an element.
    Item(T),
    /// The producer is exhausted.
    Done,
}

impl<T> Pull<T> {
    /// Returns `true` if the pull yielded an element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// let x: Pull<i32> = Pull::Item(42);
    /// assert!(x.is_item());
    ///
    /// let y: Pull<i32> = Pull::Done;
    /// assert!(!y.is_item());
    /// ```
    #[inline]
    pub const fn is_item(&self) -> bool {
        matches!(self, Pull::Item(_))
    }

    /// Returns `true` if the pull hit the end of the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// let x: Pull<i32> = Pull::Done;
    /// assert!(x.is_done());
    /// ```
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Pull::Done)
    }

    /// Converts from `Pull<T>` to `Option<T>`, consuming `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert_eq!(Pull::Item(42).into_option(), Some(42));
    /// assert_eq!(Pull::<i32>::Done.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Pull::Item(item) => Some(item),
            Pull::Done => None,
        }
    }

    /// Converts from `&Pull<T>` to `Pull<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// let x: Pull<String> = Pull::Item("hi".to_string());
    /// assert_eq!(x.as_ref(), Pull::Item(&"hi".to_string()));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Pull<&T> {
        match self {
            Pull::Item(item) => Pull::Item(item),
            Pull::Done => Pull::Done,
        }
    }

    /// Maps a `Pull<T>` to `Pull<U>` by applying a function to a yielded
    /// element, leaving `Done` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert_eq!(Pull::Item(21).map(|x| x * 2), Pull::Item(42));
    /// assert_eq!(Pull::<i32>::Done.map(|x| x * 2), Pull::Done);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Pull<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Pull::Item(item) => Pull::Item(f(item)),
            Pull::Done => Pull::Done,
        }
    }

    /// Returns the yielded element or a default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert_eq!(Pull::Item(42).item_or(0), 42);
    /// assert_eq!(Pull::Done.item_or(0), 0);
    /// ```
    #[inline]
    pub fn item_or(self, default: T) -> T {
        match self {
            Pull::Item(item) => item,
            Pull::Done => default,
        }
    }

    /// Returns the yielded element or computes one from a closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert_eq!(Pull::Item(42).item_or_else(|| 0), 42);
    /// assert_eq!(Pull::Done.item_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn item_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Pull::Item(item) => item,
            Pull::Done => f(),
        }
    }

    /// Returns the contained element, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the pull is `Done`, with a custom message provided by `msg`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert_eq!(Pull::Item(42).expect_item("was done"), 42);
    /// ```
    ///
    /// ```should_panic
    /// use lazyseq::Pull;
    ///
    /// Pull::<i32>::Done.expect_item("was done"); // panics with "was done"
    /// ```
    #[inline]
    pub fn expect_item(self, msg: &str) -> T {
        match self {
            Pull::Item(item) => item,
            Pull::Done => panic!("{}", msg),
        }
    }

    /// Returns the contained element, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the pull is `Done`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert_eq!(Pull::Item(42).unwrap_item(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use lazyseq::Pull;
    ///
    /// Pull::<i32>::Done.unwrap_item(); // panics
    /// ```
    #[inline]
    pub fn unwrap_item(self) -> T {
        match self {
            Pull::Item(item) => item,
            Pull::Done => panic!("called `Pull::unwrap_item()` on a `Done` value"),
        }
    }
}

impl<T> From<Option<T>> for Pull<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(item) => Pull::Item(item),
            None => Pull::Done,
        }
    }
}

impl<T> From<Pull<T>> for Option<T> {
    fn from(pull: Pull<T>) -> Self {
        pull.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_item_and_is_done() {
        let item: Pull<i32> = Pull::Item(42);
        let done: Pull<i32> = Pull::Done;

        assert!(item.is_item());
        assert!(!item.is_done());
        assert!(done.is_done());
        assert!(!done.is_item());
    }

    #[test]
    fn test_into_option() {
        assert_eq!(Pull::Item(42).into_option(), Some(42));
        assert_eq!(Pull::<i32>::Done.into_option(), None);
    }

    #[test]
    fn test_map() {
        assert_eq!(Pull::Item(21).map(|x| x * 2), Pull::Item(42));
        assert_eq!(Pull::<i32>::Done.map(|x| x * 2), Pull::Done);
    }

    #[test]
    fn test_item_or_and_item_or_else() {
        assert_eq!(Pull::Item(42).item_or(0), 42);
        assert_eq!(Pull::Done.item_or(0), 0);
        assert_eq!(Pull::Item(42).item_or_else(|| 0), 42);
        assert_eq!(Pull::Done.item_or_else(|| 0), 0);
    }

    #[test]
    fn test_as_ref() {
        let x: Pull<String> = Pull::Item("hi".to_string());
        assert_eq!(x.as_ref(), Pull::Item(&"hi".to_string()));
        assert_eq!(Pull::<String>::Done.as_ref(), Pull::Done);
    }

    #[test]
    fn test_from_option_round_trip() {
        assert_eq!(Pull::from(Some(1)), Pull::Item(1));
        assert_eq!(Pull::<i32>::from(None), Pull::Done);
        assert_eq!(Option::from(Pull::Item(1)), Some(1));
    }

    #[test]
    #[should_panic(expected = "called `Pull::unwrap_item()` on a `Done` value")]
    fn test_unwrap_item_panics_on_done() {
        Pull::<i32>::Done.unwrap_item();
    }
}
