//! `AtomicFlag`: a lock-free boolean with sequentially consistent access.

use core::fmt;

use crate::sync::{AtomicBool, ORDER};
use crate::trace::trace_event;

/// A boolean that can be read and written from many threads without a lock.
///
/// Every operation is a single hardware atomic using `SeqCst`, so all threads
/// agree on one total order of operations on a given flag. The flag is shared
/// by reference (`&AtomicFlag`, `Arc<AtomicFlag>`); all mutating methods take
/// `&self`.
///
/// The flag also reads and writes the textual booleans `true` and `false`
/// (see [`marshal_text`](Self::marshal_text) and
/// [`unmarshal_text`](Self::unmarshal_text)) and implements serde's traits as
/// a plain `bool`, so it can replace a `bool` field in a serialized record.
///
/// # Example
///
/// ```rust
/// use atomic_flag::AtomicFlag;
///
/// let ready = AtomicFlag::default();
/// assert!(ready.get_negated());
///
/// // Only the first caller flips the flag.
/// assert!(ready.compare_and_swap(false, true));
/// assert!(!ready.compare_and_swap(false, true));
/// assert_eq!(ready.marshal_text(), b"true");
/// ```
#[repr(transparent)]
pub struct AtomicFlag {
    inner: AtomicBool,
}

impl AtomicFlag {
    /// Creates a new flag holding `value`.
    #[cfg(not(all(test, loom)))]
    #[inline(always)]
    pub const fn new(value: bool) -> Self {
        Self {
            inner: AtomicBool::new(value),
        }
    }

    /// Creates a new flag holding `value`.
    #[cfg(all(test, loom))]
    pub fn new(value: bool) -> Self {
        Self {
            inner: AtomicBool::new(value),
        }
    }

    /// Loads the current value.
    #[inline(always)]
    pub fn get(&self) -> bool {
        self.inner.load(ORDER)
    }

    /// Returns the negation of [`get`](Self::get).
    ///
    /// This is one atomic read followed by a negation. Two calls to `get` and
    /// `get_negated` are independent reads and may disagree under concurrent
    /// writes.
    #[inline(always)]
    pub fn get_negated(&self) -> bool {
        !self.get()
    }

    /// Stores a new value.
    #[inline(always)]
    pub fn store(&self, value: bool) {
        self.inner.store(value, ORDER);
    }

    /// Sets the flag to `true`.
    #[inline(always)]
    pub fn set_true(&self) {
        self.store(true);
    }

    /// Sets the flag to `false`.
    #[inline(always)]
    pub fn set_false(&self) {
        self.store(false);
    }

    /// Swaps the current value, returning the previous value.
    #[inline(always)]
    pub fn swap(&self, value: bool) -> bool {
        self.inner.swap(value, ORDER)
    }

    /// Atomically negates the value, returning the previous value.
    #[inline(always)]
    pub fn toggle(&self) -> bool {
        self.inner.fetch_xor(true, ORDER)
    }

    /// Stores `new` if the current value equals `current`.
    ///
    /// Returns `Ok(previous)` when the value was replaced and `Err(actual)`
    /// when it was not. The comparison and the store are one hardware
    /// compare-exchange.
    #[inline]
    pub fn compare_exchange(&self, current: bool, new: bool) -> Result<bool, bool> {
        let result = self.inner.compare_exchange(current, new, ORDER, ORDER);
        if result.is_ok() {
            trace_event!(from = current, to = new, "flag compare-exchange won");
        }
        result
    }

    /// Stores `desired` if the current value equals `expected`.
    ///
    /// Returns `true` if the value was replaced. When many threads race
    /// `compare_and_swap(false, true)` on a `false` flag, exactly one of them
    /// sees `true`.
    #[inline]
    pub fn compare_and_swap(&self, expected: bool, desired: bool) -> bool {
        self.compare_exchange(expected, desired).is_ok()
    }

    /// Consumes the flag, returning its value.
    #[inline]
    pub fn into_inner(self) -> bool {
        self.get()
    }
}

impl Default for AtomicFlag {
    /// Creates a `false` flag.
    #[inline]
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<bool> for AtomicFlag {
    #[inline]
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl From<AtomicFlag> for bool {
    #[inline]
    fn from(flag: AtomicFlag) -> Self {
        flag.into_inner()
    }
}

impl fmt::Debug for AtomicFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicFlag").field(&self.get()).finish()
    }
}
