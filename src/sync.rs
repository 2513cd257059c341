//! Atomic shim with optional loom support.
//!
//! Production builds use `core` atomics. Unit tests built with
//! `RUSTFLAGS="--cfg loom"` swap in loom's model-checked atomics so the flag's
//! operations can be explored under every legal interleaving.

#[cfg(not(all(test, loom)))]
pub(crate) use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(all(test, loom))]
pub(crate) use loom::sync::atomic::{AtomicBool, Ordering};

/// The single ordering every flag operation uses.
pub(crate) const ORDER: Ordering = Ordering::SeqCst;
