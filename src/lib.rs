//! # `atomic-flag` - Lock-Free Boolean Flag
//!
//! A boolean that many threads can read and write without a lock, and that
//! encodes to and from text exactly like a plain `bool`.
//!
//! ## Guarantees
//!
//! ### Concurrency
//! - **Lock-free**: every operation is one hardware atomic on a native
//!   `AtomicBool`. Nothing blocks, so nothing needs cancelling or a timeout.
//! - **Sequential consistency**: all loads, stores and read-modify-writes use
//!   `SeqCst`, so every thread observes one total order of operations on a
//!   flag that is consistent with its own program order.
//! - **Single winner**: `compare_and_swap` is one indivisible compare-exchange.
//!   If many threads race `compare_and_swap(false, true)`, exactly one wins.
//!
//! ### Encoding
//! - **Text**: `marshal_text` yields exactly `true` or `false`, and
//!   `unmarshal_text` accepts what `bool::from_str` accepts.
//! - **All or nothing**: a failed decode never touches the stored value.
//! - **Serde**: the flag serializes as a `bool`, so it can replace a `bool`
//!   field in any derived record.
//!
//! ## Non-goals
//!
//! This is not a synchronization library. There is no wait/notify, no
//! condition variable, and no multi-word state.
//!
//! ## Example
//!
//! ```rust
//! use atomic_flag::AtomicFlag;
//! use std::thread;
//!
//! let started = AtomicFlag::new(false);
//!
//! let winners = thread::scope(|s| {
//!     let handles: Vec<_> = (0..4)
//!         .map(|_| s.spawn(|| started.compare_and_swap(false, true)))
//!         .collect();
//!     handles
//!         .into_iter()
//!         .map(|h| h.join().unwrap())
//!         .filter(|won| *won)
//!         .count()
//! });
//!
//! assert_eq!(winners, 1);
//! assert_eq!(started.marshal_text(), b"true");
//! ```
//!
//! ## Features
//!
//! - `tracing`: emits `TRACE` events (target `atomic_flag`) when a
//!   compare-exchange wins or a value is decoded.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod flag;
mod serde_impl;
mod sync;
pub mod text;

pub use flag::AtomicFlag;
pub use text::ParseFlagError;

// Compile-time assertions for memory layout
#[cfg(not(all(test, loom)))]
const _: () = {
    use core::mem;

    // `AtomicFlag` is `repr(transparent)` over `AtomicBool`, which has the
    // same in-memory representation as `bool`.
    assert!(mem::size_of::<AtomicFlag>() == mem::size_of::<bool>());
    assert!(mem::align_of::<AtomicFlag>() == mem::align_of::<bool>());
};
