//! Flag patterns with scoped threads (no locks).
//!
//! Key idea:
//! - `compare_and_swap(false, true)` lets exactly one thread run a one-time task.
//! - A plain `store`/`get` pair signals readiness between threads.
//! - The flag serializes like a `bool`, so it can be read back from config text.

use atomic_flag::AtomicFlag;
use std::thread;

fn main() {
    // Phase 1: one-time initialization. Only the winner of the CAS proceeds.
    let initialized = AtomicFlag::default();
    thread::scope(|s| {
        for i in 0..5 {
            let initialized = &initialized;
            s.spawn(move || {
                if initialized.compare_and_swap(false, true) {
                    println!("thread {i} performed initialization");
                } else {
                    println!("thread {i} skipped (already initialized)");
                }
            });
        }
    });
    assert!(initialized.get());

    // Phase 2: producer/consumer signaling.
    let ready = AtomicFlag::new(false);
    thread::scope(|s| {
        let ready = &ready;
        s.spawn(move || {
            while ready.get_negated() {
                thread::yield_now();
            }
            println!("consumer saw ready = {ready}");
        });
        s.spawn(move || ready.set_true());
    });

    // Phase 3: text round trip.
    let restored: AtomicFlag = match std::str::from_utf8(ready.marshal_text()) {
        Ok(text) => text.parse().unwrap_or_default(),
        Err(_) => AtomicFlag::default(),
    };
    println!("restored flag from text: {restored:?}");

    if let Err(err) = restored.unmarshal_text(b"yes") {
        println!("rejected: {err} (value still {restored})");
    }
}
