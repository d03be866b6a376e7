//! Fuzz target: decoding rows as returned by the store.
//!
//! Store responses are untrusted input too; decoding must fail cleanly.

#![no_main]

use egresos_core::Expense;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<Vec<Expense>>(data);
});
