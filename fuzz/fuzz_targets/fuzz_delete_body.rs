//! Fuzz target: decoding a `DELETE /api/egresos` body.

#![no_main]

use egresos_core::DeleteExpense;
use egresos_gateway::body::parse;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = parse::<DeleteExpense>(data);
});
