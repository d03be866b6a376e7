//! Fuzz target: decoding and validating a `POST /api/egresos` body.
//!
//! Any byte sequence must either parse into a `NewExpense` or produce an
//! `InvalidBody` error; validation of a parsed payload must never panic.

#![no_main]

use egresos_core::NewExpense;
use egresos_gateway::body::parse;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = parse::<NewExpense>(data) {
        let _ = payload.validate();
        // A parsed payload re-encodes to JSON that parses back.
        let json = serde_json::to_vec(&payload).expect("NewExpense serialization must not fail");
        let again: NewExpense = parse(&json).expect("re-encoded payload must parse");
        assert_eq!(again.fecha, payload.fecha);
        assert_eq!(again.descripcion, payload.descripcion);
    }
});
