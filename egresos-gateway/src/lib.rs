//! HTTP gateway for the egresos (expenses) table.
//!
//! A stateless router: each request is matched on method and path, its JSON
//! body decoded and validated, and the work forwarded to an
//! [`ExpenseStore`](egresos_store::ExpenseStore). Every response carries
//! permissive CORS headers so browser clients on any origin can call it.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod body;
pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
