//! Benchmark crate for the magdom geometry engine.
//!
//! The benchmarks live under `benches/`; this library is intentionally
//! empty.

#![forbid(unsafe_code)]
