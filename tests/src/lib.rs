//! Integration-test crate for the wirekem workspace.
//!
//! The tests live under `tests/`; this library is intentionally empty.
