//! Omega node — process startup for the living-room home-automation node.
//!
//! Exposes the startup sequence as a library so integration tests can run
//! it without spawning the binary.

pub mod startup;
