//! Unit test tree mirroring the src module layout

// Tests unwrap the results they assert on
#![allow(clippy::unwrap_used)]
