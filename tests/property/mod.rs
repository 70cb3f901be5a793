//! Property-based tests

pub mod board_proptest;
