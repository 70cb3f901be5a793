//! Test suite for xftodo
//!
//! This module organizes all tests

pub mod common;
pub mod property;
