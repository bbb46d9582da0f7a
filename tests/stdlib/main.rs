//! Integration tests for the native library
//!
//! Drives the exported natives end to end through [`sift_stdlib::Library`],
//! with callbacks supplied as native function values.

mod callbacks;
