//! Collection integration tests
//!
//! This module tests the Collection through its public API only.
//! Tests are organized by concern: plain operations, relative placement, and iteration.

mod iteration;
