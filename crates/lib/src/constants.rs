//! Constants used throughout the vbcompat library.
//!
//! This module provides central definitions for the legacy conventions the rest of the
//! crate reproduces.

use crate::math::MidpointRounding;

/// Position of the first entry in a collection. Legacy collections are 1-based.
pub const BASE_INDEX: usize = 1;

/// Midpoint rounding used for implicit narrowing to a whole number.
pub const LEGACY_ROUNDING: MidpointRounding = MidpointRounding::ToEven;
