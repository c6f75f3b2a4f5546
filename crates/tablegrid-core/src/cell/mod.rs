//! Cell-related types
//!
//! This module contains:
//! - [`Cell`] - A single grid position: content, span, alignment, merge linkage
//! - [`CellAddress`] - A cell's location (e.g., "B3")
//! - [`Align`] - Horizontal text alignment

mod address;
mod data;

pub use address::CellAddress;
pub use data::{Align, Cell};
