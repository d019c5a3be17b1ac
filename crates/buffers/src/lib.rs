//! Allocation-conscious storage used by the layout engine.
//!
//! Two containers live here:
//! - [`FixedBuffer`]: inline, fixed-length arrays for data whose cardinality is set by geometry
//!   (9 edge slots, 4 physical edges, 2 axes) and for small per-node tables.
//! - [`LayoutList`]: a growable list of plain-data elements with explicit capacity management,
//!   used as the backing store of the node arena and its free list.
//!
//! Neither container is synchronised. Callers serialise mutation.

mod error;
mod fixed_buffer;
mod layout_list;

pub use error::BufferError;
pub use fixed_buffer::{FixedBuffer, FixedBuffer2, FixedBuffer4, FixedBuffer6, FixedBuffer9, FixedBuffer16};
pub use layout_list::{Allocator, LayoutList, LayoutListCursor};
