//! Deterministic 2D guillotine rectangle packing.
//!
//! Items are sorted by descending footprint and placed one at a time into
//! a pool of free spaces; every placement splits the chosen space into a
//! right and a bottom remainder. A selection policy decides which eligible
//! space wins. The engine owns all of its state and runs fully offline:
//! no I/O, no threads, no clock.
//!
//! ```
//! use rect_packer::engine::PackEngine;
//! use rect_packer::pool::SpacePolicy;
//!
//! let mut engine = PackEngine::new();
//! engine.set_container(100, 100);
//! engine.set_policy(SpacePolicy::MinGap);
//! engine.add_item(40, 30);
//! engine.add_item(25, 25);
//! engine.pack()?;
//!
//! assert_eq!(engine.packed_count(), 2);
//! # Ok::<(), rect_packer::error::PackError>(())
//! ```

pub mod engine;
pub mod error;
pub mod pool;
pub mod render;
pub mod types;
