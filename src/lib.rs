//! # Muxis Cmds
//!
//! Type-safe Redis command builder with cluster slot routing and pooled
//! argument buffers.
//!
//! Every command starts from a [`Builder`] and moves through a chain of
//! grammar states. Each state only offers the tokens that may legally follow,
//! so an invalid command does not compile. The chain ends in a [`Completed`]
//! (or a [`Cacheable`] for reads eligible for client-side caching) that a
//! transport encodes, dispatches, and hands back to the pool.
//!
//! ## Features
//!
//! - `json` - RedisJSON commands with `serde` value encoding
//! - `streams` - Redis Streams commands
//!
//! ## Example
//!
//! ```
//! use muxis_cmds::{Builder, KeySlot};
//!
//! let b = Builder::new(KeySlot::NO_SLOT);
//!
//! let set = b.set().key("{user:1}name").value("ada").nx().ex(60).build();
//! assert_eq!(set.args(), ["SET", "{user:1}name", "ada", "NX", "EX", "60"]);
//! assert!(set.is_write());
//!
//! let get = b.get().key("{user:1}name").cache();
//! assert_eq!(get.slot(), set.slot());
//! assert!(get.is_readonly());
//!
//! set.release();
//! get.into_completed().release();
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod cluster;
pub mod cmds;
pub mod core;

pub use crate::cluster::{key_slot, KeySlot, SLOT_COUNT};
pub use crate::core::{
    Arbitrary, Builder, Cacheable, CommandFlags, CommandPool, CommandSlice, Completed, Error,
    PoolConfig, PoolStats, Result,
};
