//! # Muxis Cluster
//!
//! Redis Cluster slot routing support for the command builder.
//!
//! ## Features
//!
//! - **Slot hashing**: CRC16 of the key or its `{...}` hash tag, modulo 16384
//! - **Slot accumulation**: every command carries a [`KeySlot`] folded from
//!   its keys, or the cross-slot sentinel when keys disagree
//!
//! ## Example
//!
//! ```
//! use muxis_cmds::{key_slot, Builder, KeySlot};
//!
//! let b = Builder::new(KeySlot::NO_SLOT);
//! let cmd = b.mget().key(["{user1000}.following", "{user1000}.followers"]).build();
//! assert_eq!(cmd.slot().get(), Some(key_slot("user1000")));
//! ```

pub mod slot;

pub use slot::{key_slot, KeySlot, SLOT_COUNT};
