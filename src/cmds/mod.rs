//! # Command Grammar
//!
//! Typed grammar states for Redis commands, grouped by command family.
//!
//! Each command has an entry method on [`Builder`](crate::Builder) returning
//! the first state of its grammar. A state exposes one method per token that
//! may follow it, plus `build()` (and `cache()` for client-side cacheable
//! reads) when the command may end there.
//!
//! ## Modules
//!
//! - [`connection`] - AUTH, PING, SELECT and the CLIENT subcommands
//! - [`string`] - GET, SET and the other string commands
//! - [`generic`] - Keyspace commands such as DEL, EXPIRE and SCAN
//! - [`hash`] - Hash commands
//! - [`list`] - List commands, including the blocking pops
//! - [`sorted_set`] - Sorted set commands
//! - [`geo`] - Geospatial index commands
//! - [`stream`] - Stream commands (requires `streams` feature)
//! - [`bloom`] - RedisBloom filters (BF.* and CF.*)
//! - [`timeseries`] - RedisTimeSeries commands
//! - [`ai`] - RedisAI model and tensor reads
//! - [`json`] - RedisJSON commands (requires `json` feature)
//! - [`cluster`] - Cluster management commands
//!
//! ## Grammar Guarantees
//!
//! Malformed commands are rejected by the type checker. Only client-side
//! cacheable reads offer `cache()`:
//!
//! ```compile_fail
//! let b = muxis_cmds::Builder::default();
//! let _ = b.set().key("k").value("v").cache();
//! ```
//!
//! A multi-key `EXISTS` cannot be tracked by a single key, so it only builds:
//!
//! ```compile_fail
//! let b = muxis_cmds::Builder::default();
//! let _ = b.exists().key(["a", "b"]).cache();
//! ```
//!
//! `CLIENT KILL` needs a filter before it can be built:
//!
//! ```compile_fail
//! let b = muxis_cmds::Builder::default();
//! let _ = b.client_kill().build();
//! ```
//!
//! and its filters only come in protocol order, so `ID` cannot follow `TYPE`:
//!
//! ```compile_fail
//! use muxis_cmds::cmds::connection::ClientKind;
//!
//! let b = muxis_cmds::Builder::default();
//! let _ = b.client_kill().kind(ClientKind::Normal).id(1).build();
//! ```
//!
//! `CF.INSERT ... ITEMS` needs at least one item:
//!
//! ```compile_fail
//! let b = muxis_cmds::Builder::default();
//! let _ = b.cf_insert().key("k").items().build();
//! ```
//!
//! The same chains with the missing pieces supplied do compile:
//!
//! ```
//! use muxis_cmds::cmds::connection::ClientKind;
//!
//! let b = muxis_cmds::Builder::default();
//! let _ = b.get().key("k").cache();
//! let _ = b.exists().key(["a", "b"]).build();
//! let _ = b.client_kill().id(1).kind(ClientKind::Normal).build();
//! let _ = b.cf_insert().key("k").items().item(["i"]).build();
//! ```

pub mod ai;
pub mod bloom;
pub mod cluster;
pub mod connection;
pub mod generic;
pub mod geo;
pub mod hash;
#[cfg(feature = "json")]
pub mod json;
pub mod list;
pub mod sorted_set;
#[cfg(feature = "streams")]
pub mod stream;
pub mod string;
pub mod timeseries;

#[cfg(test)]
pub(crate) fn test_builder() -> crate::core::Builder {
    use crate::cluster::KeySlot;
    use crate::core::{Builder, CommandPool, PoolConfig};

    Builder::with_pool(CommandPool::new(PoolConfig::default()), KeySlot::NO_SLOT)
}
