//! # Muxis Core
//!
//! Builder machinery shared by every generated command.
//!
//! ## Modules
//!
//! - [`pool`] - Pooled argument buffers
//! - [`command`] - Attribute flags and terminal command values
//! - [`builder`] - Builder root
//! - [`arbitrary`] - Commands assembled outside the typed grammar
//! - [`error`] - Misuse sentinels

/// Commands outside the typed grammar.
pub mod arbitrary;
/// Builder root.
pub mod builder;
/// Terminal command values.
pub mod command;
/// Error types.
pub mod error;
/// Pooled argument buffers.
pub mod pool;

pub use arbitrary::Arbitrary;
pub use builder::Builder;
pub use command::{Cacheable, CommandFlags, Completed};
pub use error::{Error, Result};
pub use pool::{CommandPool, CommandSlice, PoolConfig, PoolStats};
