use bytes::Bytes;

use crate::cluster::slot::KeySlot;
use crate::core::command::{CommandFlags, Incomplete};
use crate::core::pool::CommandPool;

/// Factory for typed Redis commands.
///
/// A builder binds the slot context every command starts from and the pool
/// its argument buffers come from. Each Redis command has one entry method
/// returning the first state of that command's grammar.
///
/// # Example
///
/// ```
/// use muxis_cmds::{Builder, CommandPool, KeySlot, PoolConfig};
///
/// let pool = CommandPool::new(PoolConfig::new().max_buffers(128));
/// let b = Builder::with_pool(pool, KeySlot::NO_SLOT);
///
/// let cmd = b
///     .client_tracking()
///     .on()
///     .redirect(42)
///     .prefix("foo")
///     .bcast()
///     .noloop()
///     .build();
/// assert_eq!(
///     cmd.args(),
///     ["CLIENT", "TRACKING", "ON", "REDIRECT", "42", "PREFIX", "foo", "BCAST", "NOLOOP"]
/// );
/// assert!(cmd.slot().is_no_slot());
/// cmd.release();
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    pool: CommandPool,
    ks: KeySlot,
}

impl Builder {
    /// Creates a builder over the process-wide pool.
    ///
    /// # Arguments
    ///
    /// * `initial` - Slot context every command starts from, usually [`KeySlot::NO_SLOT`]
    #[inline]
    pub fn new(initial: KeySlot) -> Self {
        Self::with_pool(CommandPool::global().clone(), initial)
    }

    /// Creates a builder over an explicit pool.
    ///
    /// # Arguments
    ///
    /// * `pool` - Pool the argument buffers are taken from and returned to
    /// * `initial` - Slot context every command starts from
    pub fn with_pool(pool: CommandPool, initial: KeySlot) -> Self {
        tracing::trace!(?initial, "command builder created");
        Self { pool, ks: initial }
    }

    /// The slot context commands start from.
    #[inline]
    pub fn slot(&self) -> KeySlot {
        self.ks
    }

    /// The pool backing this builder.
    #[inline]
    pub fn pool(&self) -> &CommandPool {
        &self.pool
    }

    /// Acquires a buffer and writes the command verb.
    #[inline]
    pub(crate) fn start(&self, cf: CommandFlags, verb: &[&'static str]) -> Incomplete {
        let mut cs = self.pool.acquire();
        cs.extend(verb.iter().map(|v| Bytes::from_static(v.as_bytes())));
        Incomplete::new(cs, self.ks, cf)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new(KeySlot::NO_SLOT)
    }
}
