use bitflags::bitflags;
use bytes::{Bytes, BytesMut};

use crate::cluster::slot::KeySlot;
use crate::core::pool::CommandSlice;

bitflags! {
    /// Attributes the transport needs to route and schedule a command.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CommandFlags: u16 {
        /// Multi-key GET family, eligible for per-key scatter under cluster.
        const MT_GET   = (1 << 11) | Self::READONLY.bits();
        /// Does not modify the dataset; may be served by replicas.
        const READONLY = 1 << 13;
        /// May hold the connection; dispatched on a dedicated connection.
        const BLOCK    = 1 << 14;
        /// `CLIENT CACHING YES`; must be paired with the following read.
        const OPT_IN   = 1 << 15;
    }
}

/// A command under construction.
///
/// Grammar states are thin wrappers around this value; a transition consumes
/// the previous state and moves the same buffer into the next one.
#[derive(Debug)]
pub(crate) struct Incomplete {
    cs: CommandSlice,
    ks: KeySlot,
    cf: CommandFlags,
}

impl Incomplete {
    #[inline]
    pub(crate) fn new(cs: CommandSlice, ks: KeySlot, cf: CommandFlags) -> Self {
        Self { cs, ks, cf }
    }

    /// Appends a non-key argument.
    #[inline]
    pub(crate) fn arg(mut self, arg: impl Into<Bytes>) -> Self {
        self.cs.push(arg);
        self
    }

    /// Appends non-key arguments.
    #[inline]
    pub(crate) fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Bytes>,
    {
        self.cs.extend(args);
        self
    }

    /// Appends an integer argument in base 10.
    #[inline]
    pub(crate) fn int(self, n: i64) -> Self {
        self.arg(n.to_string())
    }

    /// Appends an unsigned integer argument in base 10.
    #[inline]
    pub(crate) fn uint(self, n: u64) -> Self {
        self.arg(n.to_string())
    }

    /// Appends a floating point argument.
    #[inline]
    pub(crate) fn float(self, f: f64) -> Self {
        self.arg(f.to_string())
    }

    /// Appends a key and folds its slot into the slot context.
    #[inline]
    pub(crate) fn key(mut self, key: impl Into<Bytes>) -> Self {
        let key = key.into();
        self.ks = self.ks.observe(&key);
        self.cs.push(key);
        self
    }

    /// Appends keys, observing each in order.
    pub(crate) fn keys<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Bytes>,
    {
        for key in keys {
            self = self.key(key);
        }
        self
    }

    /// Adds attribute flags.
    #[inline]
    pub(crate) fn flag(mut self, flags: CommandFlags) -> Self {
        self.cf |= flags;
        self
    }

    #[inline]
    pub(crate) fn slot(&self) -> KeySlot {
        self.ks
    }

    #[inline]
    pub(crate) fn set_slot(&mut self, ks: KeySlot) {
        self.ks = ks;
    }

    #[inline]
    pub(crate) fn slice(&self) -> &CommandSlice {
        &self.cs
    }

    #[inline]
    pub(crate) fn push_raw(&mut self, arg: Bytes) {
        self.cs.push(arg);
    }

    /// Returns the unsealed buffer to the pool.
    #[inline]
    #[track_caller]
    pub(crate) fn discard(self) {
        self.cs.release_force();
    }

    /// Seals the buffer into a [`Completed`].
    #[inline]
    #[track_caller]
    pub(crate) fn build(mut self) -> Completed {
        self.cs.seal();
        Completed {
            cs: self.cs,
            ks: self.ks,
            cf: self.cf,
        }
    }

    /// Seals the buffer into a [`Cacheable`].
    #[inline]
    #[track_caller]
    pub(crate) fn cache(mut self) -> Cacheable {
        self.cs.seal();
        Cacheable {
            cs: self.cs,
            ks: self.ks,
            cf: self.cf,
        }
    }
}

/// A sealed command ready for dispatch.
///
/// # Example
///
/// ```
/// use muxis_cmds::{Builder, KeySlot};
///
/// let b = Builder::new(KeySlot::NO_SLOT);
/// let cmd = b.get().key("foo").build();
/// assert_eq!(cmd.args(), ["GET", "foo"]);
/// assert_eq!(cmd.slot().get(), Some(12182));
/// assert!(cmd.is_readonly());
/// cmd.release();
/// ```
#[derive(Debug)]
pub struct Completed {
    cs: CommandSlice,
    ks: KeySlot,
    cf: CommandFlags,
}

/// A sealed, side-effect-free command whose response may be cached on the
/// client under server-assisted tracking.
#[derive(Debug)]
pub struct Cacheable {
    cs: CommandSlice,
    ks: KeySlot,
    cf: CommandFlags,
}

macro_rules! impl_terminal {
    ($($terminal:ident),+) => {
        $(
            impl $terminal {
                /// The command tokens, verb first.
                #[inline]
                pub fn args(&self) -> &[Bytes] {
                    self.cs.args()
                }

                /// The slot context accumulated from the command's keys.
                #[inline]
                pub fn slot(&self) -> KeySlot {
                    self.ks
                }

                /// The attribute flags.
                #[inline]
                pub fn flags(&self) -> CommandFlags {
                    self.cf
                }

                /// Returns `true` if the command does not write.
                #[inline]
                pub fn is_readonly(&self) -> bool {
                    self.cf.contains(CommandFlags::READONLY)
                }

                /// Returns `true` if the command may write.
                #[inline]
                pub fn is_write(&self) -> bool {
                    !self.is_readonly()
                }

                /// Returns `true` if the command may block its connection.
                #[inline]
                pub fn is_block(&self) -> bool {
                    self.cf.contains(CommandFlags::BLOCK)
                }

                /// Returns `true` for multi-GET commands built with `multi_get`.
                #[inline]
                pub fn is_mget(&self) -> bool {
                    self.cf.contains(CommandFlags::MT_GET)
                }

                /// Returns `true` for `CLIENT CACHING YES`.
                #[inline]
                pub fn is_opt_in(&self) -> bool {
                    self.cf.contains(CommandFlags::OPT_IN)
                }

                /// Asserts the command was sealed and not modified afterwards.
                ///
                /// # Panics
                ///
                /// Panics with "a command should be finished by calling
                /// Build() or Cache()" otherwise.
                #[inline]
                #[track_caller]
                pub fn verify(&self) {
                    self.cs.verify()
                }

                /// Sets the number of recipients that will release the
                /// command. Must be called before the command is shared with
                /// a concurrent consumer.
                #[inline]
                pub fn set_refs(&self, refs: u32) {
                    self.cs.set_refs(refs)
                }

                /// The outstanding reference count.
                #[inline]
                pub fn refs(&self) -> u32 {
                    self.cs.refs()
                }

                /// Hands the buffer back to its pool once the reference
                /// count allows it.
                #[inline]
                #[track_caller]
                pub fn release(self) {
                    self.cs.release()
                }

                /// Hands the buffer back to its pool regardless of the
                /// reference count.
                #[inline]
                #[track_caller]
                pub fn release_force(self) {
                    self.cs.release_force()
                }
            }

            impl Clone for $terminal {
                /// Shares the sealed buffer with another handle for fan-out.
                fn clone(&self) -> Self {
                    Self {
                        cs: self.cs.share(),
                        ks: self.ks,
                        cf: self.cf,
                    }
                }
            }
        )+
    };
}

impl_terminal!(Completed, Cacheable);

impl Cacheable {
    /// Returns the tracked key and the command identity used to store the
    /// response in a client-side cache.
    ///
    /// The key is the second token; the identity is every other token
    /// concatenated in order.
    ///
    /// ```
    /// use muxis_cmds::Builder;
    ///
    /// let b = Builder::default();
    /// let cmd = b.getrange().key("k").start(0).end(5).cache();
    /// let (key, command) = cmd.cache_key();
    /// assert_eq!(key, "k");
    /// assert_eq!(command, "GETRANGE05");
    /// ```
    pub fn cache_key(&self) -> (Bytes, Bytes) {
        let args = self.args();
        let key = args.get(1).cloned().unwrap_or_default();
        if args.len() <= 2 {
            return (key, args.first().cloned().unwrap_or_default());
        }

        let len = args
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 1)
            .map(|(_, arg)| arg.len())
            .sum();
        let mut command = BytesMut::with_capacity(len);
        for (i, arg) in args.iter().enumerate() {
            if i != 1 {
                command.extend_from_slice(arg);
            }
        }
        (key, command.freeze())
    }

    /// Converts into a [`Completed`] for transports that dispatch cacheable
    /// commands through the ordinary path.
    #[inline]
    pub fn into_completed(self) -> Completed {
        Completed {
            cs: self.cs,
            ks: self.ks,
            cf: self.cf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pool::{CommandPool, PoolConfig};

    fn incomplete(pool: &CommandPool, verb: &'static str, cf: CommandFlags) -> Incomplete {
        Incomplete::new(pool.acquire(), KeySlot::NO_SLOT, cf).arg(verb)
    }

    #[test]
    fn test_mt_get_implies_readonly() {
        assert!(CommandFlags::MT_GET.contains(CommandFlags::READONLY));
        assert!(!CommandFlags::READONLY.contains(CommandFlags::MT_GET));
    }

    #[test]
    fn test_incomplete_build() {
        let pool = CommandPool::new(PoolConfig::default());
        let cmd = incomplete(&pool, "SET", CommandFlags::empty())
            .key("a")
            .arg("v")
            .build();
        assert_eq!(cmd.args(), ["SET", "a", "v"]);
        assert_eq!(cmd.slot(), KeySlot::of("a"));
        assert!(cmd.flags().is_empty());
        assert!(cmd.is_write());
        cmd.verify();
        cmd.release();
        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn test_incomplete_numeric_args() {
        let pool = CommandPool::new(PoolConfig::default());
        let cmd = incomplete(&pool, "X", CommandFlags::empty())
            .int(-42)
            .uint(7)
            .float(2.5)
            .float(3.0)
            .build();
        assert_eq!(cmd.args(), ["X", "-42", "7", "2.5", "3"]);
    }

    #[test]
    fn test_incomplete_keys_accumulate_sequentially() {
        let pool = CommandPool::new(PoolConfig::default());
        let cmd = incomplete(&pool, "DEL", CommandFlags::empty())
            .keys(["a", "b"])
            .build();
        assert!(cmd.slot().is_cross_slot());
    }

    #[test]
    fn test_incomplete_flags_preserved() {
        let pool = CommandPool::new(PoolConfig::default());
        let cmd = incomplete(&pool, "BLPOP", CommandFlags::READONLY)
            .flag(CommandFlags::BLOCK)
            .build();
        assert!(cmd.is_block());
        assert!(cmd.is_readonly());
        assert!(!cmd.is_mget());
        assert!(!cmd.is_opt_in());
    }

    #[test]
    fn test_clone_shares_buffer() {
        let pool = CommandPool::new(PoolConfig::default());
        let cmd = incomplete(&pool, "GET", CommandFlags::READONLY).key("k").build();
        cmd.set_refs(2);
        let copy = cmd.clone();
        assert_eq!(copy.args(), cmd.args());
        assert_eq!(copy.refs(), 2);

        copy.release();
        assert_eq!(pool.idle(), 0);
        cmd.release();
        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn test_cache_key_two_tokens() {
        let pool = CommandPool::new(PoolConfig::default());
        let cmd = incomplete(&pool, "GET", CommandFlags::READONLY).key("k").cache();
        let (key, command) = cmd.cache_key();
        assert_eq!(key, "k");
        assert_eq!(command, "GET");
    }

    #[test]
    fn test_cache_key_many_tokens() {
        let pool = CommandPool::new(PoolConfig::default());
        let cmd = incomplete(&pool, "HMGET", CommandFlags::READONLY)
            .key("h")
            .args(["f1", "f2"])
            .cache();
        let (key, command) = cmd.cache_key();
        assert_eq!(key, "h");
        assert_eq!(command, "HMGETf1f2");
    }

    #[test]
    fn test_cacheable_into_completed() {
        let pool = CommandPool::new(PoolConfig::default());
        let cmd = incomplete(&pool, "GET", CommandFlags::READONLY)
            .key("k")
            .cache()
            .into_completed();
        assert!(cmd.is_readonly());
        assert_eq!(cmd.args(), ["GET", "k"]);
        cmd.verify();
    }

    #[test]
    #[should_panic(expected = "a command should not be released twice")]
    fn test_release_clone_without_refs_panics() {
        let pool = CommandPool::new(PoolConfig::default());
        let cmd = incomplete(&pool, "PING", CommandFlags::empty()).build();
        let copy = cmd.clone();
        cmd.release();
        copy.release();
    }
}
