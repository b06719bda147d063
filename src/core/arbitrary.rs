//! Commands assembled outside the typed grammar.

use std::collections::HashMap;

use bytes::Bytes;

use crate::cluster::slot::{key_slot, KeySlot};
use crate::core::builder::Builder;
use crate::core::command::{CommandFlags, Completed, Incomplete};
use crate::core::error::{misuse, Error};

const SUBSCRIBE_SUFFIX: &[u8] = b"SUBSCRIBE";

/// A command whose tokens are supplied by the caller.
///
/// Keys must be declared through [`keys`](Arbitrary::keys) so the command is
/// routed to the right cluster slot.
///
/// # Example
///
/// ```
/// use muxis_cmds::{Builder, KeySlot};
///
/// let b = Builder::new(KeySlot::NO_SLOT);
/// let cmd = b.arbitrary(["MGET"]).keys(["{t}a", "{t}b"]).multi_get();
/// assert_eq!(cmd.args(), ["MGET", "{t}a", "{t}b"]);
/// assert_eq!(cmd.slot().get(), Some(muxis_cmds::key_slot("t")));
/// assert!(cmd.is_mget());
/// ```
#[derive(Debug)]
#[must_use = "a command must be finished with `build()`"]
pub struct Arbitrary(Incomplete);

impl Builder {
    /// Starts an arbitrary command with the given verb and subcommand tokens.
    pub fn arbitrary<I>(&self, tokens: I) -> Arbitrary
    where
        I: IntoIterator,
        I::Item: Into<Bytes>,
    {
        Arbitrary(self.start(CommandFlags::empty(), &[]).args(tokens))
    }

    /// Splits a multi-key read into one `MGET` per slot.
    ///
    /// Keys keep their relative order within each slot. Every produced
    /// command is flagged as a multi-GET.
    pub fn mgets<I>(&self, keys: I) -> HashMap<u16, Completed>
    where
        I: IntoIterator,
        I::Item: Into<Bytes>,
    {
        let mut groups: HashMap<u16, Vec<Bytes>> = HashMap::new();
        for key in keys {
            let key = key.into();
            groups.entry(key_slot(&key)).or_default().push(key);
        }

        groups
            .into_iter()
            .map(|(slot, keys)| (slot, self.arbitrary(["MGET"]).keys(keys).multi_get()))
            .collect()
    }
}

impl Arbitrary {
    /// Appends keys and folds their slots into the slot context.
    ///
    /// While no slot has been seeded, only the first key of the call is
    /// hashed; later calls check every key against the seeded slot.
    pub fn keys<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Bytes>,
    {
        let seeded = !self.0.slot().is_no_slot();
        let mut first = true;
        for key in keys {
            let key = key.into();
            if seeded {
                let ks = self.0.slot().observe(&key);
                self.0.set_slot(ks);
            } else if first {
                self.0.set_slot(KeySlot::of(&key));
            }
            first = false;
            self.0.push_raw(key);
        }
        self
    }

    /// Appends non-key arguments.
    #[inline]
    pub fn args<I>(self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Bytes>,
    {
        Self(self.0.args(args))
    }

    /// Seals the command.
    ///
    /// # Panics
    ///
    /// Panics if no verb was given or the verb is a pub/sub subscription.
    #[track_caller]
    pub fn build(self) -> Completed {
        self.check();
        self.0.build()
    }

    /// Seals the command and marks it as blocking its connection.
    #[track_caller]
    pub fn blocking(self) -> Completed {
        self.check();
        self.0.flag(CommandFlags::BLOCK).build()
    }

    /// Seals the command and marks it as read-only.
    #[track_caller]
    pub fn read_only(self) -> Completed {
        self.check();
        self.0.flag(CommandFlags::READONLY).build()
    }

    /// Seals the command and marks it as a multi-GET eligible for scatter.
    ///
    /// # Panics
    ///
    /// Panics unless the verb is exactly `MGET` or `JSON.MGET`.
    #[track_caller]
    pub fn multi_get(self) -> Completed {
        self.check();
        let verb = self.verb();
        if verb != b"MGET".as_slice() && verb != b"JSON.MGET".as_slice() {
            misuse(Error::ArbitraryMultiGet)
        }
        self.0.flag(CommandFlags::MT_GET).build()
    }

    fn verb(&self) -> &[u8] {
        self.0
            .slice()
            .args()
            .first()
            .map(|verb| verb.as_ref())
            .unwrap_or_default()
    }

    #[track_caller]
    fn check(&self) {
        let verb = self.verb();
        if verb.is_empty() {
            misuse(Error::ArbitraryNoCommand)
        }
        if ends_with_ignore_ascii_case(verb, SUBSCRIBE_SUFFIX) {
            misuse(Error::ArbitrarySubscribe)
        }
    }
}

fn ends_with_ignore_ascii_case(haystack: &[u8], suffix: &[u8]) -> bool {
    haystack.len() >= suffix.len()
        && haystack[haystack.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
