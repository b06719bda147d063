//! Redis Cluster slot calculation.
//!
//! Redis Cluster uses CRC16 to map keys to slots (0-16383).
//! This module provides the key hasher and [`KeySlot`], the slot context that
//! is carried by value through every command under construction.

use std::fmt;

use crc::{Crc, CRC_16_XMODEM};

/// Number of hash slots in Redis Cluster.
pub const SLOT_COUNT: u16 = 16384;

/// CRC-16/XMODEM algorithm used by Redis. The lookup table is built at
/// compile time.
const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// Calculates the Redis Cluster slot for a given key.
///
/// Redis uses CRC16 modulo 16384 for slot calculation.
/// If the key contains `{...}`, only the content inside the braces
/// is used for hashing (hash tags).
///
/// # Arguments
///
/// * `key` - The Redis key to calculate the slot for
///
/// # Returns
///
/// The slot number (0-16383)
///
/// # Examples
///
/// ```
/// use muxis_cmds::key_slot;
///
/// assert_eq!(key_slot("foo"), 12182);
/// assert_eq!(key_slot("{user1000}.following"), key_slot("{user1000}.followers"));
/// assert_ne!(key_slot("user1000"), key_slot("user2000"));
/// ```
pub fn key_slot<K: AsRef<[u8]>>(key: K) -> u16 {
    let hash_key = extract_hash_tag(key.as_ref());
    CRC16.checksum(hash_key) % SLOT_COUNT
}

/// Extracts the hash tag from a key.
///
/// Redis hash tags are defined by `{...}`:
/// - `{user1000}.following` → hash tag is `user1000`
/// - `foo{bar}baz` → hash tag is `bar`
/// - `foo{}{bar}` → the first pair is empty, use whole key
/// - `foo` → no hash tag, use whole key
fn extract_hash_tag(key: &[u8]) -> &[u8] {
    if let Some(start) = key.iter().position(|&b| b == b'{') {
        if let Some(len) = key[start + 1..].iter().position(|&b| b == b'}') {
            if len > 0 {
                return &key[start + 1..start + 1 + len];
            }
        }
    }

    key
}

/// Slot context of a command under construction.
///
/// A 16-bit value that is either [`KeySlot::NO_SLOT`] (no key observed yet),
/// [`KeySlot::CROSS_SLOT`] (keys from different slots were observed), or a
/// concrete slot in the 14 low bits.
///
/// Accumulation never fails: a cross-slot outcome is sticky and reported to
/// the transport through [`KeySlot::is_cross_slot`], which decides whether to
/// reject the command or scatter it.
///
/// ```
/// use muxis_cmds::KeySlot;
///
/// let slot = KeySlot::NO_SLOT.observe("{t}a").observe("{t}b");
/// assert_eq!(slot.get(), Some(muxis_cmds::key_slot("t")));
///
/// let slot = KeySlot::NO_SLOT.observe("a").observe("b");
/// assert!(slot.is_cross_slot());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySlot(u16);

impl KeySlot {
    /// No key contributed yet; any node may serve the command.
    pub const NO_SLOT: KeySlot = KeySlot(1 << 15);

    /// Keys hashed to more than one slot.
    pub const CROSS_SLOT: KeySlot = KeySlot(1 << 14);

    const VALUE_MASK: u16 = SLOT_COUNT - 1;

    /// Creates a context bound to a concrete slot. Values are masked to 14 bits.
    #[inline]
    pub const fn new(slot: u16) -> Self {
        KeySlot(slot & Self::VALUE_MASK)
    }

    /// The context a single key hashes to.
    #[inline]
    pub fn of<K: AsRef<[u8]>>(key: K) -> Self {
        KeySlot(key_slot(key))
    }

    /// Folds one more key into the context.
    #[inline]
    #[must_use]
    pub fn observe<K: AsRef<[u8]>>(self, key: K) -> Self {
        self.merge(Self::of(key))
    }

    /// Folds every key in order; equivalent to repeated [`observe`](Self::observe).
    #[must_use]
    pub fn observe_all<I>(self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        keys.into_iter().fold(self, |slot, key| slot.observe(key))
    }

    /// Combines two contexts.
    #[must_use]
    pub fn merge(self, other: KeySlot) -> Self {
        if self == Self::NO_SLOT {
            other
        } else if other == Self::NO_SLOT || self == other {
            self
        } else {
            Self::CROSS_SLOT
        }
    }

    /// The concrete slot, if exactly one was observed.
    #[inline]
    pub const fn get(self) -> Option<u16> {
        if self.0 & (Self::NO_SLOT.0 | Self::CROSS_SLOT.0) == 0 {
            Some(self.0)
        } else {
            None
        }
    }

    /// Returns `true` if no key has been observed.
    #[inline]
    pub const fn is_no_slot(self) -> bool {
        self.0 == Self::NO_SLOT.0
    }

    /// Returns `true` if keys from different slots were observed.
    #[inline]
    pub const fn is_cross_slot(self) -> bool {
        self.0 == Self::CROSS_SLOT.0
    }

    /// The raw 16-bit encoding.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }
}

impl Default for KeySlot {
    fn default() -> Self {
        Self::NO_SLOT
    }
}

impl fmt::Debug for KeySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(slot) => f.debug_tuple("KeySlot").field(&slot).finish(),
            None if self.is_cross_slot() => f.write_str("KeySlot(CrossSlot)"),
            None => f.write_str("KeySlot(NoSlot)"),
        }
    }
}
