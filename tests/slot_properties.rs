//! Property-based tests for slot hashing and accumulation.

use muxis_cmds::{key_slot, Builder, CommandPool, KeySlot, PoolConfig, SLOT_COUNT};
use proptest::prelude::*;

/// Keys without braces, so the whole key is hashed.
fn arb_plain_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9:_-]{0,64}").unwrap()
}

/// Non-empty hash tag bodies.
fn arb_tag() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9:_-]{1,16}").unwrap()
}

fn builder() -> Builder {
    Builder::with_pool(CommandPool::new(PoolConfig::default()), KeySlot::NO_SLOT)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Every key maps into the slot space.
    #[test]
    fn prop_slot_in_range(key in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert!(key_slot(&key) < SLOT_COUNT);
    }

    /// Keys sharing a hash tag share a slot.
    #[test]
    fn prop_hash_tag_colocates(tag in arb_tag(), a in arb_plain_key(), b in arb_plain_key()) {
        let left = format!("{a}{{{tag}}}{b}");
        let right = format!("{b}{{{tag}}}{a}");
        prop_assert_eq!(key_slot(&left), key_slot(&tag));
        prop_assert_eq!(key_slot(&left), key_slot(&right));
    }

    /// An empty tag is ignored and the whole key is hashed.
    #[test]
    fn prop_empty_tag_hashes_whole_key(suffix in arb_plain_key()) {
        let key = format!("{{}}{suffix}");
        let mut expected = KeySlot::NO_SLOT;
        expected = expected.observe(&key);
        prop_assert_eq!(expected.get(), Some(key_slot(key.as_bytes())));
        prop_assert_eq!(key_slot(&key), key_slot(&key));
    }

    /// Only the first tag applies.
    #[test]
    fn prop_first_tag_wins(first in arb_tag(), second in arb_tag()) {
        let key = format!("{{{first}}}{{{second}}}");
        prop_assert_eq!(key_slot(&key), key_slot(&first));
    }

    /// Same-slot keys keep the slot, whatever their count.
    #[test]
    fn prop_same_tag_keys_keep_slot(tag in arb_tag(), suffixes in prop::collection::vec(arb_plain_key(), 1..8)) {
        let keys: Vec<String> = suffixes.iter().map(|s| format!("{{{tag}}}{s}")).collect();
        let slot = KeySlot::NO_SLOT.observe_all(&keys);
        prop_assert_eq!(slot.get(), Some(key_slot(&tag)));

        let cmd = builder().del().key(keys).build();
        prop_assert_eq!(cmd.slot(), slot);
    }

    /// Cross-slot is sticky.
    #[test]
    fn prop_cross_slot_is_sticky(a in arb_plain_key(), b in arb_plain_key(), rest in prop::collection::vec(arb_plain_key(), 0..8)) {
        prop_assume!(key_slot(&a) != key_slot(&b));
        let slot = KeySlot::NO_SLOT.observe(&a).observe(&b).observe_all(&rest);
        prop_assert!(slot.is_cross_slot());
        prop_assert!(slot.observe(&a).is_cross_slot());
    }

    /// Observing several keys in one call equals observing them one by one.
    #[test]
    fn prop_batch_equals_sequential(keys in prop::collection::vec(arb_plain_key(), 0..8)) {
        let batch = KeySlot::NO_SLOT.observe_all(&keys);
        let sequential = keys.iter().fold(KeySlot::NO_SLOT, |slot, key| slot.observe(key));
        prop_assert_eq!(batch, sequential);
    }
}

#[test]
fn test_fixed_vectors() {
    assert_eq!(key_slot("foo"), 12182);
    assert_eq!(key_slot("{foo}"), 12182);
    assert_eq!(key_slot("{foo}bar"), 12182);
    assert_eq!(key_slot("123456789"), 12739);
    assert_eq!(key_slot(""), 0);
    assert_eq!(key_slot("{}abc"), 5980);
    assert_ne!(key_slot("{}abc"), key_slot("abc"));
}
