use muxis_cmds::{key_slot, Builder, CommandPool, Completed, KeySlot, PoolConfig};

fn builder() -> Builder {
    Builder::with_pool(CommandPool::new(PoolConfig::default()), KeySlot::NO_SLOT)
}

fn assert_fixture(cmd: Completed, expected: &[&str]) {
    assert_eq!(cmd.args(), expected);
    cmd.verify();
    cmd.release();
}

#[test]
fn test_generic_fixtures() {
    let b = builder();

    assert_fixture(b.del().key(["a"]).build(), &["DEL", "a"]);
    assert_fixture(b.exists().key(["a", "b"]).build(), &["EXISTS", "a", "b"]);
    assert_fixture(
        b.expire().key("a").seconds(60).gt().build(),
        &["EXPIRE", "a", "60", "GT"],
    );
    assert_fixture(b.ttl().key("a").build(), &["TTL", "a"]);
    assert_fixture(b.pttl().key("a").build(), &["PTTL", "a"]);
    assert_fixture(b.key_type().key("a").build(), &["TYPE", "a"]);
    assert_fixture(b.persist().key("a").build(), &["PERSIST", "a"]);
    assert_fixture(b.rename().key("a").newkey("b").build(), &["RENAME", "a", "b"]);
    assert_fixture(
        b.scan().cursor(0).pattern("*").count(10).build(),
        &["SCAN", "0", "MATCH", "*", "COUNT", "10"],
    );
    assert_fixture(b.keys().pattern("user:*").build(), &["KEYS", "user:*"]);
    assert_fixture(b.wait().numreplicas(2).timeout(100).build(), &["WAIT", "2", "100"]);
}

#[test]
fn test_keyless_commands_keep_builder_slot() {
    let pool = CommandPool::new(PoolConfig::default());
    let b = Builder::with_pool(pool, KeySlot::new(42));

    assert_eq!(b.scan().cursor(0).build().slot().get(), Some(42));
    assert_eq!(b.keys().pattern("*").build().slot().get(), Some(42));
    assert_eq!(b.wait().numreplicas(1).timeout(0).build().slot().get(), Some(42));
}

#[test]
fn test_multi_key_slot() {
    let b = builder();
    let cmd = b.exists().key(["{a}x", "{a}y"]).build();
    assert_eq!(cmd.slot().get(), Some(key_slot("a")));

    let cmd = b.exists().key(["{a}x", "{b}y"]).build();
    assert!(cmd.slot().is_cross_slot());
}

#[test]
fn test_flags() {
    let b = builder();
    assert!(b.wait().numreplicas(1).timeout(0).build().is_block());
    assert!(b.scan().cursor(0).build().is_readonly());
    assert!(b.keys().pattern("*").build().is_readonly());
    assert!(b.del().key(["k"]).build().is_write());
    assert!(b.expire().key("k").seconds(1).build().is_write());
    assert!(b.ttl().key("k").cache().is_readonly());
}
