use muxis_cmds::{Builder, CommandPool, Completed, KeySlot, PoolConfig};

fn builder() -> Builder {
    Builder::with_pool(CommandPool::new(PoolConfig::default()), KeySlot::NO_SLOT)
}

fn assert_fixture(cmd: Completed, expected: &[&str]) {
    assert_eq!(cmd.args(), expected);
    cmd.verify();
    cmd.release();
}

#[test]
fn test_list_fixtures() {
    let b = builder();

    assert_fixture(
        b.lpush().key("l").element(["a", "b"]).build(),
        &["LPUSH", "l", "a", "b"],
    );
    assert_fixture(b.rpush().key("l").element(["c"]).build(), &["RPUSH", "l", "c"]);
    assert_fixture(b.lpop().key("l").build(), &["LPOP", "l"]);
    assert_fixture(b.rpop().key("l").count(2).build(), &["RPOP", "l", "2"]);
    assert_fixture(
        b.lrange().key("l").start(0).stop(10).build(),
        &["LRANGE", "l", "0", "10"],
    );
    assert_fixture(b.llen().key("l").build(), &["LLEN", "l"]);
    assert_fixture(
        b.blpop().key(["l1", "l2"]).timeout(1.5).build(),
        &["BLPOP", "l1", "l2", "1.5"],
    );
    assert_fixture(b.brpop().key(["l"]).timeout(5.0).build(), &["BRPOP", "l", "5"]);
}

#[test]
fn test_blocking_pops_are_flagged() {
    let b = builder();
    let blpop = b.blpop().key(["l"]).timeout(0.0).build();
    let brpop = b.brpop().key(["l"]).timeout(0.0).build();
    let lpop = b.lpop().key("l").build();

    assert!(blpop.is_block());
    assert!(brpop.is_block());
    assert!(!lpop.is_block());
}

#[test]
fn test_list_reads_cacheable() {
    let b = builder();
    let cmd = b.lrange().key("l").start(0).stop(-1).cache();
    let (key, command) = cmd.cache_key();
    assert_eq!(key, "l");
    assert_eq!(command, "LRANGE0-1");

    let cmd = b.llen().key("l").cache();
    assert!(cmd.is_readonly());
}
