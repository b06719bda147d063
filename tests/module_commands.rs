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
fn test_bloom_fixtures() {
    let b = builder();

    assert_fixture(b.bf_add().key("bf").item("x").build(), &["BF.ADD", "bf", "x"]);
    assert_fixture(
        b.bf_exists().key("bf").item("x").build(),
        &["BF.EXISTS", "bf", "x"],
    );
    assert_fixture(b.cf_add().key("cf").item("x").build(), &["CF.ADD", "cf", "x"]);
    assert_fixture(
        b.cf_addnx().key("cf").item("x").build(),
        &["CF.ADDNX", "cf", "x"],
    );
    assert_fixture(
        b.cf_exists().key("cf").item("x").build(),
        &["CF.EXISTS", "cf", "x"],
    );
    assert_fixture(
        b.cf_insert().key("cf").nocreate().items().item(["x", "y"]).build(),
        &["CF.INSERT", "cf", "NOCREATE", "ITEMS", "x", "y"],
    );
}

#[test]
fn test_ai_fixtures() {
    let b = builder();

    assert_fixture(
        b.ai_modelget().key("m").meta().build(),
        &["AI.MODELGET", "m", "META"],
    );
    assert_fixture(
        b.ai_tensorget().key("t").meta().blob().build(),
        &["AI.TENSORGET", "t", "META", "BLOB"],
    );
    assert_fixture(
        b.ai_tensorget().key("t").values().build(),
        &["AI.TENSORGET", "t", "VALUES"],
    );
}

#[test]
fn test_module_reads_cacheable() {
    let b = builder();
    for cmd in [
        b.bf_exists().key("k").item("i").cache(),
        b.cf_exists().key("k").item("i").cache(),
        b.ai_modelget().key("k").blob().cache(),
        b.ai_tensorget().key("k").cache(),
    ] {
        assert!(cmd.is_readonly());
        assert_eq!(cmd.slot().get(), Some(key_slot("k")));
        cmd.release();
    }
}

#[cfg(feature = "json")]
mod json {
    use super::*;

    #[test]
    fn test_json_fixtures() {
        let b = builder();

        assert_fixture(
            b.json_get().key("d").path(["$"]).build(),
            &["JSON.GET", "d", "$"],
        );
        assert_fixture(
            b.json_set()
                .key("d")
                .path("$.n")
                .value_json(&42)
                .unwrap()
                .build(),
            &["JSON.SET", "d", "$.n", "42"],
        );
        assert_fixture(
            b.json_mget().key(["a", "b"]).path("$").build(),
            &["JSON.MGET", "a", "b", "$"],
        );
    }

    #[test]
    fn test_json_mget_via_arbitrary_multi_get() {
        let cmd = builder()
            .arbitrary(["JSON.MGET"])
            .keys(["{d}1", "{d}2"])
            .args(["$"])
            .multi_get();
        assert!(cmd.is_mget());
        assert_eq!(cmd.slot().get(), Some(key_slot("d")));
    }
}

#[cfg(feature = "streams")]
mod streams {
    use super::*;

    #[test]
    fn test_stream_fixtures() {
        let b = builder();

        assert_fixture(
            b.xadd().key("s").auto_id().field_value("f", "v").build(),
            &["XADD", "s", "*", "f", "v"],
        );
        assert_fixture(b.xlen().key("s").build(), &["XLEN", "s"]);
        assert_fixture(
            b.xrange().key("s").start("-").end("+").build(),
            &["XRANGE", "s", "-", "+"],
        );
        assert_fixture(
            b.xread().count(1).block(500).streams().key(["s"]).id(["$"]).build(),
            &["XREAD", "COUNT", "1", "BLOCK", "500", "STREAMS", "s", "$"],
        );
    }

    #[test]
    fn test_xread_block_flag() {
        let b = builder();
        assert!(b.xread().block(0).streams().key(["s"]).id(["0"]).build().is_block());
        assert!(!b.xread().streams().key(["s"]).id(["0"]).build().is_block());
    }
}
