use muxis_cmds::{Builder, CommandPool, KeySlot, PoolConfig};

fn builder() -> Builder {
    Builder::with_pool(CommandPool::new(PoolConfig::default()), KeySlot::NO_SLOT)
}

#[test]
fn test_topology_commands() {
    let b = builder();
    for (cmd, sub) in [
        (b.cluster_slots().build(), "SLOTS"),
        (b.cluster_nodes().build(), "NODES"),
        (b.cluster_info().build(), "INFO"),
        (b.cluster_shards().build(), "SHARDS"),
    ] {
        assert_eq!(cmd.args(), ["CLUSTER", sub]);
        assert!(cmd.slot().is_no_slot());
        cmd.release();
    }
}

#[test]
fn test_keyslot_key_is_an_argument() {
    let cmd = builder().cluster_keyslot().key("{user}1").build();
    assert_eq!(cmd.args(), ["CLUSTER", "KEYSLOT", "{user}1"]);
    assert!(cmd.slot().is_no_slot());
}

#[test]
fn test_asking_then_routed_command() {
    let b = builder();
    let asking = b.asking().build();
    let get = b.get().key("k").build();

    assert_eq!(asking.args(), ["ASKING"]);
    assert!(asking.slot().is_no_slot());
    assert_eq!(get.slot(), KeySlot::of("k"));
}
