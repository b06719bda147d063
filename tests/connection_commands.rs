use muxis_cmds::cmds::connection::ClientKind;
use muxis_cmds::{Builder, CommandFlags, CommandPool, Completed, KeySlot, PoolConfig};

fn builder() -> Builder {
    Builder::with_pool(CommandPool::new(PoolConfig::default()), KeySlot::NO_SLOT)
}

fn assert_fixture(cmd: Completed, expected: &[&str]) {
    assert_eq!(cmd.args(), expected);
    assert!(cmd.slot().is_no_slot());
    cmd.verify();
    cmd.release();
}

#[test]
fn test_connection_fixtures() {
    let b = builder();

    assert_fixture(b.auth().password("pw").build(), &["AUTH", "pw"]);
    assert_fixture(b.ping().build(), &["PING"]);
    assert_fixture(b.echo().message("m").build(), &["ECHO", "m"]);
    assert_fixture(b.select().index(0).build(), &["SELECT", "0"]);
    assert_fixture(b.client_caching().yes().build(), &["CLIENT", "CACHING", "YES"]);
    assert_fixture(b.client_getname().build(), &["CLIENT", "GETNAME"]);
    assert_fixture(b.client_id().build(), &["CLIENT", "ID"]);
    assert_fixture(b.client_info().build(), &["CLIENT", "INFO"]);
    assert_fixture(
        b.client_setname().name("app").build(),
        &["CLIENT", "SETNAME", "app"],
    );
    assert_fixture(
        b.client_kill().user("bob").build(),
        &["CLIENT", "KILL", "USER", "bob"],
    );
    assert_fixture(
        b.client_pause().timeout(50).all().build(),
        &["CLIENT", "PAUSE", "50", "ALL"],
    );
    assert_fixture(b.client_unpause().build(), &["CLIENT", "UNPAUSE"]);
    assert_fixture(
        b.client_tracking().off().build(),
        &["CLIENT", "TRACKING", "OFF"],
    );
    assert_fixture(b.client_trackinginfo().build(), &["CLIENT", "TRACKINGINFO"]);
}

#[test]
fn test_client_kill_not_type() {
    let cmd = builder()
        .client_kill()
        .id(3)
        .not_kind(ClientKind::Master)
        .laddr("127.0.0.1:6379")
        .build();
    assert_eq!(
        cmd.args(),
        ["CLIENT", "KILL", "ID", "3", "NOT-TYPE", "MASTER", "LADDR", "127.0.0.1:6379"]
    );
}

#[test]
fn test_opt_in_pairs_with_cached_read() {
    let b = builder();
    let opt_in = b.client_caching().yes().build();
    let read = b.get().key("k").cache();

    assert_eq!(opt_in.flags(), CommandFlags::OPT_IN);
    assert!(opt_in.is_write());
    assert!(read.is_readonly());
}

#[test]
fn test_client_pause_is_blocking() {
    let cmd = builder().client_pause().timeout(10).build();
    assert_eq!(cmd.flags(), CommandFlags::BLOCK);
}
