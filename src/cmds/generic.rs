//! Keyspace commands that apply to every value type.

use bytes::Bytes;

use crate::core::builder::Builder;
use crate::core::command::CommandFlags;

states! {
    /// `DEL`
    Del;
    /// `DEL key...`
    DelKey;
    /// `EXISTS`
    Exists;
    /// `EXISTS key...`
    ExistsKey;
    /// `EXPIRE`
    Expire;
    /// `EXPIRE key`
    ExpireKey;
    /// `EXPIRE key seconds`
    ExpireSeconds;
    /// `EXPIRE key seconds NX|XX|GT|LT`
    ExpireCondition;
    /// `TTL`
    Ttl;
    /// `TTL key`
    TtlKey;
    /// `PTTL`
    Pttl;
    /// `PTTL key`
    PttlKey;
    /// `TYPE`
    Type;
    /// `TYPE key`
    TypeKey;
    /// `PERSIST`
    Persist;
    /// `PERSIST key`
    PersistKey;
    /// `RENAME`
    Rename;
    /// `RENAME key`
    RenameKey;
    /// `RENAME key newkey`
    RenameNewkey;
    /// `SCAN`
    Scan;
    /// `SCAN cursor`
    ScanCursor;
    /// `SCAN cursor MATCH pattern`
    ScanMatch;
    /// `SCAN ... COUNT count`
    ScanCount;
    /// `SCAN ... TYPE type`
    ScanType;
    /// `KEYS`
    Keys;
    /// `KEYS pattern`
    KeysPattern;
    /// `WAIT`
    Wait;
    /// `WAIT numreplicas`
    WaitNumreplicas;
    /// `WAIT numreplicas timeout`
    WaitTimeout;
}

impl Builder {
    /// Starts `DEL key...`.
    pub fn del(&self) -> Del {
        Del(self.start(CommandFlags::empty(), &["DEL"]))
    }

    /// Starts `EXISTS key...`.
    pub fn exists(&self) -> Exists {
        Exists(self.start(CommandFlags::READONLY, &["EXISTS"]))
    }

    /// Starts `EXPIRE key seconds [NX|XX|GT|LT]`.
    pub fn expire(&self) -> Expire {
        Expire(self.start(CommandFlags::empty(), &["EXPIRE"]))
    }

    /// Starts `TTL key`.
    pub fn ttl(&self) -> Ttl {
        Ttl(self.start(CommandFlags::READONLY, &["TTL"]))
    }

    /// Starts `PTTL key`.
    pub fn pttl(&self) -> Pttl {
        Pttl(self.start(CommandFlags::READONLY, &["PTTL"]))
    }

    /// Starts `TYPE key`.
    pub fn key_type(&self) -> Type {
        Type(self.start(CommandFlags::READONLY, &["TYPE"]))
    }

    /// Starts `PERSIST key`.
    pub fn persist(&self) -> Persist {
        Persist(self.start(CommandFlags::empty(), &["PERSIST"]))
    }

    /// Starts `RENAME key newkey`.
    pub fn rename(&self) -> Rename {
        Rename(self.start(CommandFlags::empty(), &["RENAME"]))
    }

    /// Starts `SCAN cursor [MATCH pattern] [COUNT count] [TYPE type]`.
    ///
    /// `SCAN` walks a single node's keyspace and carries no slot.
    pub fn scan(&self) -> Scan {
        Scan(self.start(CommandFlags::READONLY, &["SCAN"]))
    }

    /// Starts `KEYS pattern`.
    pub fn keys(&self) -> Keys {
        Keys(self.start(CommandFlags::READONLY, &["KEYS"]))
    }

    /// Starts `WAIT numreplicas timeout`.
    pub fn wait(&self) -> Wait {
        Wait(self.start(CommandFlags::BLOCK, &["WAIT"]))
    }
}

impl_keys!(Del => DelKey, DelKey => DelKey, Exists => ExistsKey, ExistsKey => ExistsKey);

impl_steps! {
    [Expire] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> ExpireKey { c.key(key) }
    }
}

impl_steps! {
    [ExpireKey] {
        /// Appends the time to live in seconds.
        fn seconds(c, seconds: i64) -> ExpireSeconds { c.int(seconds) }
    }
}

impl_steps! {
    [ExpireSeconds] {
        /// Appends `NX`: only when the key has no expiry.
        fn nx(c) -> ExpireCondition { c.arg("NX") }
        /// Appends `XX`: only when the key already has an expiry.
        fn xx(c) -> ExpireCondition { c.arg("XX") }
        /// Appends `GT`: only when the new expiry is later.
        fn gt(c) -> ExpireCondition { c.arg("GT") }
        /// Appends `LT`: only when the new expiry is sooner.
        fn lt(c) -> ExpireCondition { c.arg("LT") }
    }
}

impl_steps! {
    [Ttl] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> TtlKey { c.key(key) }
    }
}

impl_steps! {
    [Pttl] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> PttlKey { c.key(key) }
    }
}

impl_steps! {
    [Type] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> TypeKey { c.key(key) }
    }
}

impl_steps! {
    [Persist] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> PersistKey { c.key(key) }
    }
}

impl_steps! {
    [Rename] {
        /// Appends the source key.
        fn key(c, key: impl Into<Bytes>) -> RenameKey { c.key(key) }
    }
}

impl_steps! {
    [RenameKey] {
        /// Appends the destination key.
        fn newkey(c, newkey: impl Into<Bytes>) -> RenameNewkey { c.key(newkey) }
    }
}

impl_steps! {
    [Scan] {
        /// Appends the cursor; `0` starts a new iteration.
        fn cursor(c, cursor: u64) -> ScanCursor { c.uint(cursor) }
    }
}

impl_steps! {
    [ScanCursor] {
        /// Appends `MATCH pattern`.
        fn pattern(c, pattern: impl Into<Bytes>) -> ScanMatch { c.arg("MATCH").arg(pattern) }
    }
}

impl_steps! {
    [ScanCursor, ScanMatch] {
        /// Appends `COUNT count`.
        fn count(c, count: i64) -> ScanCount { c.arg("COUNT").int(count) }
    }
}

impl_steps! {
    [ScanCursor, ScanMatch, ScanCount] {
        /// Appends `TYPE type`.
        fn key_type(c, key_type: impl Into<Bytes>) -> ScanType { c.arg("TYPE").arg(key_type) }
    }
}

impl_steps! {
    [Keys] {
        /// Appends the glob pattern.
        fn pattern(c, pattern: impl Into<Bytes>) -> KeysPattern { c.arg(pattern) }
    }
}

impl_steps! {
    [Wait] {
        /// Appends the number of replicas to wait for.
        fn numreplicas(c, numreplicas: i64) -> WaitNumreplicas { c.int(numreplicas) }
    }
}

impl_steps! {
    [WaitNumreplicas] {
        /// Appends the timeout in milliseconds; `0` waits forever.
        fn timeout(c, timeout: i64) -> WaitTimeout { c.int(timeout) }
    }
}

impl_build!(
    DelKey,
    ExistsKey,
    ExpireSeconds,
    ExpireCondition,
    TtlKey,
    PttlKey,
    TypeKey,
    PersistKey,
    RenameNewkey,
    ScanCursor,
    ScanMatch,
    ScanCount,
    ScanType,
    KeysPattern,
    WaitTimeout,
);

impl_cache!(TtlKey, PttlKey, TypeKey);
