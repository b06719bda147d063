//! String commands.

use bytes::Bytes;

use crate::core::builder::Builder;
use crate::core::command::CommandFlags;

states! {
    /// `GET`
    Get;
    /// `GET key`
    GetKey;
    /// `SET`
    Set;
    /// `SET key`
    SetKey;
    /// `SET key value`
    SetValue;
    /// `SET key value NX|XX`
    SetCondition;
    /// `SET ... GET`
    SetGet;
    /// `SET ... EX|PX|EXAT|PXAT|KEEPTTL`
    SetExpiration;
    /// `MGET`
    Mget;
    /// `MGET key...`
    MgetKey;
    /// `MSET`
    Mset;
    /// `MSET (key value)...`
    MsetKeyValue;
    /// `INCR`
    Incr;
    /// `INCR key`
    IncrKey;
    /// `INCRBY`
    Incrby;
    /// `INCRBY key`
    IncrbyKey;
    /// `INCRBY key increment`
    IncrbyIncrement;
    /// `DECR`
    Decr;
    /// `DECR key`
    DecrKey;
    /// `DECRBY`
    Decrby;
    /// `DECRBY key`
    DecrbyKey;
    /// `DECRBY key decrement`
    DecrbyDecrement;
    /// `APPEND`
    Append;
    /// `APPEND key`
    AppendKey;
    /// `APPEND key value`
    AppendValue;
    /// `STRLEN`
    Strlen;
    /// `STRLEN key`
    StrlenKey;
    /// `GETDEL`
    Getdel;
    /// `GETDEL key`
    GetdelKey;
    /// `GETRANGE`
    Getrange;
    /// `GETRANGE key`
    GetrangeKey;
    /// `GETRANGE key start`
    GetrangeStart;
    /// `GETRANGE key start end`
    GetrangeEnd;
}

impl Builder {
    /// Starts `GET key`.
    pub fn get(&self) -> Get {
        Get(self.start(CommandFlags::READONLY, &["GET"]))
    }

    /// Starts `SET key value [NX|XX] [GET] [EX|PX|EXAT|PXAT|KEEPTTL]`.
    pub fn set(&self) -> Set {
        Set(self.start(CommandFlags::empty(), &["SET"]))
    }

    /// Starts `MGET key...`.
    pub fn mget(&self) -> Mget {
        Mget(self.start(CommandFlags::READONLY, &["MGET"]))
    }

    /// Starts `MSET (key value)...`.
    pub fn mset(&self) -> Mset {
        Mset(self.start(CommandFlags::empty(), &["MSET"]))
    }

    /// Starts `INCR key`.
    pub fn incr(&self) -> Incr {
        Incr(self.start(CommandFlags::empty(), &["INCR"]))
    }

    /// Starts `INCRBY key increment`.
    pub fn incrby(&self) -> Incrby {
        Incrby(self.start(CommandFlags::empty(), &["INCRBY"]))
    }

    /// Starts `DECR key`.
    pub fn decr(&self) -> Decr {
        Decr(self.start(CommandFlags::empty(), &["DECR"]))
    }

    /// Starts `DECRBY key decrement`.
    pub fn decrby(&self) -> Decrby {
        Decrby(self.start(CommandFlags::empty(), &["DECRBY"]))
    }

    /// Starts `APPEND key value`.
    pub fn append(&self) -> Append {
        Append(self.start(CommandFlags::empty(), &["APPEND"]))
    }

    /// Starts `STRLEN key`.
    pub fn strlen(&self) -> Strlen {
        Strlen(self.start(CommandFlags::READONLY, &["STRLEN"]))
    }

    /// Starts `GETDEL key`.
    pub fn getdel(&self) -> Getdel {
        Getdel(self.start(CommandFlags::empty(), &["GETDEL"]))
    }

    /// Starts `GETRANGE key start end`.
    pub fn getrange(&self) -> Getrange {
        Getrange(self.start(CommandFlags::READONLY, &["GETRANGE"]))
    }
}

impl_steps! {
    [Get] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> GetKey { c.key(key) }
    }
}

impl_steps! {
    [Set] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> SetKey { c.key(key) }
    }
}

impl_steps! {
    [SetKey] {
        /// Appends the value.
        fn value(c, value: impl Into<Bytes>) -> SetValue { c.arg(value) }
    }
}

impl_steps! {
    [SetValue] {
        /// Appends `NX`: only set if the key does not exist.
        fn nx(c) -> SetCondition { c.arg("NX") }
        /// Appends `XX`: only set if the key already exists.
        fn xx(c) -> SetCondition { c.arg("XX") }
    }
}

impl_steps! {
    [SetValue, SetCondition] {
        /// Appends `GET`: return the previous value.
        fn get(c) -> SetGet { c.arg("GET") }
    }
}

impl_steps! {
    [SetValue, SetCondition, SetGet] {
        /// Appends `EX seconds`.
        fn ex(c, seconds: i64) -> SetExpiration { c.arg("EX").int(seconds) }
        /// Appends `PX milliseconds`.
        fn px(c, milliseconds: i64) -> SetExpiration { c.arg("PX").int(milliseconds) }
        /// Appends `EXAT unix-time-seconds`.
        fn exat(c, timestamp: i64) -> SetExpiration { c.arg("EXAT").int(timestamp) }
        /// Appends `PXAT unix-time-milliseconds`.
        fn pxat(c, timestamp: i64) -> SetExpiration { c.arg("PXAT").int(timestamp) }
        /// Appends `KEEPTTL`.
        fn keepttl(c) -> SetExpiration { c.arg("KEEPTTL") }
    }
}

impl_keys!(Mget => MgetKey, MgetKey => MgetKey);

impl_steps! {
    [Mset, MsetKeyValue] {
        /// Appends one key and its value.
        fn key_value(c, key: impl Into<Bytes>, value: impl Into<Bytes>) -> MsetKeyValue {
            c.key(key).arg(value)
        }
    }
}

impl_steps! {
    [Incr] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> IncrKey { c.key(key) }
    }
}

impl_steps! {
    [Incrby] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> IncrbyKey { c.key(key) }
    }
}

impl_steps! {
    [IncrbyKey] {
        /// Appends the increment.
        fn increment(c, increment: i64) -> IncrbyIncrement { c.int(increment) }
    }
}

impl_steps! {
    [Decr] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> DecrKey { c.key(key) }
    }
}

impl_steps! {
    [Decrby] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> DecrbyKey { c.key(key) }
    }
}

impl_steps! {
    [DecrbyKey] {
        /// Appends the decrement.
        fn decrement(c, decrement: i64) -> DecrbyDecrement { c.int(decrement) }
    }
}

impl_steps! {
    [Append] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> AppendKey { c.key(key) }
    }
}

impl_steps! {
    [AppendKey] {
        /// Appends the value to concatenate.
        fn value(c, value: impl Into<Bytes>) -> AppendValue { c.arg(value) }
    }
}

impl_steps! {
    [Strlen] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> StrlenKey { c.key(key) }
    }
}

impl_steps! {
    [Getdel] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> GetdelKey { c.key(key) }
    }
}

impl_steps! {
    [Getrange] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> GetrangeKey { c.key(key) }
    }
}

impl_steps! {
    [GetrangeKey] {
        /// Appends the start offset.
        fn start(c, start: i64) -> GetrangeStart { c.int(start) }
    }
}

impl_steps! {
    [GetrangeStart] {
        /// Appends the inclusive end offset.
        fn end(c, end: i64) -> GetrangeEnd { c.int(end) }
    }
}

impl_build!(
    GetKey,
    SetValue,
    SetCondition,
    SetGet,
    SetExpiration,
    MgetKey,
    MsetKeyValue,
    IncrKey,
    IncrbyIncrement,
    DecrKey,
    DecrbyDecrement,
    AppendValue,
    StrlenKey,
    GetdelKey,
    GetrangeEnd,
);

impl_cache!(GetKey, MgetKey, StrlenKey, GetrangeEnd);
