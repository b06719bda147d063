//! Hash commands.

use bytes::Bytes;

use crate::core::builder::Builder;
use crate::core::command::CommandFlags;

states! {
    /// `HSET`
    Hset;
    /// `HSET key`
    HsetKey;
    /// `HSET key (field value)...`
    HsetFieldValue;
    /// `HGET`
    Hget;
    /// `HGET key`
    HgetKey;
    /// `HGET key field`
    HgetField;
    /// `HMGET`
    Hmget;
    /// `HMGET key`
    HmgetKey;
    /// `HMGET key field...`
    HmgetField;
    /// `HGETALL`
    Hgetall;
    /// `HGETALL key`
    HgetallKey;
    /// `HEXISTS`
    Hexists;
    /// `HEXISTS key`
    HexistsKey;
    /// `HEXISTS key field`
    HexistsField;
    /// `HLEN`
    Hlen;
    /// `HLEN key`
    HlenKey;
    /// `HDEL`
    Hdel;
    /// `HDEL key`
    HdelKey;
    /// `HDEL key field...`
    HdelField;
    /// `HINCRBY`
    Hincrby;
    /// `HINCRBY key`
    HincrbyKey;
    /// `HINCRBY key field`
    HincrbyField;
    /// `HINCRBY key field increment`
    HincrbyIncrement;
}

impl Builder {
    /// Starts `HSET key (field value)...`.
    pub fn hset(&self) -> Hset {
        Hset(self.start(CommandFlags::empty(), &["HSET"]))
    }

    /// Starts `HGET key field`.
    pub fn hget(&self) -> Hget {
        Hget(self.start(CommandFlags::READONLY, &["HGET"]))
    }

    /// Starts `HMGET key field...`.
    pub fn hmget(&self) -> Hmget {
        Hmget(self.start(CommandFlags::READONLY, &["HMGET"]))
    }

    /// Starts `HGETALL key`.
    pub fn hgetall(&self) -> Hgetall {
        Hgetall(self.start(CommandFlags::READONLY, &["HGETALL"]))
    }

    /// Starts `HEXISTS key field`.
    pub fn hexists(&self) -> Hexists {
        Hexists(self.start(CommandFlags::READONLY, &["HEXISTS"]))
    }

    /// Starts `HLEN key`.
    pub fn hlen(&self) -> Hlen {
        Hlen(self.start(CommandFlags::READONLY, &["HLEN"]))
    }

    /// Starts `HDEL key field...`.
    pub fn hdel(&self) -> Hdel {
        Hdel(self.start(CommandFlags::empty(), &["HDEL"]))
    }

    /// Starts `HINCRBY key field increment`.
    pub fn hincrby(&self) -> Hincrby {
        Hincrby(self.start(CommandFlags::empty(), &["HINCRBY"]))
    }
}

impl_steps! {
    [Hset] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> HsetKey { c.key(key) }
    }
}

impl_steps! {
    [HsetKey, HsetFieldValue] {
        /// Appends one field and its value.
        fn field_value(c, field: impl Into<Bytes>, value: impl Into<Bytes>) -> HsetFieldValue {
            c.arg(field).arg(value)
        }
    }
}

impl_steps! {
    [Hget] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> HgetKey { c.key(key) }
    }
}

impl_steps! {
    [HgetKey] {
        /// Appends the field.
        fn field(c, field: impl Into<Bytes>) -> HgetField { c.arg(field) }
    }
}

impl_steps! {
    [Hmget] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> HmgetKey { c.key(key) }
    }
}

impl_args!(field: HmgetKey => HmgetField, HmgetField => HmgetField);

impl_steps! {
    [Hgetall] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> HgetallKey { c.key(key) }
    }
}

impl_steps! {
    [Hexists] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> HexistsKey { c.key(key) }
    }
}

impl_steps! {
    [HexistsKey] {
        /// Appends the field.
        fn field(c, field: impl Into<Bytes>) -> HexistsField { c.arg(field) }
    }
}

impl_steps! {
    [Hlen] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> HlenKey { c.key(key) }
    }
}

impl_steps! {
    [Hdel] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> HdelKey { c.key(key) }
    }
}

impl_args!(field: HdelKey => HdelField, HdelField => HdelField);

impl_steps! {
    [Hincrby] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> HincrbyKey { c.key(key) }
    }
}

impl_steps! {
    [HincrbyKey] {
        /// Appends the field.
        fn field(c, field: impl Into<Bytes>) -> HincrbyField { c.arg(field) }
    }
}

impl_steps! {
    [HincrbyField] {
        /// Appends the increment.
        fn increment(c, increment: i64) -> HincrbyIncrement { c.int(increment) }
    }
}

impl_build!(
    HsetFieldValue,
    HgetField,
    HmgetField,
    HgetallKey,
    HexistsField,
    HlenKey,
    HdelField,
    HincrbyIncrement,
);

impl_cache!(HgetField, HmgetField, HgetallKey, HexistsField, HlenKey);
