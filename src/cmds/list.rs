//! List commands.

use bytes::Bytes;

use crate::core::builder::Builder;
use crate::core::command::CommandFlags;

states! {
    /// `LPUSH`
    Lpush;
    /// `LPUSH key`
    LpushKey;
    /// `LPUSH key element...`
    LpushElement;
    /// `RPUSH`
    Rpush;
    /// `RPUSH key`
    RpushKey;
    /// `RPUSH key element...`
    RpushElement;
    /// `LPOP`
    Lpop;
    /// `LPOP key`
    LpopKey;
    /// `LPOP key count`
    LpopCount;
    /// `RPOP`
    Rpop;
    /// `RPOP key`
    RpopKey;
    /// `RPOP key count`
    RpopCount;
    /// `LRANGE`
    Lrange;
    /// `LRANGE key`
    LrangeKey;
    /// `LRANGE key start`
    LrangeStart;
    /// `LRANGE key start stop`
    LrangeStop;
    /// `LLEN`
    Llen;
    /// `LLEN key`
    LlenKey;
    /// `BLPOP`
    Blpop;
    /// `BLPOP key...`
    BlpopKey;
    /// `BLPOP key... timeout`
    BlpopTimeout;
    /// `BRPOP`
    Brpop;
    /// `BRPOP key...`
    BrpopKey;
    /// `BRPOP key... timeout`
    BrpopTimeout;
}

impl Builder {
    /// Starts `LPUSH key element...`.
    pub fn lpush(&self) -> Lpush {
        Lpush(self.start(CommandFlags::empty(), &["LPUSH"]))
    }

    /// Starts `RPUSH key element...`.
    pub fn rpush(&self) -> Rpush {
        Rpush(self.start(CommandFlags::empty(), &["RPUSH"]))
    }

    /// Starts `LPOP key [count]`.
    pub fn lpop(&self) -> Lpop {
        Lpop(self.start(CommandFlags::empty(), &["LPOP"]))
    }

    /// Starts `RPOP key [count]`.
    pub fn rpop(&self) -> Rpop {
        Rpop(self.start(CommandFlags::empty(), &["RPOP"]))
    }

    /// Starts `LRANGE key start stop`.
    pub fn lrange(&self) -> Lrange {
        Lrange(self.start(CommandFlags::READONLY, &["LRANGE"]))
    }

    /// Starts `LLEN key`.
    pub fn llen(&self) -> Llen {
        Llen(self.start(CommandFlags::READONLY, &["LLEN"]))
    }

    /// Starts `BLPOP key... timeout`.
    pub fn blpop(&self) -> Blpop {
        Blpop(self.start(CommandFlags::BLOCK, &["BLPOP"]))
    }

    /// Starts `BRPOP key... timeout`.
    pub fn brpop(&self) -> Brpop {
        Brpop(self.start(CommandFlags::BLOCK, &["BRPOP"]))
    }
}

impl_steps! {
    [Lpush] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> LpushKey { c.key(key) }
    }
}

impl_args!(element: LpushKey => LpushElement, LpushElement => LpushElement);

impl_steps! {
    [Rpush] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> RpushKey { c.key(key) }
    }
}

impl_args!(element: RpushKey => RpushElement, RpushElement => RpushElement);

impl_steps! {
    [Lpop] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> LpopKey { c.key(key) }
    }
}

impl_steps! {
    [LpopKey] {
        /// Appends how many elements to pop.
        fn count(c, count: i64) -> LpopCount { c.int(count) }
    }
}

impl_steps! {
    [Rpop] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> RpopKey { c.key(key) }
    }
}

impl_steps! {
    [RpopKey] {
        /// Appends how many elements to pop.
        fn count(c, count: i64) -> RpopCount { c.int(count) }
    }
}

impl_steps! {
    [Lrange] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> LrangeKey { c.key(key) }
    }
}

impl_steps! {
    [LrangeKey] {
        /// Appends the start index.
        fn start(c, start: i64) -> LrangeStart { c.int(start) }
    }
}

impl_steps! {
    [LrangeStart] {
        /// Appends the inclusive stop index.
        fn stop(c, stop: i64) -> LrangeStop { c.int(stop) }
    }
}

impl_steps! {
    [Llen] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> LlenKey { c.key(key) }
    }
}

impl_keys!(Blpop => BlpopKey, BlpopKey => BlpopKey, Brpop => BrpopKey, BrpopKey => BrpopKey);

impl_steps! {
    [BlpopKey] {
        /// Appends the timeout in seconds; `0` blocks forever.
        fn timeout(c, timeout: f64) -> BlpopTimeout { c.float(timeout) }
    }
}

impl_steps! {
    [BrpopKey] {
        /// Appends the timeout in seconds; `0` blocks forever.
        fn timeout(c, timeout: f64) -> BrpopTimeout { c.float(timeout) }
    }
}

impl_build!(
    LpushElement,
    RpushElement,
    LpopKey,
    LpopCount,
    RpopKey,
    RpopCount,
    LrangeStop,
    LlenKey,
    BlpopTimeout,
    BrpopTimeout,
);

impl_cache!(LrangeStop, LlenKey);
