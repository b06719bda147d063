//! Sorted set commands.

use bytes::Bytes;

use crate::core::builder::Builder;
use crate::core::command::CommandFlags;

states! {
    /// `ZADD`
    Zadd;
    /// `ZADD key`
    ZaddKey;
    /// `ZADD key NX|XX`
    ZaddCondition;
    /// `ZADD key ... GT|LT`
    ZaddComparison;
    /// `ZADD key ... CH`
    ZaddCh;
    /// `ZADD key ... INCR`
    ZaddIncr;
    /// `ZADD key ... (score member)...`
    ZaddScoreMember;
    /// `ZSCORE`
    Zscore;
    /// `ZSCORE key`
    ZscoreKey;
    /// `ZSCORE key member`
    ZscoreMember;
    /// `ZCARD`
    Zcard;
    /// `ZCARD key`
    ZcardKey;
    /// `ZRANGE`
    Zrange;
    /// `ZRANGE key`
    ZrangeKey;
    /// `ZRANGE key start`
    ZrangeStart;
    /// `ZRANGE key start stop`
    ZrangeStop;
    /// `ZRANGE ... BYSCORE|BYLEX`
    ZrangeSortby;
    /// `ZRANGE ... REV`
    ZrangeRev;
    /// `ZRANGE ... LIMIT offset count`
    ZrangeLimit;
    /// `ZRANGE ... WITHSCORES`
    ZrangeWithscores;
    /// `ZREM`
    Zrem;
    /// `ZREM key`
    ZremKey;
    /// `ZREM key member...`
    ZremMember;
    /// `BZPOPMIN`
    Bzpopmin;
    /// `BZPOPMIN key...`
    BzpopminKey;
    /// `BZPOPMIN key... timeout`
    BzpopminTimeout;
    /// `BZPOPMAX`
    Bzpopmax;
    /// `BZPOPMAX key...`
    BzpopmaxKey;
    /// `BZPOPMAX key... timeout`
    BzpopmaxTimeout;
}

impl Builder {
    /// Starts `ZADD key [NX|XX] [GT|LT] [CH] [INCR] (score member)...`.
    pub fn zadd(&self) -> Zadd {
        Zadd(self.start(CommandFlags::empty(), &["ZADD"]))
    }

    /// Starts `ZSCORE key member`.
    pub fn zscore(&self) -> Zscore {
        Zscore(self.start(CommandFlags::READONLY, &["ZSCORE"]))
    }

    /// Starts `ZCARD key`.
    pub fn zcard(&self) -> Zcard {
        Zcard(self.start(CommandFlags::READONLY, &["ZCARD"]))
    }

    /// Starts `ZRANGE key start stop [BYSCORE|BYLEX] [REV] [LIMIT offset count] [WITHSCORES]`.
    ///
    /// # Example
    ///
    /// ```
    /// use muxis_cmds::Builder;
    ///
    /// let b = Builder::default();
    /// let cmd = b
    ///     .zrange()
    ///     .key("board")
    ///     .start("(10")
    ///     .stop("+inf")
    ///     .byscore()
    ///     .limit(0, 20)
    ///     .withscores()
    ///     .cache();
    /// assert_eq!(
    ///     cmd.args(),
    ///     ["ZRANGE", "board", "(10", "+inf", "BYSCORE", "LIMIT", "0", "20", "WITHSCORES"]
    /// );
    /// ```
    pub fn zrange(&self) -> Zrange {
        Zrange(self.start(CommandFlags::READONLY, &["ZRANGE"]))
    }

    /// Starts `ZREM key member...`.
    pub fn zrem(&self) -> Zrem {
        Zrem(self.start(CommandFlags::empty(), &["ZREM"]))
    }

    /// Starts `BZPOPMIN key... timeout`.
    pub fn bzpopmin(&self) -> Bzpopmin {
        Bzpopmin(self.start(CommandFlags::BLOCK, &["BZPOPMIN"]))
    }

    /// Starts `BZPOPMAX key... timeout`.
    pub fn bzpopmax(&self) -> Bzpopmax {
        Bzpopmax(self.start(CommandFlags::BLOCK, &["BZPOPMAX"]))
    }
}

impl_steps! {
    [Zadd] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> ZaddKey { c.key(key) }
    }
}

impl_steps! {
    [ZaddKey] {
        /// Appends `NX`: only add new members.
        fn nx(c) -> ZaddCondition { c.arg("NX") }
        /// Appends `XX`: only update existing members.
        fn xx(c) -> ZaddCondition { c.arg("XX") }
    }
}

impl_steps! {
    [ZaddKey, ZaddCondition] {
        /// Appends `GT`: only update when the new score is greater.
        fn gt(c) -> ZaddComparison { c.arg("GT") }
        /// Appends `LT`: only update when the new score is less.
        fn lt(c) -> ZaddComparison { c.arg("LT") }
    }
}

impl_steps! {
    [ZaddKey, ZaddCondition, ZaddComparison] {
        /// Appends `CH`: count changed members, not only added ones.
        fn ch(c) -> ZaddCh { c.arg("CH") }
    }
}

impl_steps! {
    [ZaddKey, ZaddCondition, ZaddComparison, ZaddCh] {
        /// Appends `INCR`: behave like `ZINCRBY`.
        fn incr(c) -> ZaddIncr { c.arg("INCR") }
    }
}

impl_steps! {
    [ZaddKey, ZaddCondition, ZaddComparison, ZaddCh, ZaddIncr, ZaddScoreMember] {
        /// Appends one score and member; may repeat.
        fn score_member(c, score: f64, member: impl Into<Bytes>) -> ZaddScoreMember {
            c.float(score).arg(member)
        }
    }
}

impl_steps! {
    [Zscore] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> ZscoreKey { c.key(key) }
    }
}

impl_steps! {
    [ZscoreKey] {
        /// Appends the member.
        fn member(c, member: impl Into<Bytes>) -> ZscoreMember { c.arg(member) }
    }
}

impl_steps! {
    [Zcard] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> ZcardKey { c.key(key) }
    }
}

impl_steps! {
    [Zrange] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> ZrangeKey { c.key(key) }
    }
}

impl_steps! {
    [ZrangeKey] {
        /// Appends the start of the range: an index, a score such as `(1.5`
        /// or `-inf`, or a lex bound such as `[a`.
        fn start(c, start: impl Into<Bytes>) -> ZrangeStart { c.arg(start) }
    }
}

impl_steps! {
    [ZrangeStart] {
        /// Appends the end of the range.
        fn stop(c, stop: impl Into<Bytes>) -> ZrangeStop { c.arg(stop) }
    }
}

impl_steps! {
    [ZrangeStop] {
        /// Appends `BYSCORE`.
        fn byscore(c) -> ZrangeSortby { c.arg("BYSCORE") }
        /// Appends `BYLEX`.
        fn bylex(c) -> ZrangeSortby { c.arg("BYLEX") }
    }
}

impl_steps! {
    [ZrangeStop, ZrangeSortby] {
        /// Appends `REV`.
        fn rev(c) -> ZrangeRev { c.arg("REV") }
    }
}

impl_steps! {
    [ZrangeStop, ZrangeSortby, ZrangeRev] {
        /// Appends `LIMIT offset count`.
        fn limit(c, offset: i64, count: i64) -> ZrangeLimit {
            c.arg("LIMIT").int(offset).int(count)
        }
    }
}

impl_steps! {
    [ZrangeStop, ZrangeSortby, ZrangeRev, ZrangeLimit] {
        /// Appends `WITHSCORES`.
        fn withscores(c) -> ZrangeWithscores { c.arg("WITHSCORES") }
    }
}

impl_steps! {
    [Zrem] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> ZremKey { c.key(key) }
    }
}

impl_args!(member: ZremKey => ZremMember, ZremMember => ZremMember);

impl_keys!(
    Bzpopmin => BzpopminKey,
    BzpopminKey => BzpopminKey,
    Bzpopmax => BzpopmaxKey,
    BzpopmaxKey => BzpopmaxKey,
);

impl_steps! {
    [BzpopminKey] {
        /// Appends the timeout in seconds; `0` blocks forever.
        fn timeout(c, timeout: f64) -> BzpopminTimeout { c.float(timeout) }
    }
}

impl_steps! {
    [BzpopmaxKey] {
        /// Appends the timeout in seconds; `0` blocks forever.
        fn timeout(c, timeout: f64) -> BzpopmaxTimeout { c.float(timeout) }
    }
}

impl_build!(
    ZaddScoreMember,
    ZscoreMember,
    ZcardKey,
    ZrangeStop,
    ZrangeSortby,
    ZrangeRev,
    ZrangeLimit,
    ZrangeWithscores,
    ZremMember,
    BzpopminTimeout,
    BzpopmaxTimeout,
);

impl_cache!(
    ZscoreMember,
    ZcardKey,
    ZrangeStop,
    ZrangeSortby,
    ZrangeRev,
    ZrangeLimit,
    ZrangeWithscores,
);
