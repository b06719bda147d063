//! Stream commands.
//!
//! Requires the `streams` feature.

use bytes::Bytes;

use crate::core::builder::Builder;
use crate::core::command::CommandFlags;

states! {
    /// `XADD`
    Xadd;
    /// `XADD key`
    XaddKey;
    /// `XADD key NOMKSTREAM`
    XaddNomkstream;
    /// `XADD ... MAXLEN|MINID`
    XaddTrimStrategy;
    /// `XADD ... MAXLEN|MINID =|~`
    XaddTrimOperator;
    /// `XADD ... MAXLEN|MINID [=|~] threshold`
    XaddTrimThreshold;
    /// `XADD ... LIMIT count`
    XaddTrimLimit;
    /// `XADD ... *|id`
    XaddId;
    /// `XADD ... (field value)...`
    XaddFieldValue;
    /// `XLEN`
    Xlen;
    /// `XLEN key`
    XlenKey;
    /// `XRANGE`
    Xrange;
    /// `XRANGE key`
    XrangeKey;
    /// `XRANGE key start`
    XrangeStart;
    /// `XRANGE key start end`
    XrangeEnd;
    /// `XRANGE key start end COUNT count`
    XrangeCount;
    /// `XREAD`
    Xread;
    /// `XREAD COUNT count`
    XreadCount;
    /// `XREAD ... BLOCK milliseconds`
    XreadBlock;
    /// `XREAD ... STREAMS`
    XreadStreams;
    /// `XREAD ... STREAMS key...`
    XreadKey;
    /// `XREAD ... STREAMS key... id...`
    XreadId;
}

impl Builder {
    /// Starts `XADD key [NOMKSTREAM] [MAXLEN|MINID [=|~] threshold [LIMIT count]] *|id (field value)...`.
    ///
    /// # Example
    ///
    /// ```
    /// use muxis_cmds::Builder;
    ///
    /// let b = Builder::default();
    /// let cmd = b
    ///     .xadd()
    ///     .key("events")
    ///     .maxlen()
    ///     .approx()
    ///     .threshold("1000")
    ///     .auto_id()
    ///     .field_value("kind", "click")
    ///     .build();
    /// assert_eq!(
    ///     cmd.args(),
    ///     ["XADD", "events", "MAXLEN", "~", "1000", "*", "kind", "click"]
    /// );
    /// ```
    pub fn xadd(&self) -> Xadd {
        Xadd(self.start(CommandFlags::empty(), &["XADD"]))
    }

    /// Starts `XLEN key`.
    pub fn xlen(&self) -> Xlen {
        Xlen(self.start(CommandFlags::READONLY, &["XLEN"]))
    }

    /// Starts `XRANGE key start end [COUNT count]`.
    pub fn xrange(&self) -> Xrange {
        Xrange(self.start(CommandFlags::READONLY, &["XRANGE"]))
    }

    /// Starts `XREAD [COUNT count] [BLOCK milliseconds] STREAMS key... id...`.
    ///
    /// Choosing `BLOCK` marks the command as blocking.
    pub fn xread(&self) -> Xread {
        Xread(self.start(CommandFlags::READONLY, &["XREAD"]))
    }
}

impl_steps! {
    [Xadd] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> XaddKey { c.key(key) }
    }
}

impl_steps! {
    [XaddKey] {
        /// Appends `NOMKSTREAM`: do not create a missing stream.
        fn nomkstream(c) -> XaddNomkstream { c.arg("NOMKSTREAM") }
    }
}

impl_steps! {
    [XaddKey, XaddNomkstream] {
        /// Appends `MAXLEN`.
        fn maxlen(c) -> XaddTrimStrategy { c.arg("MAXLEN") }
        /// Appends `MINID`.
        fn minid(c) -> XaddTrimStrategy { c.arg("MINID") }
    }
}

impl_steps! {
    [XaddTrimStrategy] {
        /// Appends `=`.
        fn exact(c) -> XaddTrimOperator { c.arg("=") }
        /// Appends `~`.
        fn approx(c) -> XaddTrimOperator { c.arg("~") }
    }
}

impl_steps! {
    [XaddTrimStrategy, XaddTrimOperator] {
        /// Appends the trim threshold: a length for `MAXLEN`, an id for `MINID`.
        fn threshold(c, threshold: impl Into<Bytes>) -> XaddTrimThreshold { c.arg(threshold) }
    }
}

impl_steps! {
    [XaddTrimThreshold] {
        /// Appends `LIMIT count`.
        fn limit(c, count: i64) -> XaddTrimLimit { c.arg("LIMIT").int(count) }
    }
}

impl_steps! {
    [XaddKey, XaddNomkstream, XaddTrimThreshold, XaddTrimLimit] {
        /// Appends `*`: let the server assign the entry id.
        fn auto_id(c) -> XaddId { c.arg("*") }
        /// Appends an explicit entry id.
        fn id(c, id: impl Into<Bytes>) -> XaddId { c.arg(id) }
    }
}

impl_steps! {
    [XaddId, XaddFieldValue] {
        /// Appends one field and its value; may repeat.
        fn field_value(c, field: impl Into<Bytes>, value: impl Into<Bytes>) -> XaddFieldValue {
            c.arg(field).arg(value)
        }
    }
}

impl_steps! {
    [Xlen] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> XlenKey { c.key(key) }
    }
}

impl_steps! {
    [Xrange] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> XrangeKey { c.key(key) }
    }
}

impl_steps! {
    [XrangeKey] {
        /// Appends the start id, or `-` for the beginning.
        fn start(c, start: impl Into<Bytes>) -> XrangeStart { c.arg(start) }
    }
}

impl_steps! {
    [XrangeStart] {
        /// Appends the end id, or `+` for the end.
        fn end(c, end: impl Into<Bytes>) -> XrangeEnd { c.arg(end) }
    }
}

impl_steps! {
    [XrangeEnd] {
        /// Appends `COUNT count`.
        fn count(c, count: i64) -> XrangeCount { c.arg("COUNT").int(count) }
    }
}

impl_steps! {
    [Xread] {
        /// Appends `COUNT count`.
        fn count(c, count: i64) -> XreadCount { c.arg("COUNT").int(count) }
    }
}

impl_steps! {
    [Xread, XreadCount] {
        /// Appends `BLOCK milliseconds` and marks the command as blocking.
        fn block(c, milliseconds: i64) -> XreadBlock {
            c.flag(CommandFlags::BLOCK).arg("BLOCK").int(milliseconds)
        }
    }
}

impl_steps! {
    [Xread, XreadCount, XreadBlock] {
        /// Appends `STREAMS`.
        fn streams(c) -> XreadStreams { c.arg("STREAMS") }
    }
}

impl_keys!(XreadStreams => XreadKey, XreadKey => XreadKey);

impl_args!(id: XreadKey => XreadId, XreadId => XreadId);

impl_build!(
    XaddFieldValue,
    XlenKey,
    XrangeEnd,
    XrangeCount,
    XreadId,
);
