//! RedisTimeSeries commands.
//!
//! `TS.RANGE` and `TS.REVRANGE` share their grammar states; only the verb
//! differs.

use bytes::Bytes;

use crate::core::builder::Builder;
use crate::core::command::CommandFlags;

/// Chunk encoding of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Gorilla/delta-of-delta compressed chunks.
    Compressed,
    /// Raw samples.
    Uncompressed,
}

impl Encoding {
    /// The wire token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Encoding::Compressed => "COMPRESSED",
            Encoding::Uncompressed => "UNCOMPRESSED",
        }
    }
}

/// How a sample with an existing timestamp is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// Reject the new sample.
    Block,
    /// Keep the existing sample.
    First,
    /// Overwrite with the new sample.
    Last,
    /// Keep the lower value.
    Min,
    /// Keep the higher value.
    Max,
    /// Add the new value to the existing one.
    Sum,
}

impl DuplicatePolicy {
    /// The wire token.
    pub const fn as_str(self) -> &'static str {
        match self {
            DuplicatePolicy::Block => "BLOCK",
            DuplicatePolicy::First => "FIRST",
            DuplicatePolicy::Last => "LAST",
            DuplicatePolicy::Min => "MIN",
            DuplicatePolicy::Max => "MAX",
            DuplicatePolicy::Sum => "SUM",
        }
    }
}

/// Bucket aggregation functions of `TS.RANGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregator {
    /// Arithmetic mean.
    Avg,
    /// Sum of values.
    Sum,
    /// Minimum value.
    Min,
    /// Maximum value.
    Max,
    /// Difference between maximum and minimum.
    Range,
    /// Number of samples.
    Count,
    /// Earliest value.
    First,
    /// Latest value.
    Last,
    /// Population standard deviation.
    StdP,
    /// Sample standard deviation.
    StdS,
    /// Population variance.
    VarP,
    /// Sample variance.
    VarS,
    /// Time-weighted average.
    Twa,
}

impl Aggregator {
    /// The wire token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Aggregator::Avg => "AVG",
            Aggregator::Sum => "SUM",
            Aggregator::Min => "MIN",
            Aggregator::Max => "MAX",
            Aggregator::Range => "RANGE",
            Aggregator::Count => "COUNT",
            Aggregator::First => "FIRST",
            Aggregator::Last => "LAST",
            Aggregator::StdP => "STD.P",
            Aggregator::StdS => "STD.S",
            Aggregator::VarP => "VAR.P",
            Aggregator::VarS => "VAR.S",
            Aggregator::Twa => "TWA",
        }
    }
}

states! {
    /// `TS.CREATE`
    TsCreate;
    /// `TS.CREATE key`
    TsCreateKey;
    /// `TS.CREATE key RETENTION period`
    TsCreateRetention;
    /// `TS.CREATE key ... ENCODING enc`
    TsCreateEncoding;
    /// `TS.CREATE key ... CHUNK_SIZE size`
    TsCreateChunkSize;
    /// `TS.CREATE key ... DUPLICATE_POLICY policy`
    TsCreateDuplicatePolicy;
    /// `TS.CREATE key ... LABELS (label value)...`
    TsCreateLabels;
    /// `TS.ADD`
    TsAdd;
    /// `TS.ADD key`
    TsAddKey;
    /// `TS.ADD key timestamp`
    TsAddTimestamp;
    /// `TS.ADD key timestamp value`
    TsAddValue;
    /// `TS.ADD ... RETENTION period`
    TsAddRetention;
    /// `TS.ADD ... ENCODING enc`
    TsAddEncoding;
    /// `TS.ADD ... CHUNK_SIZE size`
    TsAddChunkSize;
    /// `TS.ADD ... ON_DUPLICATE policy`
    TsAddOnDuplicate;
    /// `TS.ADD ... LABELS (label value)...`
    TsAddLabels;
    /// `TS.INCRBY`
    TsIncrby;
    /// `TS.DECRBY`
    TsDecrby;
    /// `TS.INCRBY|TS.DECRBY key`
    TsIncrbyKey;
    /// `TS.INCRBY|TS.DECRBY key value`
    TsIncrbyValue;
    /// `TS.INCRBY|TS.DECRBY ... TIMESTAMP timestamp`
    TsIncrbyTimestamp;
    /// `TS.INCRBY|TS.DECRBY ... RETENTION period`
    TsIncrbyRetention;
    /// `TS.INCRBY|TS.DECRBY ... UNCOMPRESSED`
    TsIncrbyUncompressed;
    /// `TS.INCRBY|TS.DECRBY ... CHUNK_SIZE size`
    TsIncrbyChunkSize;
    /// `TS.INCRBY|TS.DECRBY ... LABELS (label value)...`
    TsIncrbyLabels;
    /// `TS.MADD`
    TsMadd;
    /// `TS.MADD (key timestamp value)...`
    TsMaddKeyTimestampValue;
    /// `TS.DEL`
    TsDel;
    /// `TS.DEL key`
    TsDelKey;
    /// `TS.DEL key from`
    TsDelFrom;
    /// `TS.DEL key from to`
    TsDelTo;
    /// `TS.GET`
    TsGet;
    /// `TS.GET key`
    TsGetKey;
    /// `TS.GET key LATEST`
    TsGetLatest;
    /// `TS.INFO`
    TsInfo;
    /// `TS.INFO key`
    TsInfoKey;
    /// `TS.INFO key DEBUG`
    TsInfoDebug;
    /// `TS.RANGE|TS.REVRANGE`
    TsRange;
    /// `TS.RANGE|TS.REVRANGE key`
    TsRangeKey;
    /// `TS.RANGE|TS.REVRANGE key from`
    TsRangeFrom;
    /// `TS.RANGE|TS.REVRANGE key from to`
    TsRangeTo;
    /// `TS.RANGE ... LATEST`
    TsRangeLatest;
    /// `TS.RANGE ... FILTER_BY_TS timestamp...`
    TsRangeFilterByTs;
    /// `TS.RANGE ... FILTER_BY_VALUE min max`
    TsRangeFilterByValue;
    /// `TS.RANGE ... COUNT count`
    TsRangeCount;
    /// `TS.RANGE ... ALIGN align`
    TsRangeAlign;
    /// `TS.RANGE ... AGGREGATION aggregator bucket`
    TsRangeAggregation;
    /// `TS.RANGE ... AGGREGATION ... BUCKETTIMESTAMP bt`
    TsRangeBucketTimestamp;
    /// `TS.RANGE ... AGGREGATION ... EMPTY`
    TsRangeEmpty;
    /// `TS.QUERYINDEX`
    TsQueryindex;
    /// `TS.QUERYINDEX filter...`
    TsQueryindexFilter;
}

impl Builder {
    /// Starts `TS.CREATE key [RETENTION period] [ENCODING enc] [CHUNK_SIZE size]
    /// [DUPLICATE_POLICY policy] [LABELS (label value)...]`.
    pub fn ts_create(&self) -> TsCreate {
        TsCreate(self.start(CommandFlags::empty(), &["TS.CREATE"]))
    }

    /// Starts `TS.ADD key timestamp value [RETENTION period] [ENCODING enc]
    /// [CHUNK_SIZE size] [ON_DUPLICATE policy] [LABELS (label value)...]`.
    pub fn ts_add(&self) -> TsAdd {
        TsAdd(self.start(CommandFlags::empty(), &["TS.ADD"]))
    }

    /// Starts `TS.INCRBY key value [TIMESTAMP ts] [RETENTION period]
    /// [UNCOMPRESSED] [CHUNK_SIZE size] [LABELS (label value)...]`.
    pub fn ts_incrby(&self) -> TsIncrby {
        TsIncrby(self.start(CommandFlags::empty(), &["TS.INCRBY"]))
    }

    /// Starts `TS.DECRBY`, with the same options as `TS.INCRBY`.
    pub fn ts_decrby(&self) -> TsDecrby {
        TsDecrby(self.start(CommandFlags::empty(), &["TS.DECRBY"]))
    }

    /// Starts `TS.MADD (key timestamp value)...`.
    pub fn ts_madd(&self) -> TsMadd {
        TsMadd(self.start(CommandFlags::empty(), &["TS.MADD"]))
    }

    /// Starts `TS.DEL key from to`.
    pub fn ts_del(&self) -> TsDel {
        TsDel(self.start(CommandFlags::empty(), &["TS.DEL"]))
    }

    /// Starts `TS.GET key [LATEST]`.
    pub fn ts_get(&self) -> TsGet {
        TsGet(self.start(CommandFlags::READONLY, &["TS.GET"]))
    }

    /// Starts `TS.INFO key [DEBUG]`.
    pub fn ts_info(&self) -> TsInfo {
        TsInfo(self.start(CommandFlags::READONLY, &["TS.INFO"]))
    }

    /// Starts `TS.RANGE key from to [LATEST] [FILTER_BY_TS ts...]
    /// [FILTER_BY_VALUE min max] [COUNT count] [ALIGN align]
    /// [AGGREGATION aggregator bucket [BUCKETTIMESTAMP bt] [EMPTY]]`.
    ///
    /// # Example
    ///
    /// ```
    /// use muxis_cmds::cmds::timeseries::Aggregator;
    /// use muxis_cmds::Builder;
    ///
    /// let b = Builder::default();
    /// let cmd = b
    ///     .ts_range()
    ///     .key("temp:3")
    ///     .from_timestamp("-")
    ///     .to_timestamp("+")
    ///     .count(100)
    ///     .aggregation(Aggregator::Avg, 60_000)
    ///     .build();
    /// assert_eq!(
    ///     cmd.args(),
    ///     ["TS.RANGE", "temp:3", "-", "+", "COUNT", "100", "AGGREGATION", "AVG", "60000"]
    /// );
    /// assert!(cmd.is_readonly());
    /// ```
    pub fn ts_range(&self) -> TsRange {
        TsRange(self.start(CommandFlags::READONLY, &["TS.RANGE"]))
    }

    /// Starts `TS.REVRANGE`, with the same options as `TS.RANGE`.
    pub fn ts_revrange(&self) -> TsRange {
        TsRange(self.start(CommandFlags::READONLY, &["TS.REVRANGE"]))
    }

    /// Starts `TS.QUERYINDEX filter...`.
    pub fn ts_queryindex(&self) -> TsQueryindex {
        TsQueryindex(self.start(CommandFlags::READONLY, &["TS.QUERYINDEX"]))
    }
}

// TS.CREATE

impl_steps! {
    [TsCreate] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> TsCreateKey { c.key(key) }
    }
}

impl_steps! {
    [TsCreateKey] {
        /// Appends `RETENTION period` in milliseconds.
        fn retention(c, period: i64) -> TsCreateRetention { c.arg("RETENTION").int(period) }
    }
}

impl_steps! {
    [TsCreateKey, TsCreateRetention] {
        /// Appends `ENCODING enc`.
        fn encoding(c, encoding: Encoding) -> TsCreateEncoding {
            c.args(["ENCODING", encoding.as_str()])
        }
    }
}

impl_steps! {
    [TsCreateKey, TsCreateRetention, TsCreateEncoding] {
        /// Appends `CHUNK_SIZE size` in bytes.
        fn chunk_size(c, size: i64) -> TsCreateChunkSize { c.arg("CHUNK_SIZE").int(size) }
    }
}

impl_steps! {
    [TsCreateKey, TsCreateRetention, TsCreateEncoding, TsCreateChunkSize] {
        /// Appends `DUPLICATE_POLICY policy`.
        fn duplicate_policy(c, policy: DuplicatePolicy) -> TsCreateDuplicatePolicy {
            c.args(["DUPLICATE_POLICY", policy.as_str()])
        }
    }
}

impl_steps! {
    [
        TsCreateKey,
        TsCreateRetention,
        TsCreateEncoding,
        TsCreateChunkSize,
        TsCreateDuplicatePolicy,
    ] {
        /// Appends `LABELS label value`; further pairs follow with `label`.
        fn labels(c, label: impl Into<Bytes>, value: impl Into<Bytes>) -> TsCreateLabels {
            c.arg("LABELS").arg(label).arg(value)
        }
    }
}

impl_steps! {
    [TsCreateLabels] {
        /// Appends another label pair.
        fn label(c, label: impl Into<Bytes>, value: impl Into<Bytes>) -> TsCreateLabels {
            c.arg(label).arg(value)
        }
    }
}

// TS.ADD

impl_steps! {
    [TsAdd] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> TsAddKey { c.key(key) }
    }
}

impl_steps! {
    [TsAddKey] {
        /// Appends the timestamp in milliseconds, or `*` for the server time.
        fn timestamp(c, timestamp: impl Into<Bytes>) -> TsAddTimestamp { c.arg(timestamp) }
    }
}

impl_steps! {
    [TsAddTimestamp] {
        /// Appends the sample value.
        fn value(c, value: f64) -> TsAddValue { c.float(value) }
    }
}

impl_steps! {
    [TsAddValue] {
        /// Appends `RETENTION period` in milliseconds.
        fn retention(c, period: i64) -> TsAddRetention { c.arg("RETENTION").int(period) }
    }
}

impl_steps! {
    [TsAddValue, TsAddRetention] {
        /// Appends `ENCODING enc`.
        fn encoding(c, encoding: Encoding) -> TsAddEncoding {
            c.args(["ENCODING", encoding.as_str()])
        }
    }
}

impl_steps! {
    [TsAddValue, TsAddRetention, TsAddEncoding] {
        /// Appends `CHUNK_SIZE size` in bytes.
        fn chunk_size(c, size: i64) -> TsAddChunkSize { c.arg("CHUNK_SIZE").int(size) }
    }
}

impl_steps! {
    [TsAddValue, TsAddRetention, TsAddEncoding, TsAddChunkSize] {
        /// Appends `ON_DUPLICATE policy`.
        fn on_duplicate(c, policy: DuplicatePolicy) -> TsAddOnDuplicate {
            c.args(["ON_DUPLICATE", policy.as_str()])
        }
    }
}

impl_steps! {
    [TsAddValue, TsAddRetention, TsAddEncoding, TsAddChunkSize, TsAddOnDuplicate] {
        /// Appends `LABELS label value`; further pairs follow with `label`.
        fn labels(c, label: impl Into<Bytes>, value: impl Into<Bytes>) -> TsAddLabels {
            c.arg("LABELS").arg(label).arg(value)
        }
    }
}

impl_steps! {
    [TsAddLabels] {
        /// Appends another label pair.
        fn label(c, label: impl Into<Bytes>, value: impl Into<Bytes>) -> TsAddLabels {
            c.arg(label).arg(value)
        }
    }
}

// TS.INCRBY / TS.DECRBY

impl_steps! {
    [TsIncrby, TsDecrby] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> TsIncrbyKey { c.key(key) }
    }
}

impl_steps! {
    [TsIncrbyKey] {
        /// Appends the delta.
        fn value(c, value: f64) -> TsIncrbyValue { c.float(value) }
    }
}

impl_steps! {
    [TsIncrbyValue] {
        /// Appends `TIMESTAMP timestamp`, or `*` for the server time.
        fn timestamp(c, timestamp: impl Into<Bytes>) -> TsIncrbyTimestamp {
            c.arg("TIMESTAMP").arg(timestamp)
        }
    }
}

impl_steps! {
    [TsIncrbyValue, TsIncrbyTimestamp] {
        /// Appends `RETENTION period` in milliseconds.
        fn retention(c, period: i64) -> TsIncrbyRetention { c.arg("RETENTION").int(period) }
    }
}

impl_steps! {
    [TsIncrbyValue, TsIncrbyTimestamp, TsIncrbyRetention] {
        /// Appends `UNCOMPRESSED`.
        fn uncompressed(c) -> TsIncrbyUncompressed { c.arg("UNCOMPRESSED") }
    }
}

impl_steps! {
    [TsIncrbyValue, TsIncrbyTimestamp, TsIncrbyRetention, TsIncrbyUncompressed] {
        /// Appends `CHUNK_SIZE size` in bytes.
        fn chunk_size(c, size: i64) -> TsIncrbyChunkSize { c.arg("CHUNK_SIZE").int(size) }
    }
}

impl_steps! {
    [
        TsIncrbyValue,
        TsIncrbyTimestamp,
        TsIncrbyRetention,
        TsIncrbyUncompressed,
        TsIncrbyChunkSize,
    ] {
        /// Appends `LABELS label value`; further pairs follow with `label`.
        fn labels(c, label: impl Into<Bytes>, value: impl Into<Bytes>) -> TsIncrbyLabels {
            c.arg("LABELS").arg(label).arg(value)
        }
    }
}

impl_steps! {
    [TsIncrbyLabels] {
        /// Appends another label pair.
        fn label(c, label: impl Into<Bytes>, value: impl Into<Bytes>) -> TsIncrbyLabels {
            c.arg(label).arg(value)
        }
    }
}

// TS.MADD

impl_steps! {
    [TsMadd, TsMaddKeyTimestampValue] {
        /// Appends one sample; may repeat. Each key is folded into the slot
        /// context.
        fn key_timestamp_value(c, key: impl Into<Bytes>, timestamp: i64, value: f64) -> TsMaddKeyTimestampValue {
            c.key(key).int(timestamp).float(value)
        }
    }
}

// TS.DEL

impl_steps! {
    [TsDel] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> TsDelKey { c.key(key) }
    }
}

impl_steps! {
    [TsDelKey] {
        /// Appends the first timestamp to delete, inclusive.
        fn from_timestamp(c, timestamp: i64) -> TsDelFrom { c.int(timestamp) }
    }
}

impl_steps! {
    [TsDelFrom] {
        /// Appends the last timestamp to delete, inclusive.
        fn to_timestamp(c, timestamp: i64) -> TsDelTo { c.int(timestamp) }
    }
}

// TS.GET / TS.INFO

impl_steps! {
    [TsGet] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> TsGetKey { c.key(key) }
    }
}

impl_steps! {
    [TsGetKey] {
        /// Appends `LATEST`: include the still-open bucket of a compaction.
        fn latest(c) -> TsGetLatest { c.arg("LATEST") }
    }
}

impl_steps! {
    [TsInfo] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> TsInfoKey { c.key(key) }
    }
}

impl_steps! {
    [TsInfoKey] {
        /// Appends `DEBUG`.
        fn debug(c) -> TsInfoDebug { c.arg("DEBUG") }
    }
}

// TS.RANGE / TS.REVRANGE

impl_steps! {
    [TsRange] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> TsRangeKey { c.key(key) }
    }
}

impl_steps! {
    [TsRangeKey] {
        /// Appends the start timestamp, or `-` for the earliest sample.
        fn from_timestamp(c, timestamp: impl Into<Bytes>) -> TsRangeFrom { c.arg(timestamp) }
    }
}

impl_steps! {
    [TsRangeFrom] {
        /// Appends the end timestamp, or `+` for the latest sample.
        fn to_timestamp(c, timestamp: impl Into<Bytes>) -> TsRangeTo { c.arg(timestamp) }
    }
}

impl_steps! {
    [TsRangeTo] {
        /// Appends `LATEST`.
        fn latest(c) -> TsRangeLatest { c.arg("LATEST") }
    }
}

macro_rules! impl_filter_by_ts {
    ($($from:ident),+) => {
        $(
            impl $from {
                /// Appends `FILTER_BY_TS timestamp...`.
                pub fn filter_by_ts<I>(self, timestamps: I) -> TsRangeFilterByTs
                where
                    I: IntoIterator<Item = i64>,
                {
                    let mut c = self.0.arg("FILTER_BY_TS");
                    for ts in timestamps {
                        c = c.int(ts);
                    }
                    TsRangeFilterByTs(c)
                }
            }
        )+
    };
}

impl_filter_by_ts!(TsRangeTo, TsRangeLatest);

impl_steps! {
    [TsRangeTo, TsRangeLatest, TsRangeFilterByTs] {
        /// Appends `FILTER_BY_VALUE min max`.
        fn filter_by_value(c, min: f64, max: f64) -> TsRangeFilterByValue {
            c.arg("FILTER_BY_VALUE").float(min).float(max)
        }
    }
}

impl_steps! {
    [TsRangeTo, TsRangeLatest, TsRangeFilterByTs, TsRangeFilterByValue] {
        /// Appends `COUNT count`.
        fn count(c, count: i64) -> TsRangeCount { c.arg("COUNT").int(count) }
    }
}

impl_steps! {
    [TsRangeTo, TsRangeLatest, TsRangeFilterByTs, TsRangeFilterByValue, TsRangeCount] {
        /// Appends `ALIGN align`: `start`, `end`, `-`, `+` or a timestamp.
        fn align(c, align: impl Into<Bytes>) -> TsRangeAlign { c.arg("ALIGN").arg(align) }
    }
}

impl_steps! {
    [
        TsRangeTo,
        TsRangeLatest,
        TsRangeFilterByTs,
        TsRangeFilterByValue,
        TsRangeCount,
        TsRangeAlign,
    ] {
        /// Appends `AGGREGATION aggregator bucket` with the bucket duration in
        /// milliseconds.
        fn aggregation(c, aggregator: Aggregator, bucket: i64) -> TsRangeAggregation {
            c.args(["AGGREGATION", aggregator.as_str()]).int(bucket)
        }
    }
}

impl_steps! {
    [TsRangeAggregation] {
        /// Appends `BUCKETTIMESTAMP bt`: `-`, `+` or `~`.
        fn bucket_timestamp(c, bt: impl Into<Bytes>) -> TsRangeBucketTimestamp {
            c.arg("BUCKETTIMESTAMP").arg(bt)
        }
    }
}

impl_steps! {
    [TsRangeAggregation, TsRangeBucketTimestamp] {
        /// Appends `EMPTY`: report empty buckets.
        fn empty(c) -> TsRangeEmpty { c.arg("EMPTY") }
    }
}

// TS.QUERYINDEX

impl_args!(filter: TsQueryindex => TsQueryindexFilter, TsQueryindexFilter => TsQueryindexFilter);

impl_build!(
    TsCreateKey,
    TsCreateRetention,
    TsCreateEncoding,
    TsCreateChunkSize,
    TsCreateDuplicatePolicy,
    TsCreateLabels,
    TsAddValue,
    TsAddRetention,
    TsAddEncoding,
    TsAddChunkSize,
    TsAddOnDuplicate,
    TsAddLabels,
    TsIncrbyValue,
    TsIncrbyTimestamp,
    TsIncrbyRetention,
    TsIncrbyUncompressed,
    TsIncrbyChunkSize,
    TsIncrbyLabels,
    TsMaddKeyTimestampValue,
    TsDelTo,
    TsGetKey,
    TsGetLatest,
    TsInfoKey,
    TsInfoDebug,
    TsRangeTo,
    TsRangeLatest,
    TsRangeFilterByTs,
    TsRangeFilterByValue,
    TsRangeCount,
    TsRangeAlign,
    TsRangeAggregation,
    TsRangeBucketTimestamp,
    TsRangeEmpty,
    TsQueryindexFilter,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::slot::{key_slot, KeySlot};
    use crate::cmds::test_builder;

    #[test]
    fn test_ts_create_full() {
        let cmd = test_builder()
            .ts_create()
            .key("temp:1")
            .retention(86_400_000)
            .encoding(Encoding::Uncompressed)
            .chunk_size(4096)
            .duplicate_policy(DuplicatePolicy::Last)
            .labels("sensor", "1")
            .label("area", "north")
            .build();
        assert_eq!(
            cmd.args(),
            [
                "TS.CREATE", "temp:1", "RETENTION", "86400000", "ENCODING", "UNCOMPRESSED",
                "CHUNK_SIZE", "4096", "DUPLICATE_POLICY", "LAST", "LABELS", "sensor", "1",
                "area", "north",
            ]
        );
        assert_eq!(cmd.slot(), KeySlot::of("temp:1"));
        assert!(cmd.is_write());
    }

    #[test]
    fn test_ts_add() {
        let b = test_builder();
        let cmd = b.ts_add().key("temp:1").timestamp("*").value(21.5).build();
        assert_eq!(cmd.args(), ["TS.ADD", "temp:1", "*", "21.5"]);

        let cmd = b
            .ts_add()
            .key("temp:1")
            .timestamp("1700000000000")
            .value(3.0)
            .on_duplicate(DuplicatePolicy::Sum)
            .build();
        assert_eq!(
            cmd.args(),
            ["TS.ADD", "temp:1", "1700000000000", "3", "ON_DUPLICATE", "SUM"]
        );
    }

    #[test]
    fn test_ts_incrby_decrby() {
        let b = test_builder();
        let cmd = b.ts_incrby().key("hits").value(1.0).timestamp("*").uncompressed().build();
        assert_eq!(cmd.args(), ["TS.INCRBY", "hits", "1", "TIMESTAMP", "*", "UNCOMPRESSED"]);

        let cmd = b.ts_decrby().key("hits").value(2.5).build();
        assert_eq!(cmd.args(), ["TS.DECRBY", "hits", "2.5"]);
    }

    #[test]
    fn test_ts_madd_observes_every_key() {
        let b = test_builder();
        let cmd = b
            .ts_madd()
            .key_timestamp_value("{s}a", 1, 1.5)
            .key_timestamp_value("{s}b", 2, 2.0)
            .build();
        assert_eq!(cmd.args(), ["TS.MADD", "{s}a", "1", "1.5", "{s}b", "2", "2"]);
        assert_eq!(cmd.slot().get(), Some(key_slot("s")));

        let cmd = b
            .ts_madd()
            .key_timestamp_value("a", 1, 1.0)
            .key_timestamp_value("b", 1, 1.0)
            .build();
        assert!(cmd.slot().is_cross_slot());
    }

    #[test]
    fn test_ts_del() {
        let cmd = test_builder().ts_del().key("temp:1").from_timestamp(0).to_timestamp(1000).build();
        assert_eq!(cmd.args(), ["TS.DEL", "temp:1", "0", "1000"]);
        assert!(cmd.is_write());
    }

    #[test]
    fn test_ts_get_and_info_are_readonly() {
        let b = test_builder();
        let cmd = b.ts_get().key("temp:1").latest().build();
        assert_eq!(cmd.args(), ["TS.GET", "temp:1", "LATEST"]);
        assert!(cmd.is_readonly());

        let cmd = b.ts_info().key("temp:1").debug().build();
        assert_eq!(cmd.args(), ["TS.INFO", "temp:1", "DEBUG"]);
        assert!(cmd.is_readonly());
    }

    #[test]
    fn test_ts_revrange_with_filters() {
        let cmd = test_builder()
            .ts_revrange()
            .key("temp:1")
            .from_timestamp("-")
            .to_timestamp("+")
            .latest()
            .filter_by_ts([10, 20])
            .filter_by_value(-1.5, 40.0)
            .align("start")
            .aggregation(Aggregator::StdP, 1000)
            .bucket_timestamp("~")
            .empty()
            .build();
        assert_eq!(
            cmd.args(),
            [
                "TS.REVRANGE", "temp:1", "-", "+", "LATEST", "FILTER_BY_TS", "10", "20",
                "FILTER_BY_VALUE", "-1.5", "40", "ALIGN", "start", "AGGREGATION", "STD.P",
                "1000", "BUCKETTIMESTAMP", "~", "EMPTY",
            ]
        );
        assert!(cmd.is_readonly());
    }

    #[test]
    fn test_ts_queryindex_has_no_slot() {
        let cmd = test_builder()
            .ts_queryindex()
            .filter(["sensor=1"])
            .filter(["area=(north,south)"])
            .build();
        assert_eq!(cmd.args(), ["TS.QUERYINDEX", "sensor=1", "area=(north,south)"]);
        assert!(cmd.slot().is_no_slot());
        assert!(cmd.is_readonly());
    }
}
