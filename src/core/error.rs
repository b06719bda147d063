use thiserror::Error;

/// Result type alias for muxis-cmds operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or recycling commands.
///
/// Every variant except [`Error::Json`] describes a programmer error. Those
/// are never returned; they abort the calling thread through a panic whose
/// message is the variant's `Display` text, so the strings below are stable.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A terminal step was invoked on an already sealed command.
    #[error("a command should not be built twice")]
    BuiltTwice,

    /// A command reached the transport without being sealed.
    #[error("a command should be finished by calling Build() or Cache()")]
    Unfinished,

    /// An argument was appended to a sealed command.
    #[error("a command should not be modified after it is built")]
    AppendAfterBuild,

    /// A sealed command was handed back to its pool more than once.
    #[error("a command should not be released twice")]
    ReleasedTwice,

    /// `Arbitrary` was built without a command verb.
    #[error("Arbitrary should be provided with redis command")]
    ArbitraryNoCommand,

    /// `Arbitrary` was used for a pub/sub command.
    #[error("Arbitrary does not support SUBSCRIBE/UNSUBSCRIBE")]
    ArbitrarySubscribe,

    /// `Arbitrary::multi_get` was used with a verb other than `MGET`/`JSON.MGET`.
    #[error("Arbitrary.MultiGet is only valid for MGET and JSON.MGET")]
    ArbitraryMultiGet,

    /// A value could not be serialized into a RedisJSON argument.
    #[cfg(feature = "json")]
    #[error("json encode error: {source}")]
    Json {
        /// The underlying serializer error.
        #[from]
        source: serde_json::Error,
    },
}

/// Aborts on API misuse.
///
/// Misuse indicates a bug in the caller's code path rather than a runtime
/// condition, so there is no recovery.
#[cold]
#[track_caller]
pub(crate) fn misuse(err: Error) -> ! {
    tracing::error!(error = %err, "command builder misuse");
    panic!("{err}")
}
