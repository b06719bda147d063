//! RedisJSON commands.
//!
//! Requires the `json` feature.

use bytes::Bytes;
use serde::Serialize;

use crate::core::builder::Builder;
use crate::core::command::CommandFlags;
use crate::core::error::Result;

states! {
    /// `JSON.GET`
    JsonGet;
    /// `JSON.GET key`
    JsonGetKey;
    /// `JSON.GET key path...`
    JsonGetPath;
    /// `JSON.SET`
    JsonSet;
    /// `JSON.SET key`
    JsonSetKey;
    /// `JSON.SET key path`
    JsonSetPath;
    /// `JSON.SET key path value`
    JsonSetValue;
    /// `JSON.SET key path value NX|XX`
    JsonSetCondition;
    /// `JSON.MGET`
    JsonMget;
    /// `JSON.MGET key...`
    JsonMgetKey;
    /// `JSON.MGET key... path`
    JsonMgetPath;
}

impl Builder {
    /// Starts `JSON.GET key [path...]`.
    pub fn json_get(&self) -> JsonGet {
        JsonGet(self.start(CommandFlags::READONLY, &["JSON.GET"]))
    }

    /// Starts `JSON.SET key path value [NX|XX]`.
    ///
    /// # Example
    ///
    /// ```
    /// use muxis_cmds::Builder;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Profile {
    ///     name: &'static str,
    ///     age: u32,
    /// }
    ///
    /// let b = Builder::default();
    /// let cmd = b
    ///     .json_set()
    ///     .key("user:1")
    ///     .path("$")
    ///     .value_json(&Profile { name: "ada", age: 36 })?
    ///     .nx()
    ///     .build();
    /// assert_eq!(
    ///     cmd.args(),
    ///     ["JSON.SET", "user:1", "$", r#"{"name":"ada","age":36}"#, "NX"]
    /// );
    /// # Ok::<(), muxis_cmds::Error>(())
    /// ```
    pub fn json_set(&self) -> JsonSet {
        JsonSet(self.start(CommandFlags::empty(), &["JSON.SET"]))
    }

    /// Starts `JSON.MGET key... path`.
    pub fn json_mget(&self) -> JsonMget {
        JsonMget(self.start(CommandFlags::READONLY, &["JSON.MGET"]))
    }
}

impl_steps! {
    [JsonGet] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> JsonGetKey { c.key(key) }
    }
}

impl_args!(path: JsonGetKey => JsonGetPath, JsonGetPath => JsonGetPath);

impl_steps! {
    [JsonSet] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> JsonSetKey { c.key(key) }
    }
}

impl_steps! {
    [JsonSetKey] {
        /// Appends the JSONPath to write at.
        fn path(c, path: impl Into<Bytes>) -> JsonSetPath { c.arg(path) }
    }
}

impl_steps! {
    [JsonSetPath] {
        /// Appends an already encoded JSON document.
        fn value(c, value: impl Into<Bytes>) -> JsonSetValue { c.arg(value) }
    }
}

impl JsonSetPath {
    /// Serializes `value` to JSON and appends it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if `value` cannot be
    /// serialized. The command buffer goes back to the pool.
    pub fn value_json<T>(self, value: &T) -> Result<JsonSetValue>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_vec(value) {
            Ok(encoded) => Ok(JsonSetValue(self.0.arg(encoded))),
            Err(err) => {
                self.0.discard();
                Err(err.into())
            }
        }
    }
}

impl_steps! {
    [JsonSetValue] {
        /// Appends `NX`: only set when the path does not exist.
        fn nx(c) -> JsonSetCondition { c.arg("NX") }
        /// Appends `XX`: only set when the path already exists.
        fn xx(c) -> JsonSetCondition { c.arg("XX") }
    }
}

impl_keys!(JsonMget => JsonMgetKey, JsonMgetKey => JsonMgetKey);

impl_steps! {
    [JsonMgetKey] {
        /// Appends the JSONPath read from every key.
        fn path(c, path: impl Into<Bytes>) -> JsonMgetPath { c.arg(path) }
    }
}

impl_build!(JsonGetKey, JsonGetPath, JsonSetValue, JsonSetCondition, JsonMgetPath);

impl_cache!(JsonGetKey, JsonGetPath, JsonMgetPath);
