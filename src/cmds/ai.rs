//! RedisAI model and tensor reads.

use bytes::Bytes;

use crate::core::builder::Builder;
use crate::core::command::CommandFlags;

states! {
    /// `AI.MODELGET`
    AiModelget;
    /// `AI.MODELGET key`
    AiModelgetKey;
    /// `AI.MODELGET key META`
    AiModelgetMeta;
    /// `AI.MODELGET key [META] BLOB`
    AiModelgetBlob;
    /// `AI.TENSORGET`
    AiTensorget;
    /// `AI.TENSORGET key`
    AiTensorgetKey;
    /// `AI.TENSORGET key META`
    AiTensorgetMeta;
    /// `AI.TENSORGET key [META] BLOB|VALUES`
    AiTensorgetFormat;
}

impl Builder {
    /// Starts `AI.MODELGET key [META] [BLOB]`.
    pub fn ai_modelget(&self) -> AiModelget {
        AiModelget(self.start(CommandFlags::READONLY, &["AI.MODELGET"]))
    }

    /// Starts `AI.TENSORGET key [META] [BLOB|VALUES]`.
    pub fn ai_tensorget(&self) -> AiTensorget {
        AiTensorget(self.start(CommandFlags::READONLY, &["AI.TENSORGET"]))
    }
}

impl_steps! {
    [AiModelget] {
        /// Appends the model key.
        fn key(c, key: impl Into<Bytes>) -> AiModelgetKey { c.key(key) }
    }
}

impl_steps! {
    [AiModelgetKey] {
        /// Appends `META`.
        fn meta(c) -> AiModelgetMeta { c.arg("META") }
    }
}

impl_steps! {
    [AiModelgetKey, AiModelgetMeta] {
        /// Appends `BLOB`.
        fn blob(c) -> AiModelgetBlob { c.arg("BLOB") }
    }
}

impl_steps! {
    [AiTensorget] {
        /// Appends the tensor key.
        fn key(c, key: impl Into<Bytes>) -> AiTensorgetKey { c.key(key) }
    }
}

impl_steps! {
    [AiTensorgetKey] {
        /// Appends `META`.
        fn meta(c) -> AiTensorgetMeta { c.arg("META") }
    }
}

impl_steps! {
    [AiTensorgetKey, AiTensorgetMeta] {
        /// Appends `BLOB`.
        fn blob(c) -> AiTensorgetFormat { c.arg("BLOB") }
        /// Appends `VALUES`.
        fn values(c) -> AiTensorgetFormat { c.arg("VALUES") }
    }
}

impl_build!(
    AiModelgetKey,
    AiModelgetMeta,
    AiModelgetBlob,
    AiTensorgetKey,
    AiTensorgetMeta,
    AiTensorgetFormat,
);

impl_cache!(
    AiModelgetKey,
    AiModelgetMeta,
    AiModelgetBlob,
    AiTensorgetKey,
    AiTensorgetMeta,
    AiTensorgetFormat,
);

#[cfg(test)]
mod tests {
    use crate::cluster::slot::KeySlot;
    use crate::cmds::test_builder;

    #[test]
    fn test_modelget_meta_blob() {
        let cmd = test_builder().ai_modelget().key("mymodel").meta().blob().cache();
        assert_eq!(cmd.args(), ["AI.MODELGET", "mymodel", "META", "BLOB"]);
        assert!(cmd.is_readonly());
        assert_eq!(cmd.slot(), KeySlot::of("mymodel"));
    }

    #[test]
    fn test_modelget_optional_tokens() {
        let b = test_builder();
        assert_eq!(
            b.ai_modelget().key("m").build().args(),
            ["AI.MODELGET", "m"]
        );
        assert_eq!(
            b.ai_modelget().key("m").blob().build().args(),
            ["AI.MODELGET", "m", "BLOB"]
        );
        assert!(b.ai_modelget().key("m").meta().build().is_readonly());
    }

    #[test]
    fn test_tensorget() {
        let b = test_builder();
        let cmd = b.ai_tensorget().key("t").meta().values().cache();
        assert_eq!(cmd.args(), ["AI.TENSORGET", "t", "META", "VALUES"]);
        assert!(cmd.is_readonly());

        let cmd = b.ai_tensorget().key("t").blob().build();
        assert_eq!(cmd.args(), ["AI.TENSORGET", "t", "BLOB"]);
    }
}
