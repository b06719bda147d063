//! RedisBloom Bloom and Cuckoo filter commands.

use bytes::Bytes;

use crate::core::builder::Builder;
use crate::core::command::CommandFlags;

states! {
    /// `BF.ADD`
    BfAdd;
    /// `BF.ADD key`
    BfAddKey;
    /// `BF.ADD key item`
    BfAddItem;
    /// `BF.EXISTS`
    BfExists;
    /// `BF.EXISTS key`
    BfExistsKey;
    /// `BF.EXISTS key item`
    BfExistsItem;
    /// `CF.ADD`
    CfAdd;
    /// `CF.ADD key`
    CfAddKey;
    /// `CF.ADD key item`
    CfAddItem;
    /// `CF.ADDNX`
    CfAddnx;
    /// `CF.ADDNX key`
    CfAddnxKey;
    /// `CF.ADDNX key item`
    CfAddnxItem;
    /// `CF.EXISTS`
    CfExists;
    /// `CF.EXISTS key`
    CfExistsKey;
    /// `CF.EXISTS key item`
    CfExistsItem;
    /// `CF.INSERT`
    CfInsert;
    /// `CF.INSERT key`
    CfInsertKey;
    /// `CF.INSERT key CAPACITY capacity`
    CfInsertCapacity;
    /// `CF.INSERT key ... NOCREATE`
    CfInsertNocreate;
    /// `CF.INSERT key ... ITEMS`
    CfInsertItems;
    /// `CF.INSERT key ... ITEMS item...`
    CfInsertItem;
}

impl Builder {
    /// Starts `BF.ADD key item`.
    pub fn bf_add(&self) -> BfAdd {
        BfAdd(self.start(CommandFlags::empty(), &["BF.ADD"]))
    }

    /// Starts `BF.EXISTS key item`.
    pub fn bf_exists(&self) -> BfExists {
        BfExists(self.start(CommandFlags::READONLY, &["BF.EXISTS"]))
    }

    /// Starts `CF.ADD key item`.
    ///
    /// # Example
    ///
    /// ```
    /// use muxis_cmds::{key_slot, Builder};
    ///
    /// let b = Builder::default();
    /// let cmd = b.cf_add().key("mybucket").item("item1").build();
    /// assert_eq!(cmd.args(), ["CF.ADD", "mybucket", "item1"]);
    /// assert_eq!(cmd.slot().get(), Some(key_slot("mybucket")));
    /// assert!(cmd.flags().is_empty());
    /// ```
    pub fn cf_add(&self) -> CfAdd {
        CfAdd(self.start(CommandFlags::empty(), &["CF.ADD"]))
    }

    /// Starts `CF.ADDNX key item`.
    pub fn cf_addnx(&self) -> CfAddnx {
        CfAddnx(self.start(CommandFlags::empty(), &["CF.ADDNX"]))
    }

    /// Starts `CF.EXISTS key item`.
    pub fn cf_exists(&self) -> CfExists {
        CfExists(self.start(CommandFlags::READONLY, &["CF.EXISTS"]))
    }

    /// Starts `CF.INSERT key [CAPACITY capacity] [NOCREATE] ITEMS item...`.
    pub fn cf_insert(&self) -> CfInsert {
        CfInsert(self.start(CommandFlags::empty(), &["CF.INSERT"]))
    }
}

impl_steps! {
    [BfAdd] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> BfAddKey { c.key(key) }
    }
}

impl_steps! {
    [BfAddKey] {
        /// Appends the item.
        fn item(c, item: impl Into<Bytes>) -> BfAddItem { c.arg(item) }
    }
}

impl_steps! {
    [BfExists] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> BfExistsKey { c.key(key) }
    }
}

impl_steps! {
    [BfExistsKey] {
        /// Appends the item.
        fn item(c, item: impl Into<Bytes>) -> BfExistsItem { c.arg(item) }
    }
}

impl_steps! {
    [CfAdd] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> CfAddKey { c.key(key) }
    }
}

impl_steps! {
    [CfAddKey] {
        /// Appends the item.
        fn item(c, item: impl Into<Bytes>) -> CfAddItem { c.arg(item) }
    }
}

impl_steps! {
    [CfAddnx] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> CfAddnxKey { c.key(key) }
    }
}

impl_steps! {
    [CfAddnxKey] {
        /// Appends the item.
        fn item(c, item: impl Into<Bytes>) -> CfAddnxItem { c.arg(item) }
    }
}

impl_steps! {
    [CfExists] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> CfExistsKey { c.key(key) }
    }
}

impl_steps! {
    [CfExistsKey] {
        /// Appends the item.
        fn item(c, item: impl Into<Bytes>) -> CfExistsItem { c.arg(item) }
    }
}

impl_steps! {
    [CfInsert] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> CfInsertKey { c.key(key) }
    }
}

impl_steps! {
    [CfInsertKey] {
        /// Appends `CAPACITY capacity`, used when the filter is created.
        fn capacity(c, capacity: i64) -> CfInsertCapacity { c.arg("CAPACITY").int(capacity) }
    }
}

impl_steps! {
    [CfInsertKey, CfInsertCapacity] {
        /// Appends `NOCREATE`: fail instead of creating a missing filter.
        fn nocreate(c) -> CfInsertNocreate { c.arg("NOCREATE") }
    }
}

impl_steps! {
    [CfInsertKey, CfInsertCapacity, CfInsertNocreate] {
        /// Appends `ITEMS`.
        fn items(c) -> CfInsertItems { c.arg("ITEMS") }
    }
}

impl_args!(item: CfInsertItems => CfInsertItem, CfInsertItem => CfInsertItem);

impl_build!(
    BfAddItem,
    BfExistsItem,
    CfAddItem,
    CfAddnxItem,
    CfExistsItem,
    CfInsertItem,
);

impl_cache!(BfExistsItem, CfExistsItem);

#[cfg(test)]
mod tests {
    use crate::cluster::slot::{key_slot, KeySlot};
    use crate::cmds::test_builder;

    #[test]
    fn test_bf_add_exists() {
        let b = test_builder();
        let cmd = b.bf_add().key("bf").item("x").build();
        assert_eq!(cmd.args(), ["BF.ADD", "bf", "x"]);
        assert!(cmd.is_write());

        let cmd = b.bf_exists().key("bf").item("x").cache();
        assert_eq!(cmd.args(), ["BF.EXISTS", "bf", "x"]);
        assert!(cmd.is_readonly());
        assert_eq!(cmd.slot(), KeySlot::of("bf"));
    }

    #[test]
    fn test_cf_add() {
        let cmd = test_builder().cf_add().key("mybucket").item("item1").build();
        assert_eq!(cmd.args(), ["CF.ADD", "mybucket", "item1"]);
        assert_eq!(cmd.slot().get(), Some(key_slot("mybucket")));
        assert_eq!(cmd.slot().get(), Some(15776));
        assert!(cmd.flags().is_empty());
    }

    #[test]
    fn test_cf_addnx() {
        let cmd = test_builder().cf_addnx().key("cf").item("i").build();
        assert_eq!(cmd.args(), ["CF.ADDNX", "cf", "i"]);
    }

    #[test]
    fn test_cf_exists_cache() {
        let cmd = test_builder().cf_exists().key("mybucket").item("item1").cache();
        assert_eq!(cmd.args(), ["CF.EXISTS", "mybucket", "item1"]);
        assert!(cmd.is_readonly());
        let (key, command) = cmd.cache_key();
        assert_eq!(key, "mybucket");
        assert_eq!(command, "CF.EXISTSitem1");
    }

    #[test]
    fn test_cf_insert() {
        let b = test_builder();
        let cmd = b
            .cf_insert()
            .key("cf")
            .capacity(1000)
            .nocreate()
            .items()
            .item(["a", "b"])
            .item(["c"])
            .build();
        assert_eq!(
            cmd.args(),
            ["CF.INSERT", "cf", "CAPACITY", "1000", "NOCREATE", "ITEMS", "a", "b", "c"]
        );
        assert_eq!(cmd.slot(), KeySlot::of("cf"));

        let cmd = b.cf_insert().key("cf").items().item(["a"]).build();
        assert_eq!(cmd.args(), ["CF.INSERT", "cf", "ITEMS", "a"]);
    }
}
