//! Redis Cluster management commands.
//!
//! These are used for topology discovery and redirect handling. None of them
//! carries a slot: they are answered by whichever node receives them.

use bytes::Bytes;

use crate::core::builder::Builder;
use crate::core::command::CommandFlags;

states! {
    /// `CLUSTER SLOTS`
    ClusterSlots;
    /// `CLUSTER NODES`
    ClusterNodes;
    /// `CLUSTER INFO`
    ClusterInfo;
    /// `CLUSTER SHARDS`
    ClusterShards;
    /// `CLUSTER KEYSLOT`
    ClusterKeyslot;
    /// `CLUSTER KEYSLOT key`
    ClusterKeyslotKey;
    /// `ASKING`
    Asking;
}

impl Builder {
    /// Starts `CLUSTER SLOTS`.
    ///
    /// Returns information about which cluster slots are mapped to which Redis instances.
    /// This is the primary method for discovering cluster topology.
    ///
    /// # Response Format
    ///
    /// Returns an array of slot ranges with their corresponding master and replica nodes.
    pub fn cluster_slots(&self) -> ClusterSlots {
        ClusterSlots(self.start(CommandFlags::empty(), &["CLUSTER", "SLOTS"]))
    }

    /// Starts `CLUSTER NODES`.
    ///
    /// Returns a list of all nodes in the cluster with their ID, address, flags,
    /// master/replica status, ping/pong times, and slots served.
    pub fn cluster_nodes(&self) -> ClusterNodes {
        ClusterNodes(self.start(CommandFlags::empty(), &["CLUSTER", "NODES"]))
    }

    /// Starts `CLUSTER INFO`.
    ///
    /// Returns information about the cluster state, including:
    /// - cluster_state (ok/fail)
    /// - cluster_slots_assigned
    /// - cluster_known_nodes
    /// - cluster_size
    pub fn cluster_info(&self) -> ClusterInfo {
        ClusterInfo(self.start(CommandFlags::empty(), &["CLUSTER", "INFO"]))
    }

    /// Starts `CLUSTER SHARDS`.
    ///
    /// The replacement for `CLUSTER SLOTS` on Redis 7 and later: one entry per
    /// shard with its slot ranges and nodes.
    pub fn cluster_shards(&self) -> ClusterShards {
        ClusterShards(self.start(CommandFlags::empty(), &["CLUSTER", "SHARDS"]))
    }

    /// Starts `CLUSTER KEYSLOT key`.
    ///
    /// The key is passed as a plain argument and does not route the command.
    pub fn cluster_keyslot(&self) -> ClusterKeyslot {
        ClusterKeyslot(self.start(CommandFlags::empty(), &["CLUSTER", "KEYSLOT"]))
    }

    /// Starts `ASKING`.
    ///
    /// Used before retrying a command that received an ASK redirect.
    /// This tells the target node to accept the command even though the slot
    /// is being migrated.
    ///
    /// ASKING is a one-time flag - it only affects the immediately following command.
    pub fn asking(&self) -> Asking {
        Asking(self.start(CommandFlags::empty(), &["ASKING"]))
    }
}

impl_steps! {
    [ClusterKeyslot] {
        /// Appends the key to hash.
        fn key(c, key: impl Into<Bytes>) -> ClusterKeyslotKey { c.arg(key) }
    }
}

impl_build!(
    ClusterSlots,
    ClusterNodes,
    ClusterInfo,
    ClusterShards,
    ClusterKeyslotKey,
    Asking,
);
