//! Connection management commands.

use bytes::Bytes;

use crate::core::builder::Builder;
use crate::core::command::CommandFlags;

/// Client kinds accepted by the `TYPE` and `NOT-TYPE` filters of
/// `CLIENT KILL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientKind {
    /// Ordinary clients.
    Normal,
    /// Connections from a master (pre-5.0 name of `PRIMARY`).
    Master,
    /// Connections from a primary.
    Primary,
    /// Replica connections (pre-5.0 name of `REPLICA`).
    Slave,
    /// Replica connections.
    Replica,
    /// Clients in pub/sub mode.
    Pubsub,
}

impl ClientKind {
    /// The wire token.
    pub const fn as_str(self) -> &'static str {
        match self {
            ClientKind::Normal => "NORMAL",
            ClientKind::Master => "MASTER",
            ClientKind::Primary => "PRIMARY",
            ClientKind::Slave => "SLAVE",
            ClientKind::Replica => "REPLICA",
            ClientKind::Pubsub => "PUBSUB",
        }
    }
}

states! {
    /// `AUTH`
    Auth;
    /// `AUTH username`
    AuthUsername;
    /// `AUTH [username] password`
    AuthPassword;
    /// `PING`
    Ping;
    /// `PING message`
    PingMessage;
    /// `ECHO`
    Echo;
    /// `ECHO message`
    EchoMessage;
    /// `SELECT`
    Select;
    /// `SELECT index`
    SelectIndex;
    /// `CLIENT CACHING`
    ClientCaching;
    /// `CLIENT CACHING YES|NO`
    ClientCachingMode;
    /// `CLIENT GETNAME`
    ClientGetname;
    /// `CLIENT ID`
    ClientId;
    /// `CLIENT INFO`
    ClientInfo;
    /// `CLIENT SETNAME`
    ClientSetname;
    /// `CLIENT SETNAME name`
    ClientSetnameName;
    /// `CLIENT KILL`
    ClientKill;
    /// `CLIENT KILL ip:port`
    ClientKillIpPort;
    /// `CLIENT KILL ... ID id`
    ClientKillId;
    /// `CLIENT KILL ... TYPE kind`
    ClientKillType;
    /// `CLIENT KILL ... NOT-TYPE kind`
    ClientKillNotType;
    /// `CLIENT KILL ... USER username`
    ClientKillUser;
    /// `CLIENT KILL ... ADDR ip:port`
    ClientKillAddr;
    /// `CLIENT KILL ... LADDR ip:port`
    ClientKillLaddr;
    /// `CLIENT KILL ... SKIPME YES|NO`
    ClientKillSkipme;
    /// `CLIENT KILL ... MAXAGE seconds`
    ClientKillMaxage;
    /// `CLIENT PAUSE`
    ClientPause;
    /// `CLIENT PAUSE timeout`
    ClientPauseTimeout;
    /// `CLIENT PAUSE timeout WRITE|ALL`
    ClientPauseMode;
    /// `CLIENT UNPAUSE`
    ClientUnpause;
    /// `CLIENT TRACKING`
    ClientTracking;
    /// `CLIENT TRACKING ON|OFF`
    ClientTrackingStatus;
    /// `CLIENT TRACKING ... REDIRECT id`
    ClientTrackingRedirect;
    /// `CLIENT TRACKING ... PREFIX prefix`
    ClientTrackingPrefix;
    /// `CLIENT TRACKING ... BCAST`
    ClientTrackingBcast;
    /// `CLIENT TRACKING ... OPTIN`
    ClientTrackingOptin;
    /// `CLIENT TRACKING ... OPTOUT`
    ClientTrackingOptout;
    /// `CLIENT TRACKING ... NOLOOP`
    ClientTrackingNoloop;
    /// `CLIENT TRACKINGINFO`
    ClientTrackinginfo;
}

impl Builder {
    /// Starts `AUTH [username] password`.
    pub fn auth(&self) -> Auth {
        Auth(self.start(CommandFlags::empty(), &["AUTH"]))
    }

    /// Starts `PING [message]`.
    pub fn ping(&self) -> Ping {
        Ping(self.start(CommandFlags::empty(), &["PING"]))
    }

    /// Starts `ECHO message`.
    pub fn echo(&self) -> Echo {
        Echo(self.start(CommandFlags::empty(), &["ECHO"]))
    }

    /// Starts `SELECT index`.
    pub fn select(&self) -> Select {
        Select(self.start(CommandFlags::empty(), &["SELECT"]))
    }

    /// Starts `CLIENT CACHING YES|NO`.
    pub fn client_caching(&self) -> ClientCaching {
        ClientCaching(self.start(CommandFlags::empty(), &["CLIENT", "CACHING"]))
    }

    /// Starts `CLIENT GETNAME`.
    pub fn client_getname(&self) -> ClientGetname {
        ClientGetname(self.start(CommandFlags::empty(), &["CLIENT", "GETNAME"]))
    }

    /// Starts `CLIENT ID`.
    pub fn client_id(&self) -> ClientId {
        ClientId(self.start(CommandFlags::empty(), &["CLIENT", "ID"]))
    }

    /// Starts `CLIENT INFO`.
    pub fn client_info(&self) -> ClientInfo {
        ClientInfo(self.start(CommandFlags::empty(), &["CLIENT", "INFO"]))
    }

    /// Starts `CLIENT SETNAME name`.
    pub fn client_setname(&self) -> ClientSetname {
        ClientSetname(self.start(CommandFlags::empty(), &["CLIENT", "SETNAME"]))
    }

    /// Starts `CLIENT KILL`.
    ///
    /// Either the legacy `ip:port` form or at least one filter must follow.
    /// Filters are accepted in the order `ID`, `TYPE`, `NOT-TYPE`, `USER`,
    /// `ADDR`, `LADDR`, `SKIPME`, `MAXAGE`; each may be skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use muxis_cmds::cmds::connection::ClientKind;
    /// use muxis_cmds::Builder;
    ///
    /// let b = Builder::default();
    /// let cmd = b
    ///     .client_kill()
    ///     .kind(ClientKind::Normal)
    ///     .not_kind(ClientKind::Pubsub)
    ///     .skipme_yes()
    ///     .build();
    /// assert_eq!(
    ///     cmd.args(),
    ///     ["CLIENT", "KILL", "TYPE", "NORMAL", "NOT-TYPE", "PUBSUB", "SKIPME", "YES"]
    /// );
    /// ```
    pub fn client_kill(&self) -> ClientKill {
        ClientKill(self.start(CommandFlags::empty(), &["CLIENT", "KILL"]))
    }

    /// Starts `CLIENT PAUSE timeout [WRITE|ALL]`.
    pub fn client_pause(&self) -> ClientPause {
        ClientPause(self.start(CommandFlags::BLOCK, &["CLIENT", "PAUSE"]))
    }

    /// Starts `CLIENT UNPAUSE`.
    pub fn client_unpause(&self) -> ClientUnpause {
        ClientUnpause(self.start(CommandFlags::empty(), &["CLIENT", "UNPAUSE"]))
    }

    /// Starts `CLIENT TRACKING ON|OFF`.
    pub fn client_tracking(&self) -> ClientTracking {
        ClientTracking(self.start(CommandFlags::empty(), &["CLIENT", "TRACKING"]))
    }

    /// Starts `CLIENT TRACKINGINFO`.
    pub fn client_trackinginfo(&self) -> ClientTrackinginfo {
        ClientTrackinginfo(self.start(CommandFlags::empty(), &["CLIENT", "TRACKINGINFO"]))
    }
}

impl_steps! {
    [Auth] {
        /// Appends the ACL username.
        fn username(c, username: impl Into<Bytes>) -> AuthUsername { c.arg(username) }
    }
}

impl_steps! {
    [Auth, AuthUsername] {
        /// Appends the password.
        fn password(c, password: impl Into<Bytes>) -> AuthPassword { c.arg(password) }
    }
}

impl_steps! {
    [Ping] {
        /// Appends a message to echo back.
        fn message(c, message: impl Into<Bytes>) -> PingMessage { c.arg(message) }
    }
}

impl_steps! {
    [Echo] {
        /// Appends the message.
        fn message(c, message: impl Into<Bytes>) -> EchoMessage { c.arg(message) }
    }
}

impl_steps! {
    [Select] {
        /// Appends the database index.
        fn index(c, index: i64) -> SelectIndex { c.int(index) }
    }
}

impl_steps! {
    [ClientCaching] {
        /// Appends `YES`; the transport pairs the command with the next read.
        fn yes(c) -> ClientCachingMode { c.arg("YES").flag(CommandFlags::OPT_IN) }
        /// Appends `NO`.
        fn no(c) -> ClientCachingMode { c.arg("NO") }
    }
}

impl_steps! {
    [ClientSetname] {
        /// Appends the connection name.
        fn name(c, name: impl Into<Bytes>) -> ClientSetnameName { c.arg(name) }
    }
}

impl_steps! {
    [ClientKill] {
        /// Appends the legacy `ip:port` form.
        fn ip_port(c, ip_port: impl Into<Bytes>) -> ClientKillIpPort { c.arg(ip_port) }
        /// Appends `ID client-id`.
        fn id(c, client_id: i64) -> ClientKillId { c.arg("ID").int(client_id) }
    }
}

impl_steps! {
    [ClientKill, ClientKillId] {
        /// Appends `TYPE kind`.
        fn kind(c, kind: ClientKind) -> ClientKillType { c.args(["TYPE", kind.as_str()]) }
    }
}

impl_steps! {
    [ClientKill, ClientKillId, ClientKillType] {
        /// Appends `NOT-TYPE kind`.
        fn not_kind(c, kind: ClientKind) -> ClientKillNotType {
            c.args(["NOT-TYPE", kind.as_str()])
        }
    }
}

impl_steps! {
    [ClientKill, ClientKillId, ClientKillType, ClientKillNotType] {
        /// Appends `USER username`.
        fn user(c, username: impl Into<Bytes>) -> ClientKillUser { c.arg("USER").arg(username) }
    }
}

impl_steps! {
    [ClientKill, ClientKillId, ClientKillType, ClientKillNotType, ClientKillUser] {
        /// Appends `ADDR ip:port`.
        fn addr(c, ip_port: impl Into<Bytes>) -> ClientKillAddr { c.arg("ADDR").arg(ip_port) }
    }
}

impl_steps! {
    [
        ClientKill,
        ClientKillId,
        ClientKillType,
        ClientKillNotType,
        ClientKillUser,
        ClientKillAddr,
    ] {
        /// Appends `LADDR ip:port`.
        fn laddr(c, ip_port: impl Into<Bytes>) -> ClientKillLaddr { c.arg("LADDR").arg(ip_port) }
    }
}

impl_steps! {
    [
        ClientKill,
        ClientKillId,
        ClientKillType,
        ClientKillNotType,
        ClientKillUser,
        ClientKillAddr,
        ClientKillLaddr,
    ] {
        /// Appends `SKIPME YES`.
        fn skipme_yes(c) -> ClientKillSkipme { c.args(["SKIPME", "YES"]) }
        /// Appends `SKIPME NO`.
        fn skipme_no(c) -> ClientKillSkipme { c.args(["SKIPME", "NO"]) }
    }
}

impl_steps! {
    [
        ClientKill,
        ClientKillId,
        ClientKillType,
        ClientKillNotType,
        ClientKillUser,
        ClientKillAddr,
        ClientKillLaddr,
        ClientKillSkipme,
    ] {
        /// Appends `MAXAGE seconds`.
        fn maxage(c, maxage: i64) -> ClientKillMaxage { c.arg("MAXAGE").int(maxage) }
    }
}

impl_steps! {
    [ClientPause] {
        /// Appends the pause duration in milliseconds.
        fn timeout(c, timeout: i64) -> ClientPauseTimeout { c.int(timeout) }
    }
}

impl_steps! {
    [ClientPauseTimeout] {
        /// Appends `WRITE`.
        fn write(c) -> ClientPauseMode { c.arg("WRITE") }
        /// Appends `ALL`.
        fn all(c) -> ClientPauseMode { c.arg("ALL") }
    }
}

impl_steps! {
    [ClientTracking] {
        /// Appends `ON`.
        fn on(c) -> ClientTrackingStatus { c.arg("ON") }
        /// Appends `OFF`.
        fn off(c) -> ClientTrackingStatus { c.arg("OFF") }
    }
}

impl_steps! {
    [ClientTrackingStatus] {
        /// Appends `REDIRECT client-id`.
        fn redirect(c, client_id: i64) -> ClientTrackingRedirect { c.arg("REDIRECT").int(client_id) }
    }
}

impl_steps! {
    [ClientTrackingStatus, ClientTrackingRedirect, ClientTrackingPrefix] {
        /// Appends `PREFIX prefix`; may repeat.
        fn prefix(c, prefix: impl Into<Bytes>) -> ClientTrackingPrefix { c.arg("PREFIX").arg(prefix) }
        /// Appends `BCAST`.
        fn bcast(c) -> ClientTrackingBcast { c.arg("BCAST") }
    }
}

impl_steps! {
    [
        ClientTrackingStatus,
        ClientTrackingRedirect,
        ClientTrackingPrefix,
        ClientTrackingBcast,
    ] {
        /// Appends `OPTIN`.
        fn optin(c) -> ClientTrackingOptin { c.arg("OPTIN") }
    }
}

impl_steps! {
    [
        ClientTrackingStatus,
        ClientTrackingRedirect,
        ClientTrackingPrefix,
        ClientTrackingBcast,
        ClientTrackingOptin,
    ] {
        /// Appends `OPTOUT`.
        fn optout(c) -> ClientTrackingOptout { c.arg("OPTOUT") }
    }
}

impl_steps! {
    [
        ClientTrackingStatus,
        ClientTrackingRedirect,
        ClientTrackingPrefix,
        ClientTrackingBcast,
        ClientTrackingOptin,
        ClientTrackingOptout,
    ] {
        /// Appends `NOLOOP`.
        fn noloop(c) -> ClientTrackingNoloop { c.arg("NOLOOP") }
    }
}

impl_build!(
    AuthPassword,
    Ping,
    PingMessage,
    EchoMessage,
    SelectIndex,
    ClientCachingMode,
    ClientGetname,
    ClientId,
    ClientInfo,
    ClientSetnameName,
    ClientKillIpPort,
    ClientKillId,
    ClientKillType,
    ClientKillNotType,
    ClientKillUser,
    ClientKillAddr,
    ClientKillLaddr,
    ClientKillSkipme,
    ClientKillMaxage,
    ClientPauseTimeout,
    ClientPauseMode,
    ClientUnpause,
    ClientTrackingStatus,
    ClientTrackingRedirect,
    ClientTrackingPrefix,
    ClientTrackingBcast,
    ClientTrackingOptin,
    ClientTrackingOptout,
    ClientTrackingNoloop,
    ClientTrackinginfo,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmds::test_builder;

    #[test]
    fn test_auth() {
        let b = test_builder();
        assert_eq!(b.auth().password("secret").build().args(), ["AUTH", "secret"]);
        assert_eq!(
            b.auth().username("admin").password("secret").build().args(),
            ["AUTH", "admin", "secret"]
        );
    }

    #[test]
    fn test_ping_echo_select() {
        let b = test_builder();
        assert_eq!(b.ping().build().args(), ["PING"]);
        assert_eq!(b.ping().message("hi").build().args(), ["PING", "hi"]);
        assert_eq!(b.echo().message("hi").build().args(), ["ECHO", "hi"]);
        assert_eq!(b.select().index(2).build().args(), ["SELECT", "2"]);
    }

    #[test]
    fn test_connection_commands_have_no_slot() {
        let b = test_builder();
        for cmd in [
            b.ping().build(),
            b.client_id().build(),
            b.client_getname().build(),
            b.client_info().build(),
            b.client_trackinginfo().build(),
        ] {
            assert!(cmd.slot().is_no_slot());
            assert!(cmd.flags().is_empty());
        }
    }

    #[test]
    fn test_client_caching_yes_sets_opt_in() {
        let b = test_builder();
        let yes = b.client_caching().yes().build();
        assert_eq!(yes.args(), ["CLIENT", "CACHING", "YES"]);
        assert!(yes.is_opt_in());

        let no = b.client_caching().no().build();
        assert_eq!(no.args(), ["CLIENT", "CACHING", "NO"]);
        assert!(!no.is_opt_in());
    }

    #[test]
    fn test_client_setname() {
        let cmd = test_builder().client_setname().name("worker-1").build();
        assert_eq!(cmd.args(), ["CLIENT", "SETNAME", "worker-1"]);
    }

    #[test]
    fn test_client_kill_legacy() {
        let cmd = test_builder().client_kill().ip_port("10.0.0.1:6379").build();
        assert_eq!(cmd.args(), ["CLIENT", "KILL", "10.0.0.1:6379"]);
    }

    #[test]
    fn test_client_kill_all_filters() {
        let cmd = test_builder()
            .client_kill()
            .id(7)
            .kind(ClientKind::Replica)
            .not_kind(ClientKind::Normal)
            .user("bob")
            .addr("10.0.0.1:1234")
            .laddr("10.0.0.2:6379")
            .skipme_no()
            .maxage(30)
            .build();
        assert_eq!(
            cmd.args(),
            [
                "CLIENT", "KILL", "ID", "7", "TYPE", "REPLICA", "NOT-TYPE", "NORMAL", "USER",
                "bob", "ADDR", "10.0.0.1:1234", "LADDR", "10.0.0.2:6379", "SKIPME", "NO",
                "MAXAGE", "30"
            ]
        );
    }

    #[test]
    fn test_client_kill_skipped_filters() {
        let b = test_builder();
        assert_eq!(
            b.client_kill().maxage(5).build().args(),
            ["CLIENT", "KILL", "MAXAGE", "5"]
        );
        assert_eq!(
            b.client_kill().id(1).addr("a:1").build().args(),
            ["CLIENT", "KILL", "ID", "1", "ADDR", "a:1"]
        );
    }

    #[test]
    fn test_client_kind_tokens() {
        assert_eq!(ClientKind::Master.as_str(), "MASTER");
        assert_eq!(ClientKind::Primary.as_str(), "PRIMARY");
        assert_eq!(ClientKind::Slave.as_str(), "SLAVE");
        assert_eq!(ClientKind::Pubsub.as_str(), "PUBSUB");
    }

    #[test]
    fn test_client_pause_blocks() {
        let b = test_builder();
        let cmd = b.client_pause().timeout(100).write().build();
        assert_eq!(cmd.args(), ["CLIENT", "PAUSE", "100", "WRITE"]);
        assert!(cmd.is_block());

        let cmd = b.client_pause().timeout(100).build();
        assert!(cmd.is_block());

        let cmd = b.client_unpause().build();
        assert_eq!(cmd.args(), ["CLIENT", "UNPAUSE"]);
        assert!(!cmd.is_block());
    }

    #[test]
    fn test_client_tracking_full() {
        let cmd = test_builder()
            .client_tracking()
            .on()
            .redirect(42)
            .prefix("foo")
            .bcast()
            .noloop()
            .build();
        assert_eq!(
            cmd.args(),
            ["CLIENT", "TRACKING", "ON", "REDIRECT", "42", "PREFIX", "foo", "BCAST", "NOLOOP"]
        );
        assert!(cmd.slot().is_no_slot());
        assert!(cmd.flags().is_empty());
    }

    #[test]
    fn test_client_tracking_repeated_prefix() {
        let cmd = test_builder()
            .client_tracking()
            .on()
            .prefix("a:")
            .prefix("b:")
            .bcast()
            .build();
        assert_eq!(
            cmd.args(),
            ["CLIENT", "TRACKING", "ON", "PREFIX", "a:", "PREFIX", "b:", "BCAST"]
        );
    }

    #[test]
    fn test_client_tracking_optin_optout() {
        let b = test_builder();
        assert_eq!(
            b.client_tracking().on().optin().build().args(),
            ["CLIENT", "TRACKING", "ON", "OPTIN"]
        );
        assert_eq!(
            b.client_tracking().off().optout().noloop().build().args(),
            ["CLIENT", "TRACKING", "OFF", "OPTOUT", "NOLOOP"]
        );
    }
}
