//! Geospatial index commands.

use bytes::Bytes;

use crate::core::builder::Builder;
use crate::core::command::CommandFlags;

/// Distance units accepted by the geo commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoUnit {
    /// Meters.
    M,
    /// Kilometers.
    Km,
    /// Feet.
    Ft,
    /// Miles.
    Mi,
}

impl GeoUnit {
    /// The wire token.
    pub const fn as_str(self) -> &'static str {
        match self {
            GeoUnit::M => "m",
            GeoUnit::Km => "km",
            GeoUnit::Ft => "ft",
            GeoUnit::Mi => "mi",
        }
    }
}

states! {
    /// `GEOADD`
    Geoadd;
    /// `GEOADD key`
    GeoaddKey;
    /// `GEOADD key NX|XX`
    GeoaddCondition;
    /// `GEOADD key ... CH`
    GeoaddCh;
    /// `GEOADD key ... (longitude latitude member)...`
    GeoaddLonLatMember;
    /// `GEODIST`
    Geodist;
    /// `GEODIST key`
    GeodistKey;
    /// `GEODIST key member1`
    GeodistMember1;
    /// `GEODIST key member1 member2`
    GeodistMember2;
    /// `GEODIST key member1 member2 unit`
    GeodistUnit;
    /// `GEOHASH`
    Geohash;
    /// `GEOHASH key`
    GeohashKey;
    /// `GEOHASH key member...`
    GeohashMember;
    /// `GEOPOS`
    Geopos;
    /// `GEOPOS key`
    GeoposKey;
    /// `GEOPOS key member...`
    GeoposMember;
    /// `GEOSEARCH`
    Geosearch;
    /// `GEOSEARCH key`
    GeosearchKey;
    /// `GEOSEARCH key FROMMEMBER member|FROMLONLAT longitude latitude`
    GeosearchFrom;
    /// `GEOSEARCH ... BYRADIUS radius unit|BYBOX width height unit`
    GeosearchShape;
    /// `GEOSEARCH ... ASC|DESC`
    GeosearchOrder;
    /// `GEOSEARCH ... COUNT count`
    GeosearchCount;
    /// `GEOSEARCH ... COUNT count ANY`
    GeosearchAny;
    /// `GEOSEARCH ... WITHCOORD`
    GeosearchWithcoord;
    /// `GEOSEARCH ... WITHDIST`
    GeosearchWithdist;
    /// `GEOSEARCH ... WITHHASH`
    GeosearchWithhash;
}

impl Builder {
    /// Starts `GEOADD key [NX|XX] [CH] (longitude latitude member)...`.
    pub fn geoadd(&self) -> Geoadd {
        Geoadd(self.start(CommandFlags::empty(), &["GEOADD"]))
    }

    /// Starts `GEODIST key member1 member2 [m|km|ft|mi]`.
    pub fn geodist(&self) -> Geodist {
        Geodist(self.start(CommandFlags::READONLY, &["GEODIST"]))
    }

    /// Starts `GEOHASH key [member...]`.
    pub fn geohash(&self) -> Geohash {
        Geohash(self.start(CommandFlags::READONLY, &["GEOHASH"]))
    }

    /// Starts `GEOPOS key [member...]`.
    pub fn geopos(&self) -> Geopos {
        Geopos(self.start(CommandFlags::READONLY, &["GEOPOS"]))
    }

    /// Starts `GEOSEARCH key FROMMEMBER|FROMLONLAT BYRADIUS|BYBOX [ASC|DESC]
    /// [COUNT count [ANY]] [WITHCOORD] [WITHDIST] [WITHHASH]`.
    ///
    /// # Example
    ///
    /// ```
    /// use muxis_cmds::cmds::geo::GeoUnit;
    /// use muxis_cmds::Builder;
    ///
    /// let b = Builder::default();
    /// let cmd = b
    ///     .geosearch()
    ///     .key("stations")
    ///     .fromlonlat(13.361389, 38.115556)
    ///     .byradius(200.0, GeoUnit::Km)
    ///     .asc()
    ///     .count(5)
    ///     .withdist()
    ///     .cache();
    /// assert_eq!(
    ///     cmd.args(),
    ///     [
    ///         "GEOSEARCH", "stations", "FROMLONLAT", "13.361389", "38.115556",
    ///         "BYRADIUS", "200", "km", "ASC", "COUNT", "5", "WITHDIST",
    ///     ]
    /// );
    /// ```
    pub fn geosearch(&self) -> Geosearch {
        Geosearch(self.start(CommandFlags::READONLY, &["GEOSEARCH"]))
    }
}

impl_steps! {
    [Geoadd] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> GeoaddKey { c.key(key) }
    }
}

impl_steps! {
    [GeoaddKey] {
        /// Appends `NX`: only add new members.
        fn nx(c) -> GeoaddCondition { c.arg("NX") }
        /// Appends `XX`: only update existing members.
        fn xx(c) -> GeoaddCondition { c.arg("XX") }
    }
}

impl_steps! {
    [GeoaddKey, GeoaddCondition] {
        /// Appends `CH`: count changed members, not only added ones.
        fn ch(c) -> GeoaddCh { c.arg("CH") }
    }
}

impl_steps! {
    [GeoaddKey, GeoaddCondition, GeoaddCh, GeoaddLonLatMember] {
        /// Appends one position and member; may repeat.
        fn lon_lat_member(c, longitude: f64, latitude: f64, member: impl Into<Bytes>) -> GeoaddLonLatMember {
            c.float(longitude).float(latitude).arg(member)
        }
    }
}

impl_steps! {
    [Geodist] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> GeodistKey { c.key(key) }
    }
}

impl_steps! {
    [GeodistKey] {
        /// Appends the first member.
        fn member1(c, member: impl Into<Bytes>) -> GeodistMember1 { c.arg(member) }
    }
}

impl_steps! {
    [GeodistMember1] {
        /// Appends the second member.
        fn member2(c, member: impl Into<Bytes>) -> GeodistMember2 { c.arg(member) }
    }
}

impl_steps! {
    [GeodistMember2] {
        /// Appends the unit of the returned distance; meters when omitted.
        fn unit(c, unit: GeoUnit) -> GeodistUnit { c.arg(unit.as_str()) }
    }
}

impl_steps! {
    [Geohash] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> GeohashKey { c.key(key) }
    }
}

impl_args!(member: GeohashKey => GeohashMember, GeohashMember => GeohashMember);

impl_steps! {
    [Geopos] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> GeoposKey { c.key(key) }
    }
}

impl_args!(member: GeoposKey => GeoposMember, GeoposMember => GeoposMember);

impl_steps! {
    [Geosearch] {
        /// Appends the key.
        fn key(c, key: impl Into<Bytes>) -> GeosearchKey { c.key(key) }
    }
}

impl_steps! {
    [GeosearchKey] {
        /// Appends `FROMMEMBER member`: search around an existing member.
        fn frommember(c, member: impl Into<Bytes>) -> GeosearchFrom {
            c.arg("FROMMEMBER").arg(member)
        }
        /// Appends `FROMLONLAT longitude latitude`.
        fn fromlonlat(c, longitude: f64, latitude: f64) -> GeosearchFrom {
            c.arg("FROMLONLAT").float(longitude).float(latitude)
        }
    }
}

impl_steps! {
    [GeosearchFrom] {
        /// Appends `BYRADIUS radius unit`.
        fn byradius(c, radius: f64, unit: GeoUnit) -> GeosearchShape {
            c.arg("BYRADIUS").float(radius).arg(unit.as_str())
        }
        /// Appends `BYBOX width height unit`.
        fn bybox(c, width: f64, height: f64, unit: GeoUnit) -> GeosearchShape {
            c.arg("BYBOX").float(width).float(height).arg(unit.as_str())
        }
    }
}

impl_steps! {
    [GeosearchShape] {
        /// Appends `ASC`: nearest first.
        fn asc(c) -> GeosearchOrder { c.arg("ASC") }
        /// Appends `DESC`: farthest first.
        fn desc(c) -> GeosearchOrder { c.arg("DESC") }
    }
}

impl_steps! {
    [GeosearchShape, GeosearchOrder] {
        /// Appends `COUNT count`.
        fn count(c, count: i64) -> GeosearchCount { c.arg("COUNT").int(count) }
    }
}

impl_steps! {
    [GeosearchCount] {
        /// Appends `ANY`: return as soon as enough matches are found.
        fn any(c) -> GeosearchAny { c.arg("ANY") }
    }
}

impl_steps! {
    [GeosearchShape, GeosearchOrder, GeosearchCount, GeosearchAny] {
        /// Appends `WITHCOORD`.
        fn withcoord(c) -> GeosearchWithcoord { c.arg("WITHCOORD") }
    }
}

impl_steps! {
    [GeosearchShape, GeosearchOrder, GeosearchCount, GeosearchAny, GeosearchWithcoord] {
        /// Appends `WITHDIST`.
        fn withdist(c) -> GeosearchWithdist { c.arg("WITHDIST") }
    }
}

impl_steps! {
    [
        GeosearchShape,
        GeosearchOrder,
        GeosearchCount,
        GeosearchAny,
        GeosearchWithcoord,
        GeosearchWithdist,
    ] {
        /// Appends `WITHHASH`.
        fn withhash(c) -> GeosearchWithhash { c.arg("WITHHASH") }
    }
}

impl_build!(
    GeoaddLonLatMember,
    GeodistMember2,
    GeodistUnit,
    GeohashKey,
    GeohashMember,
    GeoposKey,
    GeoposMember,
    GeosearchShape,
    GeosearchOrder,
    GeosearchCount,
    GeosearchAny,
    GeosearchWithcoord,
    GeosearchWithdist,
    GeosearchWithhash,
);

impl_cache!(
    GeodistMember2,
    GeodistUnit,
    GeohashKey,
    GeohashMember,
    GeoposKey,
    GeoposMember,
    GeosearchShape,
    GeosearchOrder,
    GeosearchCount,
    GeosearchAny,
    GeosearchWithcoord,
    GeosearchWithdist,
    GeosearchWithhash,
);
