//! Bit flag sets carried by network records and path requests.
//!
//! Unknown bits are preserved (`from_bits_retain`) so records authored by a
//! newer tool still round-trip through the snapshot unchanged.

use bitflags::bitflags;

bitflags! {
    /// State bits on a waypoint.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct WaypointFlags: u32 {
        /// Waypoint is out of the network; every edge touching it is dropped.
        const DISABLED = 1 << 0;
    }
}

bitflags! {
    /// State bits on a highway.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct HighwayFlags: u32 {
        /// Impassable.  Excluded from the adjacency.
        const BLOCKED           = 1 << 0;
        /// Passable at a penalty (see `CostModel::maintenance_penalty`).
        const UNDER_MAINTENANCE = 1 << 1;
    }
}

bitflags! {
    /// State bits on a gateway.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct GatewayFlags: u32 {
        const OFFLINE    = 1 << 0;
        const RESTRICTED = 1 << 1;
    }
}

bitflags! {
    /// Notification options on a path request.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RequestFlags: u32 {
        /// Announce the route as a rendezvous to listeners.
        const BROADCAST_RENDEZVOUS = 1 << 0;
        /// Announce the route as open to interception.
        const ALLOW_INTERCEPTION   = 1 << 1;
    }
}

impl HighwayFlags {
    /// `true` unless the highway is blocked.
    #[inline]
    pub fn is_traversable(self) -> bool {
        !self.contains(HighwayFlags::BLOCKED)
    }
}

impl GatewayFlags {
    /// `true` unless the gateway is offline or restricted.
    #[inline]
    pub fn is_traversable(self) -> bool {
        !self.intersects(GatewayFlags::OFFLINE | GatewayFlags::RESTRICTED)
    }
}
