//! Identifier newtypes.
//!
//! Waypoint ids come from authoring data and are sparse; entity and request
//! ids are handles allocated by their owning store.  All three share one
//! shape, generated by `network_id!`.

use std::fmt;

macro_rules! network_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Placeholder for an id that was never assigned.
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// `None` when `n` does not fit or would collide with `INVALID`.
            pub fn from_index(n: usize) -> Option<Self> {
                <$inner>::try_from(n).ok().map($name).filter(|id| id.is_valid())
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self.0 != <$inner>::MAX
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

network_id! {
    /// Authoring-assigned identifier of a waypoint.  Unique within a graph,
    /// not necessarily dense.
    pub struct WaypointId(u32);
}

network_id! {
    /// Handle of a record in the world store.  Opaque to the network core.
    pub struct EntityId(u32);
}

network_id! {
    /// Handle of a submitted path request.  Allocated in ascending order, so
    /// it doubles as the stable storage-order key when sorting requests.
    pub struct RequestId(u32);
}
