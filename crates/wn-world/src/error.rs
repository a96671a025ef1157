//! World-store error type.

use thiserror::Error;

use wn_core::{EntityId, WaypointId};

/// Errors produced by [`MemoryWorld`](crate::MemoryWorld) authoring calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("waypoint {id} already exists as entity {existing}")]
    DuplicateWaypoint { id: WaypointId, existing: EntityId },

    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("entity {0} is not a waypoint")]
    NotAWaypoint(EntityId),

    /// Every entity id below `EntityId::INVALID` has been handed out.
    #[error("entity ids exhausted")]
    EntitiesExhausted,
}

pub type WorldResult<T> = Result<T, WorldError>;
