//! The [`WorldStore`] read interface and the [`MemoryWorld`] implementation.

use std::collections::{HashMap, HashSet};

use wn_core::{EntityId, GatewayFlags, HighwayFlags, Position, WaypointFlags, WaypointId};

use crate::{GatewayRecord, HighwayRecord, WaypointRecord, WorldError, WorldResult};

// ── WorldStore ────────────────────────────────────────────────────────────────

/// Read-only view of the live network records in the world.
///
/// Iteration order is unspecified and may differ between two calls on the
/// same unchanged store.
pub trait WorldStore {
    /// Every live waypoint, paired with its separately tracked spatial
    /// position when the store keeps one.
    fn waypoints(&self) -> impl Iterator<Item = (&WaypointRecord, Option<Position>)> + '_;

    /// Every live highway.
    fn highways(&self) -> impl Iterator<Item = &HighwayRecord> + '_;

    /// Every live gateway.
    fn gateways(&self) -> impl Iterator<Item = &GatewayRecord> + '_;
}

// ── MemoryWorld ───────────────────────────────────────────────────────────────

/// Entity-keyed in-memory world.
///
/// Each record lives under an [`EntityId`] allocated on spawn.  Entities that
/// are not part of the network can be spawned with
/// [`spawn_inert`](Self::spawn_inert); they are invisible through
/// [`WorldStore`] but occupy ids like any other entity.
#[derive(Default)]
pub struct MemoryWorld {
    /// Next entity id to hand out.  `EntityId::INVALID` is never allocated.
    pub(crate) next_entity: u32,

    waypoints: HashMap<EntityId, WaypointRecord>,
    highways:  HashMap<EntityId, HighwayRecord>,
    gateways:  HashMap<EntityId, GatewayRecord>,
    inert:     HashSet<EntityId>,

    /// Spatial positions tracked apart from the waypoint record.
    tracked: HashMap<EntityId, Position>,

    /// Enforces unique waypoint ids.
    waypoint_index: HashMap<WaypointId, EntityId>,
}

impl MemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> WorldResult<EntityId> {
        let id = EntityId(self.next_entity);
        if !id.is_valid() {
            return Err(WorldError::EntitiesExhausted);
        }
        self.next_entity += 1;
        Ok(id)
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    /// Add a waypoint.  Fails if another live waypoint already uses `record.id`.
    pub fn spawn_waypoint(&mut self, record: WaypointRecord) -> WorldResult<EntityId> {
        if let Some(&existing) = self.waypoint_index.get(&record.id) {
            return Err(WorldError::DuplicateWaypoint { id: record.id, existing });
        }
        let entity = self.allocate()?;
        self.waypoint_index.insert(record.id, entity);
        self.waypoints.insert(entity, record);
        Ok(entity)
    }

    /// Add a highway.  Endpoints are not checked; edges to unknown
    /// waypoints are filtered out when the adjacency is built.
    pub fn spawn_highway(&mut self, record: HighwayRecord) -> WorldResult<EntityId> {
        let entity = self.allocate()?;
        self.highways.insert(entity, record);
        Ok(entity)
    }

    pub fn spawn_gateway(&mut self, record: GatewayRecord) -> WorldResult<EntityId> {
        let entity = self.allocate()?;
        self.gateways.insert(entity, record);
        Ok(entity)
    }

    /// Add an entity that carries no network record.
    pub fn spawn_inert(&mut self) -> WorldResult<EntityId> {
        let entity = self.allocate()?;
        self.inert.insert(entity);
        Ok(entity)
    }

    /// Destroy `entity` along with any tracked position it owns.
    pub fn despawn(&mut self, entity: EntityId) -> WorldResult<()> {
        if let Some(record) = self.waypoints.remove(&entity) {
            self.waypoint_index.remove(&record.id);
            self.tracked.remove(&entity);
            return Ok(());
        }
        if self.highways.remove(&entity).is_some()
            || self.gateways.remove(&entity).is_some()
            || self.inert.remove(&entity)
        {
            return Ok(());
        }
        Err(WorldError::EntityNotFound(entity))
    }

    // ── Authoring updates ─────────────────────────────────────────────────

    /// Attach (or replace) a separately tracked spatial position on a
    /// waypoint entity.
    pub fn track_position(&mut self, entity: EntityId, position: Position) -> WorldResult<()> {
        if !self.waypoints.contains_key(&entity) {
            return Err(self.missing_waypoint(entity));
        }
        self.tracked.insert(entity, position);
        Ok(())
    }

    /// Stop tracking a spatial position; the record's own position applies again.
    pub fn untrack_position(&mut self, entity: EntityId) -> Option<Position> {
        self.tracked.remove(&entity)
    }

    pub fn set_waypoint_flags(&mut self, entity: EntityId, flags: WaypointFlags) -> WorldResult<()> {
        match self.waypoints.get_mut(&entity) {
            Some(record) => {
                record.flags = flags;
                Ok(())
            }
            None => Err(self.missing_waypoint(entity)),
        }
    }

    pub fn set_highway_flags(&mut self, entity: EntityId, flags: HighwayFlags) -> WorldResult<()> {
        let record = self.highway_mut(entity).ok_or(WorldError::EntityNotFound(entity))?;
        record.flags = flags;
        Ok(())
    }

    pub fn set_gateway_flags(&mut self, entity: EntityId, flags: GatewayFlags) -> WorldResult<()> {
        let record = self.gateway_mut(entity).ok_or(WorldError::EntityNotFound(entity))?;
        record.flags = flags;
        Ok(())
    }

    pub fn highway_mut(&mut self, entity: EntityId) -> Option<&mut HighwayRecord> {
        self.highways.get_mut(&entity)
    }

    pub fn gateway_mut(&mut self, entity: EntityId) -> Option<&mut GatewayRecord> {
        self.gateways.get_mut(&entity)
    }

    fn missing_waypoint(&self, entity: EntityId) -> WorldError {
        if self.contains(entity) {
            WorldError::NotAWaypoint(entity)
        } else {
            WorldError::EntityNotFound(entity)
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn waypoint(&self, entity: EntityId) -> Option<&WaypointRecord> {
        self.waypoints.get(&entity)
    }

    /// Entity holding the waypoint with authoring id `id`.
    pub fn waypoint_entity(&self, id: WaypointId) -> Option<EntityId> {
        self.waypoint_index.get(&id).copied()
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.waypoints.contains_key(&entity)
            || self.highways.contains_key(&entity)
            || self.gateways.contains_key(&entity)
            || self.inert.contains(&entity)
    }

    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    pub fn highway_count(&self) -> usize {
        self.highways.len()
    }

    pub fn gateway_count(&self) -> usize {
        self.gateways.len()
    }

    /// All live entities, network or not.
    pub fn entity_count(&self) -> usize {
        self.waypoints.len() + self.highways.len() + self.gateways.len() + self.inert.len()
    }
}

impl WorldStore for MemoryWorld {
    fn waypoints(&self) -> impl Iterator<Item = (&WaypointRecord, Option<Position>)> + '_ {
        let tracked = &self.tracked;
        self.waypoints
            .iter()
            .map(move |(entity, record)| (record, tracked.get(entity).copied()))
    }

    fn highways(&self) -> impl Iterator<Item = &HighwayRecord> + '_ {
        self.highways.values()
    }

    fn gateways(&self) -> impl Iterator<Item = &GatewayRecord> + '_ {
        self.gateways.values()
    }
}
