use serde::Serialize;

use crate::api::host::MeshId;
use crate::domain::dice::DieKind;
use crate::rigid_body::BodyId;
use crate::systems::settle::{SettleState, Settlement};

/// Stable id of a die within one tray; never reused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntityId(pub u32);

/// One physical half of a die: physics body plus scene mesh
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DieBody {
    pub body: BodyId,
    pub mesh: MeshId,
}

/// A die in the tray. Percentile dice carry their linked d10 as `secondary`.
#[derive(Debug)]
pub struct DieEntity {
    id: EntityId,
    kind: DieKind,
    primary: DieBody,
    secondary: Option<DieBody>,
    pub(super) settle: Settlement,
}

impl DieEntity {
    pub(super) fn new(id: EntityId, kind: DieKind, primary: DieBody, secondary: Option<DieBody>) -> Self {
        debug_assert_eq!(secondary.is_some(), kind.is_percentile());
        Self {
            id,
            kind,
            primary,
            secondary,
            settle: Settlement::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> DieKind {
        self.kind
    }

    pub fn primary(&self) -> DieBody {
        self.primary
    }

    pub fn secondary(&self) -> Option<DieBody> {
        self.secondary
    }

    /// Primary first, then the linked body if any
    pub fn bodies(&self) -> impl Iterator<Item = DieBody> {
        std::iter::once(self.primary).chain(self.secondary)
    }

    pub fn is_asleep(&self) -> bool {
        self.settle.is_asleep()
    }

    pub fn settle_state(&self) -> SettleState {
        self.settle.state()
    }
}

/// Active dice in roll order
pub(super) struct DiceRegistry {
    entities: Vec<DieEntity>,
    next_id: u32,
}

impl DiceRegistry {
    pub(super) fn new() -> Self {
        Self {
            entities: Vec::with_capacity(16),
            next_id: 1,
        }
    }

    pub(super) fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    pub(super) fn add(&mut self, entity: DieEntity) {
        self.entities.push(entity);
    }

    /// Empty the registry in one move; the caller disposes what it gets back.
    pub(super) fn take_all(&mut self) -> Vec<DieEntity> {
        std::mem::take(&mut self.entities)
    }

    pub(super) fn as_slice(&self) -> &[DieEntity] {
        &self.entities
    }

    pub(super) fn iter(&self) -> std::slice::Iter<'_, DieEntity> {
        self.entities.iter()
    }

    pub(super) fn iter_mut(&mut self) -> std::slice::IterMut<'_, DieEntity> {
        self.entities.iter_mut()
    }

    pub(super) fn get(&self, id: EntityId) -> Option<&DieEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub(super) fn get_mut(&mut self, id: EntityId) -> Option<&mut DieEntity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub(super) fn len(&self) -> usize {
        self.entities.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub(super) fn any_awake(&self) -> bool {
        self.entities.iter().any(|e| !e.is_asleep())
    }

    pub(super) fn awake_count(&self) -> usize {
        self.entities.iter().filter(|e| !e.is_asleep()).count()
    }
}
