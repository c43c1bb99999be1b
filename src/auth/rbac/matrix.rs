//! Actor/target permission table

use super::types::{ManagementAction, Role};
use std::collections::BTreeSet;

use ManagementAction::*;
use Role::*;

/// Set of actions an actor may perform on one target
pub type ActionSet = BTreeSet<ManagementAction>;

/// Grants keyed by `(actor, target)`; any pair not listed grants nothing
const GRANTS: &[((Role, Role), &[ManagementAction])] = &[
    ((Master, Submaster), &[DelegateMaster, Kick]),
    ((Master, Manager), &[AppointSubmaster, DemoteManager, Kick]),
    ((Master, Member), &[AppointManager, Kick]),
    ((Submaster, Manager), &[DelegateSubmaster, DemoteManager, Kick]),
    ((Submaster, Member), &[AppointManager, Kick]),
];

/// Actions `actor` may perform on a member holding `target`
///
/// Total: unlisted combinations, including every MANAGER or MEMBER actor and
/// every MASTER target, yield the empty set. Callers exclude self-targets
/// before asking.
pub fn allowed_actions(actor: Role, target: Role) -> ActionSet {
    GRANTS
        .iter()
        .find(|(pair, _)| *pair == (actor, target))
        .map(|(_, actions)| actions.iter().copied().collect())
        .unwrap_or_default()
}

/// Permission queries used by views and by the action dispatcher
///
/// Stateless; every query is recomputed from the grant table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionMatrix;

impl PermissionMatrix {
    pub fn new() -> Self {
        Self
    }

    /// See [`allowed_actions`]
    pub fn allowed_actions(&self, actor: Role, target: Role) -> ActionSet {
        allowed_actions(actor, target)
    }

    /// Whether `action` is allowed for this pair
    pub fn permits(&self, actor: Role, target: Role, action: ManagementAction) -> bool {
        self.allowed_actions(actor, target).contains(&action)
    }

    /// Actions to offer when the actor looks at a member
    ///
    /// Self-management is never offered.
    pub fn actions_for(
        &self,
        actor_id: &str,
        actor: Role,
        target_id: &str,
        target: Role,
    ) -> ActionSet {
        if actor_id == target_id {
            return ActionSet::new();
        }
        self.allowed_actions(actor, target)
    }

    /// Whether the actor has anything to do in the management modal at all
    pub fn can_manage_anyone(&self, actor: Role) -> bool {
        Role::ALL
            .into_iter()
            .any(|target| !self.allowed_actions(actor, target).is_empty())
    }
}
