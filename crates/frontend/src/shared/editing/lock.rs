use contracts::shared::EntityId;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// What an in-flight mutation is scoped to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LockTarget {
    /// The controller's own draft (save)
    Draft,
    /// One collection member (delete)
    Entity(EntityId),
}

/// Set of held operation locks, shared by one controller
#[derive(Debug, Clone, Default)]
pub struct OperationLocks {
    held: Rc<RefCell<HashSet<LockTarget>>>,
}

impl OperationLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` when the target is already locked
    pub fn try_acquire(&self, target: LockTarget) -> Option<LockGuard> {
        if !self.held.borrow_mut().insert(target.clone()) {
            return None;
        }
        Some(LockGuard {
            held: Rc::clone(&self.held),
            target,
        })
    }

    pub fn is_held(&self, target: &LockTarget) -> bool {
        self.held.borrow().contains(target)
    }

    pub fn any_held(&self) -> bool {
        !self.held.borrow().is_empty()
    }

    pub fn is_deleting(&self) -> bool {
        self.held
            .borrow()
            .iter()
            .any(|target| matches!(target, LockTarget::Entity(_)))
    }

    pub fn deleting(&self) -> Vec<EntityId> {
        self.held
            .borrow()
            .iter()
            .filter_map(|target| match target {
                LockTarget::Entity(id) => Some(id.clone()),
                LockTarget::Draft => None,
            })
            .collect()
    }
}

/// Releases its target when dropped, including when the owning future is dropped
#[derive(Debug)]
pub struct LockGuard {
    held: Rc<RefCell<HashSet<LockTarget>>>,
    target: LockTarget,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        self.held.borrow_mut().remove(&self.target);
    }
}
