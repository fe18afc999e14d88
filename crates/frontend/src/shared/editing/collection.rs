use contracts::shared::{Entity, EntityId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("an entity without an id cannot join a collection")]
    MissingId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted(usize),
    Replaced(usize),
}

/// Last-known server state of one resource list: ordered, unique by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionStore {
    entities: Vec<Entity>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, entities: Vec<Entity>) {
        debug_assert!(
            entities.iter().enumerate().all(|(i, e)| {
                e.id.is_none() || entities[..i].iter().all(|other| other.id != e.id)
            }),
            "duplicate id in loaded collection"
        );
        self.entities = entities;
    }

    /// Replace in place when the id is known, append otherwise
    pub fn upsert(&mut self, entity: Entity) -> Result<UpsertOutcome, CollectionError> {
        let id = entity.id.clone().ok_or(CollectionError::MissingId)?;
        match self.position(&id) {
            Some(index) => {
                self.entities[index] = entity;
                Ok(UpsertOutcome::Replaced(index))
            }
            None => {
                self.entities.push(entity);
                Ok(UpsertOutcome::Inserted(self.entities.len() - 1))
            }
        }
    }

    pub fn remove(&mut self, id: &EntityId) -> Option<Entity> {
        self.position(id).map(|index| self.entities.remove(index))
    }

    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id.as_ref() == Some(id))
    }

    pub fn position(&self, id: &EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id.as_ref() == Some(id))
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Entity> {
        self.entities.clone()
    }

    pub fn filter<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Entity> + 'a
    where
        P: Fn(&Entity) -> bool + 'a,
    {
        self.entities.iter().filter(move |e| predicate(e))
    }

    /// Case-insensitive substring match over `fields`; a blank query keeps everything
    pub fn search<'a>(
        &'a self,
        query: &str,
        fields: &'a [&'static str],
    ) -> impl Iterator<Item = &'a Entity> + 'a {
        let needle = query.trim().to_lowercase();
        self.filter(move |entity| matches_query(entity, &needle, fields))
    }
}

/// `needle` must already be trimmed and lowercased
pub fn matches_query(entity: &Entity, needle: &str, fields: &[&'static str]) -> bool {
    needle.is_empty()
        || fields.iter().any(|name| {
            entity
                .get(name)
                .is_some_and(|value| value.contains_lowercase(needle))
        })
}
