use bevy::prelude::*;

/// The player's carried items, in pickup order.
/// Each entry is a gear item entity; entries may outlive their entity until pruned.
#[derive(Resource, Default, Debug)]
pub struct Inventory {
    items: Vec<Entity>,
}

impl Inventory {
    pub fn add(&mut self, item: Entity) {
        if !self.items.contains(&item) {
            self.items.push(item);
        }
    }

    /// Remove an item, returns whether it was present.
    pub fn remove(&mut self, item: Entity) -> bool {
        if let Some(index) = self.items.iter().position(|&e| e == item) {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, item: Entity) -> bool {
        self.items.contains(&item)
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop entries for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(Entity) -> bool) {
        self.items.retain(|&e| keep(e));
    }
}
