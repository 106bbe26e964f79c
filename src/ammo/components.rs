use std::collections::VecDeque;

use bevy::prelude::*;

/// Classification of a round. Drives ammo compatibility, tracer color and bullet materials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BulletType {
    #[default]
    Unspecified,
    Standard,
    ArmorPiercing,
}

/// Tags an ammo gear item with the kind of round it loads
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmmoTag {
    pub bullet_type: BulletType,
}

impl AmmoTag {
    pub fn new(bullet_type: BulletType) -> Self {
        Self { bullet_type }
    }
}

/// One loaded round
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Round {
    pub bullet_type: BulletType,
}

impl Round {
    pub fn new(bullet_type: BulletType) -> Self {
        Self { bullet_type }
    }
}

/// Rounds loaded into a weapon, oldest first.
///
/// Lives on the weapon entity next to its [`GunItem`](crate::weapon::components::GunItem),
/// which supplies the capacity. Rounds are appended at the back and fired from the front.
#[derive(Component, Clone, Debug, Default)]
pub struct Clip {
    rounds: VecDeque<Round>,
}

impl Clip {
    /// Load a round if the clip holds fewer than `clip_size` rounds.
    /// A full clip silently refuses the round.
    pub fn add_round(&mut self, bullet_type: BulletType, clip_size: usize) {
        if self.has_room(clip_size) {
            self.rounds.push_back(Round::new(bullet_type));
        }
    }

    /// Take the oldest round, if any.
    pub fn remove_next(&mut self) -> Option<Round> {
        self.rounds.pop_front()
    }

    /// Take the oldest round, reporting whether one was present.
    /// An empty clip yields `(false, Round::default())` and is left untouched.
    pub fn remove_next_or_default(&mut self) -> (bool, Round) {
        match self.remove_next() {
            Some(round) => (true, round),
            None => (false, Round::default()),
        }
    }

    pub fn loaded_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn has_room(&self, clip_size: usize) -> bool {
        self.rounds.len() < clip_size
    }

    /// The round that will be fired next
    pub fn peek_next(&self) -> Option<&Round> {
        self.rounds.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Round> {
        self.rounds.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
