use std::collections::HashMap;

use bevy::prelude::*;

use crate::ammo::components::BulletType;

/// Rounds of each bullet type carried in the inventory, recounted every frame
#[derive(Resource, Default, Debug)]
pub struct AmmoTally {
    pub counts: HashMap<BulletType, u32>,
}

impl AmmoTally {
    pub fn count(&self, bullet_type: BulletType) -> u32 {
        self.counts.get(&bullet_type).copied().unwrap_or(0)
    }

    /// Bullet type with the most rounds carried, ties broken in favor of armor-piercing
    pub fn most_plentiful(&self) -> Option<BulletType> {
        [BulletType::ArmorPiercing, BulletType::Standard, BulletType::Unspecified]
            .into_iter()
            .filter(|bullet_type| self.count(*bullet_type) > 0)
            .fold(None, |best: Option<BulletType>, candidate| match best {
                Some(b) if self.count(b) >= self.count(candidate) => Some(b),
                _ => Some(candidate),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_of_missing_type_is_zero() {
        let tally = AmmoTally::default();
        assert_eq!(tally.count(BulletType::Standard), 0);
        assert_eq!(tally.most_plentiful(), None);
    }

    #[test]
    fn most_plentiful_picks_largest_count() {
        let mut tally = AmmoTally::default();
        tally.counts.insert(BulletType::Standard, 8);
        tally.counts.insert(BulletType::ArmorPiercing, 3);
        assert_eq!(tally.most_plentiful(), Some(BulletType::Standard));
    }

    #[test]
    fn most_plentiful_prefers_armor_piercing_on_tie() {
        let mut tally = AmmoTally::default();
        tally.counts.insert(BulletType::Standard, 4);
        tally.counts.insert(BulletType::ArmorPiercing, 4);
        assert_eq!(tally.most_plentiful(), Some(BulletType::ArmorPiercing));
    }
}
