//! Item model - weapons, armor, loot sundries, and the inventory
//!
//! Kinds and roll ranges mirror the classic item catalog; equipment
//! generation draws from the fixed ranges below.

pub mod builder;
pub mod equip;
pub mod loot;

pub use builder::{create_armor, create_weapon, random_armor_material, random_material};
pub use equip::EquipSlot;

use crate::core::{BodyPart, Gender, Race};
use serde::{Deserialize, Serialize};

/// Weapon kinds in classic catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Dagger,
    Tanto,
    Staff,
    Shortsword,
    Wakazashi,
    Broadsword,
    Saber,
    Longsword,
    Katana,
    Claymore,
    DaiKatana,
    Mace,
    Flail,
    Warhammer,
    BattleAxe,
    WarAxe,
    ShortBow,
    LongBow,
}

/// The light off-hand roll range (dagger through shortsword)
pub const LIGHT_OFFHAND_WEAPONS: [WeaponKind; 4] = [
    WeaponKind::Dagger,
    WeaponKind::Tanto,
    WeaponKind::Staff,
    WeaponKind::Shortsword,
];

/// The one-handed main weapon roll range (broadsword through longsword)
pub const ONE_HANDED_BLADES: [WeaponKind; 3] = [
    WeaponKind::Broadsword,
    WeaponKind::Saber,
    WeaponKind::Longsword,
];

/// The heavy weapon roll range (claymore through battle axe)
pub const TWO_HANDED_WEAPONS: [WeaponKind; 6] = [
    WeaponKind::Claymore,
    WeaponKind::DaiKatana,
    WeaponKind::Mace,
    WeaponKind::Flail,
    WeaponKind::Warhammer,
    WeaponKind::BattleAxe,
];

impl WeaponKind {
    pub fn is_two_handed(self) -> bool {
        TWO_HANDED_WEAPONS.contains(&self)
    }

    pub fn weight_kg(self) -> f32 {
        use WeaponKind::*;
        match self {
            Dagger | Tanto => 0.5,
            Staff => 2.0,
            Shortsword | Wakazashi => 1.5,
            Broadsword | Saber | Longsword | Katana => 3.0,
            Claymore | DaiKatana => 6.0,
            Mace => 4.0,
            Flail => 5.0,
            Warhammer => 7.0,
            BattleAxe | WarAxe => 6.0,
            ShortBow => 1.0,
            LongBow => 1.5,
        }
    }
}

/// Armor kinds, shields last
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmorKind {
    Cuirass,
    Gauntlets,
    Greaves,
    LeftPauldron,
    RightPauldron,
    Helm,
    Boots,
    Buckler,
    RoundShield,
    KiteShield,
    TowerShield,
}

/// The shield roll range (buckler through round shield)
pub const SHIELD_KINDS: [ArmorKind; 2] = [ArmorKind::Buckler, ArmorKind::RoundShield];

/// Body slots rolled for armor, in the fixed generation order
pub const BODY_ARMOR_ROLL_ORDER: [ArmorKind; 6] = [
    ArmorKind::Helm,
    ArmorKind::RightPauldron,
    ArmorKind::LeftPauldron,
    ArmorKind::Cuirass,
    ArmorKind::Greaves,
    ArmorKind::Boots,
];

impl ArmorKind {
    pub fn is_shield(self) -> bool {
        matches!(
            self,
            ArmorKind::Buckler
                | ArmorKind::RoundShield
                | ArmorKind::KiteShield
                | ArmorKind::TowerShield
        )
    }

    /// Body parts a piece protects once equipped
    pub fn covered_parts(self) -> &'static [BodyPart] {
        use ArmorKind::*;
        match self {
            Cuirass => &[BodyPart::Chest],
            Gauntlets => &[BodyPart::Hands],
            Greaves => &[BodyPart::Legs],
            LeftPauldron => &[BodyPart::LeftArm],
            RightPauldron => &[BodyPart::RightArm],
            Helm => &[BodyPart::Head],
            Boots => &[BodyPart::Feet],
            Buckler => &[BodyPart::LeftArm, BodyPart::Hands],
            RoundShield | KiteShield => &[BodyPart::LeftArm, BodyPart::Hands, BodyPart::Legs],
            TowerShield => &[
                BodyPart::Head,
                BodyPart::LeftArm,
                BodyPart::Hands,
                BodyPart::Legs,
            ],
        }
    }

    pub fn weight_kg(self) -> f32 {
        use ArmorKind::*;
        match self {
            Cuirass => 8.0,
            Gauntlets => 1.5,
            Greaves => 5.0,
            LeftPauldron | RightPauldron => 2.5,
            Helm => 2.0,
            Boots => 3.0,
            Buckler => 2.0,
            RoundShield => 3.5,
            KiteShield => 5.0,
            TowerShield => 7.0,
        }
    }
}

/// Weapon material tiers, worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeaponMaterial {
    Iron,
    Steel,
    Silver,
    Elven,
    Dwarven,
    Mithril,
    Adamantium,
    Ebony,
    Orcish,
    Daedric,
}

impl WeaponMaterial {
    pub const ALL: [WeaponMaterial; 10] = [
        WeaponMaterial::Iron,
        WeaponMaterial::Steel,
        WeaponMaterial::Silver,
        WeaponMaterial::Elven,
        WeaponMaterial::Dwarven,
        WeaponMaterial::Mithril,
        WeaponMaterial::Adamantium,
        WeaponMaterial::Ebony,
        WeaponMaterial::Orcish,
        WeaponMaterial::Daedric,
    ];
}

/// Armor material tiers, worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArmorMaterial {
    Leather,
    Chain,
    Iron,
    Steel,
    Silver,
    Elven,
    Dwarven,
    Mithril,
    Adamantium,
    Ebony,
    Orcish,
    Daedric,
}

impl ArmorMaterial {
    pub const ALL: [ArmorMaterial; 12] = [
        ArmorMaterial::Leather,
        ArmorMaterial::Chain,
        ArmorMaterial::Iron,
        ArmorMaterial::Steel,
        ArmorMaterial::Silver,
        ArmorMaterial::Elven,
        ArmorMaterial::Dwarven,
        ArmorMaterial::Mithril,
        ArmorMaterial::Adamantium,
        ArmorMaterial::Ebony,
        ArmorMaterial::Orcish,
        ArmorMaterial::Daedric,
    ];

    /// Protection modifier; a covered slot reads
    /// `100 - modifier * ARMOR_RATING_SCALE` (lower is better)
    pub fn protection_modifier(self) -> i16 {
        use ArmorMaterial::*;
        match self {
            Leather => 3,
            Chain => 6,
            Iron => 7,
            Steel => 9,
            Silver => 9,
            Elven => 11,
            Dwarven => 13,
            Mithril => 15,
            Adamantium => 15,
            Ebony => 17,
            Orcish => 19,
            Daedric => 21,
        }
    }
}

/// Weapon poisons, classic numeric range 128..136
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Poison {
    NuxVomica,
    ArsenicSalts,
    Moonseed,
    Drothweed,
    Somnalius,
    PyrrhicAcid,
    MagebaneDust,
    Thyrwort,
}

impl Poison {
    pub const ALL: [Poison; 8] = [
        Poison::NuxVomica,
        Poison::ArsenicSalts,
        Poison::Moonseed,
        Poison::Drothweed,
        Poison::Somnalius,
        Poison::PyrrhicAcid,
        Poison::MagebaneDust,
        Poison::Thyrwort,
    ];
}

/// What an item is, with the data that matters for generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon {
        kind: WeaponKind,
        material: WeaponMaterial,
        poison: Option<Poison>,
    },
    Armor {
        kind: ArmorKind,
        material: ArmorMaterial,
        fitted_for: Option<(Gender, Race)>,
    },
    Map,
    Potion,
    PotionRecipe,
    Gold {
        amount: u32,
    },
}

/// A carried item; `equipped` records the slot it sits in, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub equipped: Option<EquipSlot>,
    pub weight_kg: f32,
}

impl Item {
    pub fn is_armor(&self) -> bool {
        matches!(self.kind, ItemKind::Armor { .. })
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon { .. })
    }
}

/// The entity's item collection; equipped items stay in the inventory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item and return its index
    pub fn add(&mut self, item: Item) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_weight_kg(&self) -> f32 {
        self.items.iter().map(|item| item.weight_kg).sum()
    }

    pub fn equipped_at(&self, slot: EquipSlot) -> Option<&Item> {
        self.items.iter().find(|item| item.equipped == Some(slot))
    }

    pub fn equipped_at_mut(&mut self, slot: EquipSlot) -> Option<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.equipped == Some(slot))
    }

    pub fn equipped_armor(&self) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(|item| item.equipped.is_some() && item.is_armor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_ranges() {
        assert_eq!(ONE_HANDED_BLADES.len(), 3);
        assert_eq!(LIGHT_OFFHAND_WEAPONS.len(), 4);
        assert_eq!(TWO_HANDED_WEAPONS.len(), 6);
        assert!(TWO_HANDED_WEAPONS.iter().all(|kind| kind.is_two_handed()));
        assert!(ONE_HANDED_BLADES.iter().all(|kind| !kind.is_two_handed()));
    }

    #[test]
    fn test_body_roll_order_covers_six_slots() {
        assert_eq!(BODY_ARMOR_ROLL_ORDER.len(), 6);
        assert!(BODY_ARMOR_ROLL_ORDER.iter().all(|kind| !kind.is_shield()));
    }

    #[test]
    fn test_material_tiers_ordered() {
        assert!(WeaponMaterial::Iron < WeaponMaterial::Daedric);
        assert!(
            ArmorMaterial::Leather.protection_modifier()
                < ArmorMaterial::Daedric.protection_modifier()
        );
    }

    #[test]
    fn test_inventory_weight_sums() {
        let mut inventory = Inventory::new();
        inventory.add(Item {
            kind: ItemKind::Gold { amount: 20 },
            equipped: None,
            weight_kg: 0.5,
        });
        inventory.add(Item {
            kind: ItemKind::Potion,
            equipped: None,
            weight_kg: 0.25,
        });
        assert!((inventory.total_weight_kg() - 0.75).abs() < f32::EPSILON);
    }
}
