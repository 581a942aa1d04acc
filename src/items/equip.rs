//! Equip slots and slot placement rules

use crate::items::{ArmorKind, Inventory, ItemKind};
use serde::{Deserialize, Serialize};

/// Slots an item can occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Head,
    RightArm,
    LeftArm,
    Chest,
    Gloves,
    Legs,
    Feet,
    RightHand,
    LeftHand,
}

impl ArmorKind {
    /// The slot a piece occupies when worn
    pub fn equip_slot(self) -> EquipSlot {
        use ArmorKind::*;
        match self {
            Cuirass => EquipSlot::Chest,
            Gauntlets => EquipSlot::Gloves,
            Greaves => EquipSlot::Legs,
            LeftPauldron => EquipSlot::LeftArm,
            RightPauldron => EquipSlot::RightArm,
            Helm => EquipSlot::Head,
            Boots => EquipSlot::Feet,
            Buckler | RoundShield | KiteShield | TowerShield => EquipSlot::LeftHand,
        }
    }
}

impl Inventory {
    /// Try to equip the item at `index`. Weapons take the right hand,
    /// falling back to the left; armor takes its own slot. Returns
    /// false when the slot is occupied - the item stays carried, which
    /// is a valid outcome, not an error.
    pub fn try_equip(&mut self, index: usize) -> bool {
        let slot = match &self.items()[index].kind {
            ItemKind::Weapon { .. } => {
                if self.equipped_at(EquipSlot::RightHand).is_none() {
                    EquipSlot::RightHand
                } else if self.equipped_at(EquipSlot::LeftHand).is_none() {
                    EquipSlot::LeftHand
                } else {
                    return false;
                }
            }
            ItemKind::Armor { kind, .. } => {
                let slot = kind.equip_slot();
                if self.equipped_at(slot).is_some() {
                    return false;
                }
                slot
            }
            _ => return false,
        };
        self.set_equipped(index, Some(slot));
        true
    }

    pub(crate) fn set_equipped(&mut self, index: usize, slot: Option<EquipSlot>) {
        if let Some(item) = self.items_mut().get_mut(index) {
            item.equipped = slot;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{
        ArmorMaterial, Item, WeaponKind, WeaponMaterial,
    };

    fn sword() -> Item {
        Item {
            kind: ItemKind::Weapon {
                kind: WeaponKind::Broadsword,
                material: WeaponMaterial::Steel,
                poison: None,
            },
            equipped: None,
            weight_kg: 3.0,
        }
    }

    fn shield() -> Item {
        Item {
            kind: ItemKind::Armor {
                kind: ArmorKind::Buckler,
                material: ArmorMaterial::Iron,
                fitted_for: None,
            },
            equipped: None,
            weight_kg: 2.0,
        }
    }

    #[test]
    fn test_first_weapon_takes_right_hand() {
        let mut inventory = Inventory::new();
        let index = inventory.add(sword());
        assert!(inventory.try_equip(index));
        assert!(inventory.equipped_at(EquipSlot::RightHand).is_some());
    }

    #[test]
    fn test_second_weapon_takes_left_hand() {
        let mut inventory = Inventory::new();
        let first = inventory.add(sword());
        let second = inventory.add(sword());
        assert!(inventory.try_equip(first));
        assert!(inventory.try_equip(second));
        assert!(inventory.equipped_at(EquipSlot::LeftHand).is_some());
    }

    #[test]
    fn test_offhand_blocked_by_shield_stays_carried() {
        let mut inventory = Inventory::new();
        let blade = inventory.add(sword());
        let buckler = inventory.add(shield());
        let offhand = inventory.add(sword());
        assert!(inventory.try_equip(blade));
        assert!(inventory.try_equip(buckler));
        assert!(!inventory.try_equip(offhand));
        assert_eq!(inventory.items()[offhand].equipped, None);
        assert_eq!(inventory.len(), 3);
    }
}
