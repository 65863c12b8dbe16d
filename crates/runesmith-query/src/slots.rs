//! Display ordering for equipment slots.

use runesmith_model::EquipmentSlot;

/// Display rank of a slot. Armor pieces come first in a fixed
/// head-to-toe order; everything else shares the rank after them.
pub fn rank(slot: &EquipmentSlot) -> usize {
    match slot.as_str() {
        "Helmet" => 0,
        "Chest" => 1,
        "Boots" => 2,
        "Pants" => 3,
        _ => 4,
    }
}

/// Sort slots into display order.
///
/// The sort is stable: slots sharing a rank (in practice, all the
/// unrecognized ones) keep their original relative order.
pub fn order(slots: &[EquipmentSlot]) -> Vec<EquipmentSlot> {
    let mut ordered = slots.to_vec();
    ordered.sort_by_key(rank);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(tokens: &[&str]) -> Vec<EquipmentSlot> {
        tokens.iter().map(EquipmentSlot::new).collect()
    }

    fn names(slots: &[EquipmentSlot]) -> Vec<String> {
        slots.iter().map(|s| s.as_str().to_string()).collect()
    }

    #[test]
    fn test_armor_ranks_head_to_toe() {
        assert_eq!(rank(&EquipmentSlot::new("helmet")), 0);
        assert_eq!(rank(&EquipmentSlot::new("chest")), 1);
        assert_eq!(rank(&EquipmentSlot::new("boots")), 2);
        assert_eq!(rank(&EquipmentSlot::new("pants")), 3);
        assert_eq!(rank(&EquipmentSlot::new("shield")), 4);
        assert_eq!(rank(&EquipmentSlot::new("ring")), 4);
    }

    #[test]
    fn test_order_puts_armor_first() {
        let ordered = order(&slots(&["pants", "helmet", "unknownslot", "boots"]));
        assert_eq!(names(&ordered), vec!["Helmet", "Boots", "Pants", "Unknownslot"]);
    }

    #[test]
    fn test_unrecognized_slots_keep_relative_order() {
        let ordered = order(&slots(&["ring", "pants", "tome", "shield"]));
        assert_eq!(names(&ordered), vec!["Pants", "Ring", "Tome", "Shield"]);
    }

    #[test]
    fn test_order_of_empty_is_empty() {
        assert!(order(&[]).is_empty());
    }
}
