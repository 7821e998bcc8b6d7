use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::day::Day;
use super::ItemList;
use crate::error::CoreError;

/// A meal slot within a day, in the order they are eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Snack1,
    Lunch,
    Snack2,
    Dinner,
    Snack3,
}

impl MealSlot {
    pub const ALL: [MealSlot; 6] = [
        MealSlot::Breakfast,
        MealSlot::Snack1,
        MealSlot::Lunch,
        MealSlot::Snack2,
        MealSlot::Dinner,
        MealSlot::Snack3,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Snack1 => "snack1",
            MealSlot::Lunch => "lunch",
            MealSlot::Snack2 => "snack2",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack3 => "snack3",
        }
    }

    /// Human-readable label. The three snack slots share one label.
    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack1 | MealSlot::Snack2 | MealSlot::Snack3 => "Snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        MealSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == lower)
            .ok_or_else(|| CoreError::invalid_key("meal slot", s))
    }
}

/// The six item lists of a single day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Meals {
    pub breakfast: ItemList,
    pub snack1: ItemList,
    pub lunch: ItemList,
    pub snack2: ItemList,
    pub dinner: ItemList,
    pub snack3: ItemList,
}

impl Meals {
    pub fn get(&self, slot: MealSlot) -> &ItemList {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Snack1 => &self.snack1,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack2 => &self.snack2,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snack3 => &self.snack3,
        }
    }

    pub fn get_mut(&mut self, slot: MealSlot) -> &mut ItemList {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Snack1 => &mut self.snack1,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Snack2 => &mut self.snack2,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snack3 => &mut self.snack3,
        }
    }
}

/// Address of one list in a slotted plan, written `monday/breakfast`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MealRef {
    pub day: Day,
    pub slot: MealSlot,
}

impl MealRef {
    pub fn new(day: Day, slot: MealSlot) -> Self {
        Self { day, slot }
    }
}

impl fmt::Display for MealRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.day, self.slot)
    }
}

impl FromStr for MealRef {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, slot) = s
            .split_once('/')
            .ok_or_else(|| CoreError::invalid_key("meal location (expected day/slot)", s))?;
        Ok(Self {
            day: day.parse()?,
            slot: slot.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snack_slots_share_a_label() {
        let snacks: Vec<_> = MealSlot::ALL
            .into_iter()
            .filter(|s| s.label() == "Snack")
            .collect();
        assert_eq!(
            snacks,
            vec![MealSlot::Snack1, MealSlot::Snack2, MealSlot::Snack3]
        );
        assert_eq!(MealSlot::Breakfast.label(), "Breakfast");
        assert_eq!(MealSlot::Dinner.label(), "Dinner");
    }

    #[test]
    fn test_meal_slot_parse() {
        assert_eq!("Lunch".parse::<MealSlot>().unwrap(), MealSlot::Lunch);
        assert_eq!("snack2".parse::<MealSlot>().unwrap(), MealSlot::Snack2);
        assert!(matches!(
            "snack".parse::<MealSlot>(),
            Err(CoreError::InvalidKey { kind: "meal slot", .. })
        ));
    }

    #[test]
    fn test_meal_ref_parse_and_display() {
        let at: MealRef = "Mon/breakfast".parse().unwrap();
        assert_eq!(at, MealRef::new(Day::Monday, MealSlot::Breakfast));
        assert_eq!(at.to_string(), "monday/breakfast");
    }

    #[test]
    fn test_meal_ref_requires_both_parts() {
        assert!("monday".parse::<MealRef>().is_err());
        assert!("funday/lunch".parse::<MealRef>().is_err());
        assert!("monday/brunch".parse::<MealRef>().is_err());
    }

    #[test]
    fn test_meals_serialise_in_slot_order() {
        let json = serde_json::to_string(&Meals::default()).unwrap();
        assert_eq!(
            json,
            r#"{"breakfast":[],"snack1":[],"lunch":[],"snack2":[],"dinner":[],"snack3":[]}"#
        );
    }
}
