use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::day::Day;
use super::slot::{MealRef, MealSlot, Meals};
use super::week::Week;
use super::ItemList;
use crate::error::CoreError;

/// Which plan shape a store holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One list per day.
    #[default]
    Flat,
    /// One list per meal slot per day.
    Slotted,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Flat => f.write_str("flat"),
            Layout::Slotted => f.write_str("slotted"),
        }
    }
}

/// Address of a single item list inside a plan.
pub trait Location: Copy + Eq + fmt::Display + FromStr<Err = CoreError> {
    fn day(self) -> Day;
    fn slot(self) -> Option<MealSlot>;
}

impl Location for Day {
    fn day(self) -> Day {
        self
    }

    fn slot(self) -> Option<MealSlot> {
        None
    }
}

impl Location for MealRef {
    fn day(self) -> Day {
        self.day
    }

    fn slot(self) -> Option<MealSlot> {
        Some(self.slot)
    }
}

/// A complete weekly plan. Every location always exists; only its list varies.
pub trait Plan: Clone + Default + PartialEq + fmt::Debug + Serialize + DeserializeOwned {
    type Location: Location;

    const LAYOUT: Layout;

    fn items(&self, at: Self::Location) -> &[String];

    fn items_mut(&mut self, at: Self::Location) -> &mut ItemList;

    /// Every location, in display order.
    fn locations() -> Vec<Self::Location>;

    fn item_count(&self) -> usize {
        Self::locations()
            .into_iter()
            .map(|at| self.items(at).len())
            .sum()
    }
}

impl Plan for Week<ItemList> {
    type Location = Day;

    const LAYOUT: Layout = Layout::Flat;

    fn items(&self, at: Day) -> &[String] {
        self.get(at)
    }

    fn items_mut(&mut self, at: Day) -> &mut ItemList {
        self.get_mut(at)
    }

    fn locations() -> Vec<Day> {
        Day::ALL.to_vec()
    }
}

impl Plan for Week<Meals> {
    type Location = MealRef;

    const LAYOUT: Layout = Layout::Slotted;

    fn items(&self, at: MealRef) -> &[String] {
        self.get(at.day).get(at.slot)
    }

    fn items_mut(&mut self, at: MealRef) -> &mut ItemList {
        self.get_mut(at.day).get_mut(at.slot)
    }

    fn locations() -> Vec<MealRef> {
        Day::ALL
            .into_iter()
            .flat_map(|day| MealSlot::ALL.into_iter().map(move |slot| MealRef::new(day, slot)))
            .collect()
    }
}
