use serde::{Deserialize, Serialize};

use super::day::Day;

/// One value per day of the week.
///
/// Serialises as an object with exactly the seven lowercase day keys. A
/// document missing a day or carrying an extra key fails to deserialise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Week<T> {
    pub monday: T,
    pub tuesday: T,
    pub wednesday: T,
    pub thursday: T,
    pub friday: T,
    pub saturday: T,
    pub sunday: T,
}

impl<T> Week<T> {
    pub fn get(&self, day: Day) -> &T {
        match day {
            Day::Monday => &self.monday,
            Day::Tuesday => &self.tuesday,
            Day::Wednesday => &self.wednesday,
            Day::Thursday => &self.thursday,
            Day::Friday => &self.friday,
            Day::Saturday => &self.saturday,
            Day::Sunday => &self.sunday,
        }
    }

    pub fn get_mut(&mut self, day: Day) -> &mut T {
        match day {
            Day::Monday => &mut self.monday,
            Day::Tuesday => &mut self.tuesday,
            Day::Wednesday => &mut self.wednesday,
            Day::Thursday => &mut self.thursday,
            Day::Friday => &mut self.friday,
            Day::Saturday => &mut self.saturday,
            Day::Sunday => &mut self.sunday,
        }
    }

    /// Days in calendar order with their values.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &T)> + '_ {
        Day::ALL.into_iter().map(move |day| (day, self.get(day)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_get_mut_address_the_same_day() {
        let mut week: Week<u32> = Week::default();
        for (n, day) in Day::ALL.into_iter().enumerate() {
            *week.get_mut(day) = n as u32;
        }
        assert_eq!(week.monday, 0);
        assert_eq!(week.sunday, 6);
        let values: Vec<u32> = week.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_serialises_days_in_calendar_order() {
        let week: Week<u8> = Week::default();
        let json = serde_json::to_string(&week).unwrap();
        assert_eq!(
            json,
            r#"{"monday":0,"tuesday":0,"wednesday":0,"thursday":0,"friday":0,"saturday":0,"sunday":0}"#
        );
    }
}
