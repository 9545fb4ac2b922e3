//! Ranking policies: total orders used by the fleet reports.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::crew::Rank;
use crate::ship::Spaceship;

/// Strongest ships first: fire power descending, then newest commission
/// year first, then name ascending.
pub fn by_fire_power_and_commission_year(a: &Spaceship, b: &Spaceship) -> Ordering {
    b.fire_power()
        .cmp(&a.fire_power())
        .then_with(|| b.commission_year().cmp(&a.commission_year()))
        .then_with(|| a.name().cmp(b.name()))
}

/// One bar of the officer rank histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankCount {
    pub rank: Rank,
    pub count: usize,
}

/// Least common rank first; equal counts fall back to rank seniority.
pub fn by_rank_popularity(a: &RankCount, b: &RankCount) -> Ordering {
    a.count.cmp(&b.count).then_with(|| a.rank.cmp(&b.rank))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crew::Crew;

    fn fighter(name: &str, year: i32, fire_power: i32) -> Spaceship {
        use crate::weapon::Weapon;
        Spaceship::fighter(
            name,
            year,
            1.0,
            Crew::new(),
            vec![Weapon::new("Gun", fire_power - 10, 0)],
        )
    }

    #[test]
    fn test_higher_fire_power_first() {
        let strong = fighter("A", 1990, 50);
        let weak = fighter("B", 2020, 20);
        assert_eq!(by_fire_power_and_commission_year(&strong, &weak), Ordering::Less);
        assert_eq!(by_fire_power_and_commission_year(&weak, &strong), Ordering::Greater);
    }

    #[test]
    fn test_newer_year_breaks_fire_power_tie() {
        let old = fighter("A", 1990, 30);
        let new = fighter("B", 2020, 30);
        assert_eq!(by_fire_power_and_commission_year(&new, &old), Ordering::Less);
    }

    #[test]
    fn test_name_breaks_remaining_tie() {
        let apollo = fighter("Apollo", 2000, 30);
        let boomer = fighter("Boomer", 2000, 30);
        assert_eq!(by_fire_power_and_commission_year(&apollo, &boomer), Ordering::Less);
        assert_eq!(by_fire_power_and_commission_year(&apollo, &apollo), Ordering::Equal);
    }

    #[test]
    fn test_rank_popularity_order() {
        let mut entries = vec![
            RankCount { rank: Rank::Captain, count: 3 },
            RankCount { rank: Rank::Admiral, count: 1 },
            RankCount { rank: Rank::Lieutenant, count: 3 },
            RankCount { rank: Rank::Ensign, count: 5 },
        ];
        entries.sort_by(by_rank_popularity);
        let ranks: Vec<Rank> = entries.iter().map(|e| e.rank).collect();
        assert_eq!(
            ranks,
            [Rank::Admiral, Rank::Lieutenant, Rank::Captain, Rank::Ensign]
        );
    }
}
