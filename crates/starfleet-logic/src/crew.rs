//! Crew entity model: officers, crew women, Cylons, and the ship roster.
//!
//! Every crew member is identified by name within its own variant: an
//! officer and a Cylon may share a name without being equal, two officers
//! with the same name are the same person. Names have no setter, so a
//! member's identity can't change after it has been placed in a [`Crew`].

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Officer rank ladder, most junior first. Ordering follows seniority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ensign = 0,
    Lieutenant = 1,
    LieutenantCommander = 2,
    Commander = 3,
    Captain = 4,
    Admiral = 5,
}

impl Rank {
    pub fn all() -> &'static [Rank] {
        &[
            Self::Ensign,
            Self::Lieutenant,
            Self::LieutenantCommander,
            Self::Commander,
            Self::Captain,
            Self::Admiral,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ensign => "Ensign",
            Self::Lieutenant => "Lieutenant",
            Self::LieutenantCommander => "Lieutenant Commander",
            Self::Commander => "Commander",
            Self::Captain => "Captain",
            Self::Admiral => "Admiral",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields shared by every crew variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ServiceRecord {
    name: String,
    age: u32,
    years_in_service: u32,
}

impl ServiceRecord {
    fn new(name: String, age: u32, years_in_service: u32) -> Self {
        Self {
            name,
            age,
            years_in_service,
        }
    }
}

/// Identity-by-name equality and hashing for a crew variant struct.
macro_rules! name_identity {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.record.name == other.record.name
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.record.name.hash(state);
            }
        }
    };
}

/// A commissioned officer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Officer {
    record: ServiceRecord,
    rank: Rank,
}

impl Officer {
    pub fn new(name: impl Into<String>, age: u32, years_in_service: u32, rank: Rank) -> Self {
        Self {
            record: ServiceRecord::new(name.into(), age, years_in_service),
            rank,
        }
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn age(&self) -> u32 {
        self.record.age
    }

    pub fn years_in_service(&self) -> u32 {
        self.record.years_in_service
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }
}

name_identity!(Officer);

/// Enlisted crew.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewWoman {
    record: ServiceRecord,
}

impl CrewWoman {
    pub fn new(name: impl Into<String>, age: u32, years_in_service: u32) -> Self {
        Self {
            record: ServiceRecord::new(name.into(), age, years_in_service),
        }
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn age(&self) -> u32 {
        self.record.age
    }

    pub fn years_in_service(&self) -> u32 {
        self.record.years_in_service
    }
}

name_identity!(CrewWoman);

/// Synthetic crew. Carries a model number, otherwise plain crew.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cylon {
    record: ServiceRecord,
    model_number: u32,
}

impl Cylon {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        years_in_service: u32,
        model_number: u32,
    ) -> Self {
        Self {
            record: ServiceRecord::new(name.into(), age, years_in_service),
            model_number,
        }
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn age(&self) -> u32 {
        self.record.age
    }

    pub fn years_in_service(&self) -> u32 {
        self.record.years_in_service
    }

    pub fn model_number(&self) -> u32 {
        self.model_number
    }
}

name_identity!(Cylon);

/// Any member of a ship's crew.
///
/// Equal iff same variant and same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrewMember {
    Officer(Officer),
    CrewWoman(CrewWoman),
    Cylon(Cylon),
}

impl CrewMember {
    fn record(&self) -> &ServiceRecord {
        match self {
            Self::Officer(o) => &o.record,
            Self::CrewWoman(c) => &c.record,
            Self::Cylon(c) => &c.record,
        }
    }

    pub fn name(&self) -> &str {
        &self.record().name
    }

    pub fn age(&self) -> u32 {
        self.record().age
    }

    pub fn years_in_service(&self) -> u32 {
        self.record().years_in_service
    }

    pub fn as_officer(&self) -> Option<&Officer> {
        match self {
            Self::Officer(o) => Some(o),
            _ => None,
        }
    }

    /// Variant name as used in reports.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Officer(_) => "Officer",
            Self::CrewWoman(_) => "CrewWoman",
            Self::Cylon(_) => "Cylon",
        }
    }
}

impl From<Officer> for CrewMember {
    fn from(officer: Officer) -> Self {
        Self::Officer(officer)
    }
}

impl From<CrewWoman> for CrewMember {
    fn from(crew: CrewWoman) -> Self {
        Self::CrewWoman(crew)
    }
}

impl From<Cylon> for CrewMember {
    fn from(cylon: Cylon) -> Self {
        Self::Cylon(cylon)
    }
}

/// A ship's roster: unique members in insertion order.
///
/// Iteration order is the order members were added, which makes every
/// "first encountered wins" rule over a roster deterministic.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Crew {
    members: Vec<CrewMember>,
}

impl Crew {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member. Returns `false` and leaves the roster unchanged if an
    /// equal member is already aboard.
    pub fn insert(&mut self, member: impl Into<CrewMember>) -> bool {
        let member = member.into();
        if self.members.contains(&member) {
            return false;
        }
        self.members.push(member);
        true
    }

    pub fn contains(&self, member: &CrewMember) -> bool {
        self.members.contains(member)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CrewMember> {
        self.members.iter()
    }

    pub fn officers(&self) -> impl Iterator<Item = &Officer> {
        self.members.iter().filter_map(CrewMember::as_officer)
    }

    /// The most senior officer aboard. On a rank tie the officer added
    /// first is kept.
    pub fn highest_ranking_officer(&self) -> Option<&Officer> {
        self.officers().fold(None, |best: Option<&Officer>, officer| match best {
            Some(current) if officer.rank() <= current.rank() => Some(current),
            _ => Some(officer),
        })
    }
}

impl<M: Into<CrewMember>> FromIterator<M> for Crew {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        let mut crew = Crew::new();
        for member in iter {
            crew.insert(member);
        }
        crew
    }
}

impl<'a> IntoIterator for &'a Crew {
    type Item = &'a CrewMember;
    type IntoIter = std::slice::Iter<'a, CrewMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rank_ordering_follows_seniority() {
        assert!(Rank::Ensign < Rank::Lieutenant);
        assert!(Rank::Lieutenant < Rank::LieutenantCommander);
        assert!(Rank::Commander < Rank::Captain);
        assert!(Rank::Captain < Rank::Admiral);
        let mut sorted = Rank::all().to_vec();
        sorted.sort();
        assert_eq!(sorted, Rank::all());
    }

    #[test]
    fn test_equality_is_variant_and_name() {
        let a = CrewMember::from(Officer::new("Adama", 60, 40, Rank::Admiral));
        let b = CrewMember::from(Officer::new("Adama", 30, 2, Rank::Ensign));
        let c = CrewMember::from(CrewWoman::new("Adama", 60, 40));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<CrewMember> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_accessors_through_enum() {
        let m = CrewMember::from(Cylon::new("Number Six", 30, 5, 6));
        assert_eq!(m.name(), "Number Six");
        assert_eq!(m.age(), 30);
        assert_eq!(m.years_in_service(), 5);
        assert_eq!(m.kind_name(), "Cylon");
        assert!(m.as_officer().is_none());
    }

    #[test]
    fn test_crew_rejects_duplicates() {
        let mut crew = Crew::new();
        assert!(crew.insert(CrewWoman::new("Starbuck", 28, 6)));
        assert!(!crew.insert(CrewWoman::new("Starbuck", 99, 0)));
        assert!(crew.insert(Officer::new("Starbuck", 28, 6, Rank::Captain)));
        assert_eq!(crew.len(), 2);
        // The original entry survives the rejected insert
        assert_eq!(crew.iter().next().map(CrewMember::age), Some(28));
    }

    #[test]
    fn test_crew_preserves_insertion_order() {
        let crew: Crew = vec![
            CrewMember::from(CrewWoman::new("Dee", 25, 3)),
            CrewMember::from(Officer::new("Gaeta", 30, 8, Rank::Lieutenant)),
            CrewMember::from(Cylon::new("Boomer", 27, 4, 8)),
        ]
        .into_iter()
        .collect();
        let names: Vec<&str> = crew.iter().map(CrewMember::name).collect();
        assert_eq!(names, ["Dee", "Gaeta", "Boomer"]);
    }

    #[test]
    fn test_highest_ranking_officer() {
        let mut crew = Crew::new();
        assert!(crew.highest_ranking_officer().is_none());
        crew.insert(CrewWoman::new("Cally", 24, 3));
        crew.insert(Officer::new("Kelly", 35, 12, Rank::Lieutenant));
        crew.insert(Officer::new("Tigh", 62, 35, Rank::Commander));
        crew.insert(Officer::new("Gaeta", 30, 8, Rank::Lieutenant));
        assert_eq!(crew.highest_ranking_officer().map(Officer::name), Some("Tigh"));
    }

    #[test]
    fn test_highest_ranking_tie_keeps_first() {
        let mut crew = Crew::new();
        crew.insert(Officer::new("Apollo", 30, 8, Rank::Captain));
        crew.insert(Officer::new("Starbuck", 28, 6, Rank::Captain));
        assert_eq!(crew.highest_ranking_officer().map(Officer::name), Some("Apollo"));
    }

    #[test]
    fn test_officers_filter() {
        let mut crew = Crew::new();
        crew.insert(CrewWoman::new("Cally", 24, 3));
        crew.insert(Officer::new("Helo", 31, 9, Rank::Lieutenant));
        crew.insert(Cylon::new("Leoben", 40, 10, 2));
        let officers: Vec<&str> = crew.officers().map(Officer::name).collect();
        assert_eq!(officers, ["Helo"]);
    }
}
