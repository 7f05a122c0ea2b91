use itertools::Itertools;
use static_assertions::const_assert;
use strum::EnumCount;

use super::dice::{Face, Roll, DICE_PER_ROLL};

const MAX_DISTINCT_FACES: usize = 6;

const_assert!(Face::COUNT == MAX_DISTINCT_FACES);
const_assert!(DICE_PER_ROLL <= MAX_DISTINCT_FACES);

/// How many dice show each face present in a roll, in the order faces first
/// appear in the roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyProfile {
    entries: heapless::Vec<(Face, u8), MAX_DISTINCT_FACES>,
}

impl FrequencyProfile {
    pub fn distinct_faces(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Face, u8)> + '_ {
        self.entries.iter().copied()
    }

    pub fn contains(&self, face: Face) -> bool {
        self.entries.iter().any(|(present, _)| *present == face)
    }

    pub fn count_of(&self, face: Face) -> u8 {
        self.entries
            .iter()
            .find(|(present, _)| *present == face)
            .map_or(0, |(_, count)| *count)
    }

    pub fn max_count(&self) -> u8 {
        self.entries.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }

    /// Counts in ascending order, e.g. `[2, 3]` for a full house.
    pub fn sorted_counts(&self) -> heapless::Vec<u8, MAX_DISTINCT_FACES> {
        self.entries.iter().map(|(_, count)| *count).sorted().collect()
    }

    /// Length of the longest run of consecutive distinct faces. Duplicates
    /// neither extend nor break a run.
    pub fn longest_run(&self) -> usize {
        let faces: heapless::Vec<Face, MAX_DISTINCT_FACES> =
            self.entries.iter().map(|(face, _)| *face).sorted().collect();

        let mut longest = usize::from(!faces.is_empty());
        let mut current = longest;

        for (left, right) in faces.iter().tuple_windows() {
            if left.next() == Some(*right) {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 1;
            }
        }

        longest
    }
}

impl From<&Roll> for FrequencyProfile {
    fn from(roll: &Roll) -> Self {
        let entries = roll
            .faces()
            .iter()
            .copied()
            .unique()
            .map(|face| (face, roll.count(face)))
            .collect();
        Self { entries }
    }
}
