use serde::Serialize;

/// Mineral deposit label, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Geology {
    Sand,
    Gravel,
    Salt,
    Tin,
    Copper,
    Iron,
    Silver,
    Gold,
}

/// Deposits by descending threshold. A deposit applies when `g > threshold`.
static DEPOSITS: [(f32, Geology); 7] = [
    (0.98, Geology::Gold),
    (0.95, Geology::Silver),
    (0.90, Geology::Iron),
    (0.85, Geology::Copper),
    (0.80, Geology::Tin),
    (0.75, Geology::Salt),
    (0.50, Geology::Gravel),
];

impl Geology {
    pub const ALL: [Geology; 8] = [
        Geology::Sand,
        Geology::Gravel,
        Geology::Salt,
        Geology::Tin,
        Geology::Copper,
        Geology::Iron,
        Geology::Silver,
        Geology::Gold,
    ];

    /// Classify a mineral density. Anything not above a threshold is sand.
    pub fn classify(g: f32) -> Geology {
        DEPOSITS
            .iter()
            .find(|(threshold, _)| g > *threshold)
            .map_or(Geology::Sand, |(_, deposit)| *deposit)
    }

    pub fn name(self) -> &'static str {
        match self {
            Geology::Sand => "sand",
            Geology::Gravel => "gravel",
            Geology::Salt => "salt",
            Geology::Tin => "tin",
            Geology::Copper => "copper",
            Geology::Iron => "iron",
            Geology::Silver => "silver",
            Geology::Gold => "gold",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::Geology::{self, *};

    #[test]
    fn reference_vectors() {
        assert_eq!(Geology::classify(0.99), Gold);
        assert_eq!(Geology::classify(0.98), Silver);
        assert_eq!(Geology::classify(0.76), Salt);
        assert_eq!(Geology::classify(0.50), Sand);
        assert_eq!(Geology::classify(0.0), Sand);
    }

    #[test]
    fn thresholds_fall_to_lower_tier() {
        let edges = [
            (0.95, Iron),
            (0.90, Copper),
            (0.85, Tin),
            (0.80, Salt),
            (0.75, Gravel),
            (1.0, Gold),
        ];
        for (g, want) in edges {
            assert_eq!(Geology::classify(g), want, "g={g}");
        }
    }

    #[test]
    fn rarity_increases_with_density() {
        let mut last = Sand;
        for i in 0..=1000 {
            let g = Geology::classify(i as f32 / 1000.0);
            assert!(g >= last);
            last = g;
        }
        assert_eq!(last, Gold);
    }
}
