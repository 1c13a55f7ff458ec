//! Tomato varieties and how to tell if we can grow them.

use crate::grow::GrowingConditions;

/// Decides what a variety turns into under the given conditions
pub type Evaluator = fn(&dyn GrowingConditions) -> &'static str;

/// Every variety pomodoro knows about, keyed by its exact name.
pub const VARIETIES: &'static [(&'static str, Evaluator)] = &[
    ("beefmaster", beefmaster),
    ("san marzano", san_marzano),
];

/// Finds the evaluator for a variety. Names are case sensitive.
pub fn lookup(name: &str) -> Option<Evaluator> {
    VARIETIES
        .iter()
        .find(|(variety, _)| *variety == name)
        .map(|(_, evaluator)| *evaluator)
}

/// Names of all known varieties, in table order
pub fn names() -> Vec<&'static str> {
    VARIETIES.iter().map(|(name, _)| *name).collect()
}

// Beefmaster has no known thresholds, so it doesn't look at conditions.
pub fn beefmaster(_conditions: &dyn GrowingConditions) -> &'static str {
    "beefmaster"
}

pub fn san_marzano(conditions: &dyn GrowingConditions) -> &'static str {
    if conditions.water() > 1 && conditions.soil() > 3 && conditions.seed() > 2 {
        return "san marzano";
    }
    "no san marzano"
}
