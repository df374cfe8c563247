use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Leading quantity with an optional unit, e.g. `"200 g "`, `"2 cups "`, `"3 "`.
///
/// Anchored at the start of the segment and applied once. A unit only
/// counts when it is a whole token, so `"1 garlic"` keeps its `g`.
static LEADING_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\d+(?:\.\d+)?\s*(?:(?:g|gram|grams|ml|cups?|tbsps?|tsps?|inch|cloves?|sliced?|stalks?|leaf|leaves)\b)?\s*",
    )
    .expect("leading quantity pattern")
});

static TO_TASTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bto taste\b").expect("to taste pattern"));

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("punctuation pattern"));

/// Preparation words dropped from ingredient names.
///
/// Compared one word at a time, so the `"cut into cubes"` entry never
/// matches anything.
static DESCRIPTORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    set.insert("bruised");
    set.insert("sliced");
    set.insert("grated");
    set.insert("minced");
    set.insert("thinly");
    set.insert("julienned");
    set.insert("soaked");
    set.insert("cut into cubes");
    set
});

/// Canonical ingredient names of one recipe, de-duplicated and kept in the
/// order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the name was already present.
    pub fn insert(&mut self, name: String) -> bool {
        if self.seen.contains(&name) {
            return false;
        }

        self.seen.insert(name.clone());
        self.items.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<'a> IntoIterator for &'a IngredientSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for IngredientSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Extract canonical ingredient names from raw recipe ingredient lines.
///
/// Each line may hold several clauses separated by `;`. Every clause goes
/// through [`normalize_segment`]; empty results are dropped and duplicates
/// across the whole recipe collapse into one entry.
///
/// Normalizing the output again is a no-op unless a name still starts with a
/// number or kept a descriptor that was glued to punctuation.
///
/// ```
/// use cookable_matching::normalize;
///
/// let names = normalize(["2 cups rice; 1 tsp salt", "salt to taste"]);
/// assert_eq!(names.into_vec(), vec!["rice", "salt"]);
/// ```
pub fn normalize<I, S>(lines: I) -> IngredientSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = IngredientSet::new();

    for line in lines {
        for segment in line.as_ref().split(';') {
            if let Some(name) = normalize_segment(segment) {
                names.insert(name);
            }
        }
    }

    names
}

/// Normalize a single ingredient clause.
///
/// Returns `None` when nothing is left once quantities, units, `"to taste"`,
/// descriptors and punctuation are gone.
pub fn normalize_segment(segment: &str) -> Option<String> {
    let segment = segment.trim().to_lowercase();

    let without_quantity = LEADING_QUANTITY.replace(&segment, "");
    let without_taste = TO_TASTE.replace_all(&without_quantity, "");

    let words = without_taste
        .split_whitespace()
        .filter(|word| !DESCRIPTORS.contains(*word))
        .collect::<Vec<_>>()
        .join(" ");

    let cleaned = PUNCTUATION
        .replace_all(&words, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
