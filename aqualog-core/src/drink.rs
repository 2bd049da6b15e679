use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of drink types a record can be tagged with.
///
/// Declaration order is the canonical order: it drives ranking tie-breaks
/// and the wrap-around cycling used by the quick-add widget. The serde
/// names match the raw values the mobile history files use, including the
/// four renamed entries (`Energy`, `Iced`, `Citrus`, `Boba`, `Bubbly`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum DrinkType {
    #[default]
    #[serde(rename = "water")]
    Water,
    #[serde(rename = "coffee")]
    Coffee,
    #[serde(rename = "tea")]
    Tea,
    #[serde(rename = "juice")]
    Juice,
    #[serde(rename = "soda")]
    Soda,
    #[serde(rename = "milk")]
    Milk,
    #[serde(rename = "smoothie")]
    Smoothie,
    #[serde(rename = "Energy")]
    SportsDrink,
    #[serde(rename = "Iced")]
    IcedDrink,
    #[serde(rename = "Citrus")]
    Lemonade,
    #[serde(rename = "wine")]
    Wine,
    #[serde(rename = "beer")]
    Beer,
    #[serde(rename = "cocktail")]
    Cocktail,
    #[serde(rename = "Boba")]
    BobaTea,
    #[serde(rename = "Bubbly")]
    Champagne,
}

/// Error returned when a raw drink name does not match any known type.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UnknownDrinkType(pub String);

impl fmt::Display for UnknownDrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown drink type: {}", self.0)
    }
}

impl std::error::Error for UnknownDrinkType {}

impl DrinkType {
    /// All drink types in canonical order.
    pub const ALL: [DrinkType; 15] = [
        DrinkType::Water,
        DrinkType::Coffee,
        DrinkType::Tea,
        DrinkType::Juice,
        DrinkType::Soda,
        DrinkType::Milk,
        DrinkType::Smoothie,
        DrinkType::SportsDrink,
        DrinkType::IcedDrink,
        DrinkType::Lemonade,
        DrinkType::Wine,
        DrinkType::Beer,
        DrinkType::Cocktail,
        DrinkType::BobaTea,
        DrinkType::Champagne,
    ];

    /// The raw name used in history files and on the wire.
    pub fn raw_name(&self) -> &'static str {
        match self {
            DrinkType::Water => "water",
            DrinkType::Coffee => "coffee",
            DrinkType::Tea => "tea",
            DrinkType::Juice => "juice",
            DrinkType::Soda => "soda",
            DrinkType::Milk => "milk",
            DrinkType::Smoothie => "smoothie",
            DrinkType::SportsDrink => "Energy",
            DrinkType::IcedDrink => "Iced",
            DrinkType::Lemonade => "Citrus",
            DrinkType::Wine => "wine",
            DrinkType::Beer => "beer",
            DrinkType::Cocktail => "cocktail",
            DrinkType::BobaTea => "Boba",
            DrinkType::Champagne => "Bubbly",
        }
    }

    /// Emoji shown next to the drink in lists and rankings.
    pub fn emoji(&self) -> &'static str {
        match self {
            DrinkType::Water => "\u{1F4A7}",
            DrinkType::Coffee => "\u{2615}\u{FE0F}",
            DrinkType::Tea => "\u{1FAD6}",
            DrinkType::Juice => "\u{1F9C3}",
            DrinkType::Soda => "\u{1F964}",
            DrinkType::Milk => "\u{1F95B}",
            DrinkType::Smoothie => "\u{1F379}",
            DrinkType::SportsDrink => "\u{1F3CB}\u{FE0F}",
            DrinkType::IcedDrink => "\u{1F9CA}",
            DrinkType::Lemonade => "\u{1F34B}",
            DrinkType::Wine => "\u{1F377}",
            DrinkType::Beer => "\u{1F37A}",
            DrinkType::Cocktail => "\u{1F378}",
            DrinkType::BobaTea => "\u{1F9CB}",
            DrinkType::Champagne => "\u{1F942}",
        }
    }

    /// Quick-add button title for this drink's usual serving.
    pub fn serving_label(&self) -> &'static str {
        match self {
            DrinkType::Coffee | DrinkType::Tea | DrinkType::BobaTea => "Add Cup",
            DrinkType::Soda => "Add Can",
            DrinkType::SportsDrink => "Add Bottle",
            _ => "Add Glass",
        }
    }

    /// The next drink type in canonical order, wrapping around.
    pub fn next(&self) -> DrinkType {
        let idx = Self::ALL.iter().position(|d| d == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous drink type in canonical order, wrapping around.
    pub fn previous(&self) -> DrinkType {
        let idx = Self::ALL.iter().position(|d| d == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_name())
    }
}

impl FromStr for DrinkType {
    type Err = UnknownDrinkType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|d| d.raw_name() == s)
            .copied()
            .ok_or_else(|| UnknownDrinkType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::DrinkType;
    use std::str::FromStr;

    #[test]
    fn test_raw_name_round_trip() {
        for drink in DrinkType::ALL {
            assert_eq!(DrinkType::from_str(drink.raw_name()), Ok(drink));
        }
    }

    #[test]
    fn test_unknown_raw_name() {
        assert!(DrinkType::from_str("kombucha").is_err());
    }

    #[test]
    fn test_renamed_variants() {
        assert_eq!(DrinkType::from_str("Energy"), Ok(DrinkType::SportsDrink));
        assert_eq!(DrinkType::from_str("Boba"), Ok(DrinkType::BobaTea));
        assert_eq!(DrinkType::Champagne.to_string(), "Bubbly");
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(DrinkType::Water.next(), DrinkType::Coffee);
        assert_eq!(DrinkType::Champagne.next(), DrinkType::Water);
        assert_eq!(DrinkType::Water.previous(), DrinkType::Champagne);
        // a full forward cycle returns to the start
        let mut drink = DrinkType::Tea;
        for _ in 0..DrinkType::ALL.len() {
            drink = drink.next();
        }
        assert_eq!(drink, DrinkType::Tea);
    }

    #[test]
    fn test_canonical_order_matches_declaration() {
        let mut sorted = DrinkType::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, DrinkType::ALL.to_vec());
    }

    #[test]
    fn test_serde_uses_raw_names() {
        let json = serde_json::to_string(&DrinkType::SportsDrink).unwrap();
        assert_eq!(json, "\"Energy\"");
        let back: DrinkType = serde_json::from_str("\"Citrus\"").unwrap();
        assert_eq!(back, DrinkType::Lemonade);
    }
}
