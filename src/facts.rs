//! Health facts and nutrient advisories
//!
//! Static, read-only reference data consulted when presenting a looked-up
//! food. Match order for the facts table: exact key match, then
//! case-insensitive substring match in either direction (in table order),
//! then the generic fallback list.

use serde::Serialize;

use crate::models::NutrientProfile;

/// Number of facts carried per food
pub const FACTS_PER_FOOD: usize = 3;

/// Sodium level (mg) above which the dehydration alert is shown
pub const HIGH_SODIUM_ALERT_MG: f64 = 400.0;

type FactList = [&'static str; FACTS_PER_FOOD];

/// Facts keyed by lowercase food name
const FOOD_FACTS: &[(&str, FactList)] = &[
    ("apple", [
        "Apples are rich in antioxidants that help protect cells from oxidative damage.",
        "The fiber in apples promotes gut health and may help lower cholesterol.",
        "Apples contain quercetin, which has anti-inflammatory and anti-allergy properties.",
    ]),
    ("banana", [
        "Bananas are high in potassium, which helps regulate heart function and blood pressure.",
        "The vitamin B6 in bananas helps with brain development and immune function.",
        "Bananas contain resistant starch that feeds beneficial gut bacteria.",
    ]),
    ("orange", [
        "Oranges are packed with vitamin C, supporting immune health and collagen production.",
        "The flavonoids in oranges have anti-inflammatory and antioxidant effects.",
        "Oranges contain hesperidin, which may help lower blood pressure and cholesterol.",
    ]),
    ("egg", [
        "Eggs are one of the most nutritionally complete foods, containing almost every essential nutrient.",
        "The choline in eggs is crucial for brain health and development.",
        "Eggs contain lutein and zeaxanthin, which promote eye health.",
    ]),
    ("chicken", [
        "Chicken is a lean protein source that helps build and maintain muscle mass.",
        "The B vitamins in chicken support energy metabolism and brain function.",
        "Chicken contains selenium, which plays a role in thyroid function and antioxidant defense.",
    ]),
    ("rice", [
        "Rice provides quick energy as it's easily digested carbohydrates.",
        "Brown rice contains lignans, which may reduce heart disease risk.",
        "Rice is naturally gluten-free, making it suitable for people with celiac disease.",
    ]),
    ("bread", [
        "Whole grain bread provides fiber that supports digestive health.",
        "The B vitamins in bread help convert food into energy.",
        "Fermented breads like sourdough may be easier to digest and have a lower glycemic index.",
    ]),
    ("milk", [
        "Milk is a complete protein containing all essential amino acids.",
        "The calcium in milk supports bone health and may help prevent osteoporosis.",
        "Milk contains tryptophan, which can help improve sleep quality.",
    ]),
    ("yogurt", [
        "Yogurt contains probiotics that support gut health and immune function.",
        "The calcium and phosphorus in yogurt help maintain strong bones and teeth.",
        "Fermented yogurt may be easier to digest for people with lactose intolerance.",
    ]),
    ("cheese", [
        "Cheese is rich in calcium, which is essential for bone health.",
        "The protein in cheese helps with muscle repair and immune function.",
        "Aged cheeses contain less lactose, making them suitable for some lactose-intolerant individuals.",
    ]),
    ("pizza", [
        "Pizza can provide a balance of carbohydrates, proteins, and fats in one meal.",
        "Tomato sauce on pizza contains lycopene, which may reduce cancer risk.",
        "Adding vegetable toppings increases the nutritional value with fiber and vitamins.",
    ]),
    ("pasta", [
        "Pasta provides complex carbohydrates that give sustained energy.",
        "Whole grain pasta contains more fiber, vitamins, and minerals than refined pasta.",
        "The glycemic index of pasta is lower when cooked al dente, causing a slower rise in blood sugar.",
    ]),
    ("potato", [
        "Potatoes are a good source of potassium, vitamin C, and vitamin B6.",
        "The resistant starch in cooled potatoes acts as a prebiotic for gut bacteria.",
        "Potatoes with skin provide more fiber and nutrients than peeled potatoes.",
    ]),
    ("avocado", [
        "Avocados are rich in heart-healthy monounsaturated fats.",
        "The high fiber content in avocados supports digestive health.",
        "Avocados contain more potassium than bananas, helping regulate blood pressure.",
    ]),
    ("salmon", [
        "Salmon is one of the best sources of omega-3 fatty acids, which support heart and brain health.",
        "The high-quality protein in salmon helps build and repair tissues.",
        "Salmon contains astaxanthin, a powerful antioxidant that gives it its pink color.",
    ]),
    ("broccoli", [
        "Broccoli is rich in sulforaphane, which may have cancer-fighting properties.",
        "The vitamin K in broccoli supports bone health and blood clotting.",
        "Broccoli contains more vitamin C than oranges by weight.",
    ]),
    ("spinach", [
        "Spinach is packed with iron, which helps transport oxygen throughout the body.",
        "The lutein and zeaxanthin in spinach support eye health.",
        "Spinach contains nitrates that may help lower blood pressure and improve athletic performance.",
    ]),
    ("chocolate", [
        "Dark chocolate contains flavanols that may improve blood flow and lower blood pressure.",
        "The theobromine in chocolate has a mild stimulant effect similar to caffeine.",
        "Chocolate contains phenylethylamine, which can trigger feelings of happiness.",
    ]),
    ("coffee", [
        "Coffee is rich in antioxidants that help fight inflammation.",
        "The caffeine in coffee can improve mental alertness and physical performance.",
        "Regular coffee consumption is associated with a lower risk of several diseases, including Parkinson's and type 2 diabetes.",
    ]),
    ("tea", [
        "Tea contains L-theanine, which promotes relaxation without drowsiness.",
        "The catechins in green tea have powerful antioxidant properties.",
        "Regular tea consumption is associated with better heart health and lower stress levels.",
    ]),
];

/// Fallback facts when no table entry matches
const DEFAULT_FACTS: FactList = [
    "A balanced diet includes a variety of foods from all food groups.",
    "Staying hydrated is essential for overall health and proper bodily functions.",
    "Portion control is important for maintaining a healthy weight.",
];

/// Look up the fact list for a food name
pub fn facts_for(food_name: &str) -> &'static FactList {
    let normalized = food_name.to_lowercase();

    // Exact matches first
    if let Some((_, facts)) = FOOD_FACTS.iter().find(|(key, _)| *key == normalized) {
        return facts;
    }

    // Then substring matches in either direction
    for (key, facts) in FOOD_FACTS {
        if normalized.contains(key) || key.contains(normalized.as_str()) {
            return facts;
        }
    }

    &DEFAULT_FACTS
}

/// One threshold-triggered advisory about a nutrient profile
#[derive(Debug, Clone, Serialize)]
pub struct Advisory {
    pub message: &'static str,
    /// Flagged advisories call out something to limit rather than a benefit
    pub warning: bool,
}

/// Threshold-based advisories for a nutrient profile
pub fn advisories_for(nutrients: &NutrientProfile) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if nutrients.fiber >= 5.0 {
        advisories.push(Advisory {
            message: "High in fiber which aids digestion and helps maintain steady blood sugar levels.",
            warning: false,
        });
    }
    if nutrients.protein >= 15.0 {
        advisories.push(Advisory {
            message: "Good source of protein which helps build and repair tissues.",
            warning: false,
        });
    }
    if nutrients.sodium >= 400.0 {
        advisories.push(Advisory {
            message: "High in sodium. Consider balancing with low-sodium foods.",
            warning: true,
        });
    }
    if nutrients.saturated_fat >= 5.0 {
        advisories.push(Advisory {
            message: "Contains significant saturated fat. Consume in moderation.",
            warning: true,
        });
    }
    if nutrients.potassium >= 300.0 {
        advisories.push(Advisory {
            message: "Good source of potassium which helps maintain healthy blood pressure.",
            warning: false,
        });
    }

    advisories
}

/// Dehydration alert for sodium-heavy foods
pub fn high_sodium_alert(nutrients: &NutrientProfile) -> Option<&'static str> {
    if nutrients.sodium > HIGH_SODIUM_ALERT_MG {
        Some(
            "This food contains a high amount of sodium. High sodium causes severe dehydration and water retention.",
        )
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let facts = facts_for("apple");
        assert!(facts[0].starts_with("Apples are rich in antioxidants"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(facts_for("Apple"), facts_for("apple"));
        assert_eq!(facts_for("SALMON"), facts_for("salmon"));
    }

    #[test]
    fn test_substring_match_query_contains_key() {
        // "grilled chicken breast" contains "chicken"
        let facts = facts_for("grilled chicken breast");
        assert!(facts[0].starts_with("Chicken is a lean protein"));
    }

    #[test]
    fn test_substring_match_key_contains_query() {
        // "choc" is contained in "chocolate"
        let facts = facts_for("choc");
        assert!(facts[0].starts_with("Dark chocolate"));
    }

    #[test]
    fn test_default_facts_when_no_match() {
        let facts = facts_for("durian");
        assert_eq!(facts, &DEFAULT_FACTS);
    }

    #[test]
    fn test_advisory_thresholds() {
        let mut n = NutrientProfile::zero();
        assert!(advisories_for(&n).is_empty());

        n.fiber = 5.0;
        n.protein = 15.0;
        n.sodium = 400.0;
        n.saturated_fat = 5.0;
        n.potassium = 300.0;
        let advisories = advisories_for(&n);
        assert_eq!(advisories.len(), 5);
        assert_eq!(advisories.iter().filter(|a| a.warning).count(), 2);
    }

    #[test]
    fn test_high_sodium_alert_is_strictly_above_threshold() {
        let mut n = NutrientProfile::zero();
        n.sodium = 400.0;
        assert!(high_sodium_alert(&n).is_none());

        n.sodium = 400.1;
        assert!(high_sodium_alert(&n).is_some());
    }
}
