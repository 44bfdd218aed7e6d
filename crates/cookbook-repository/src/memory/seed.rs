use cookbook_core::{Recipe, RecipeDraft};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Demo catalog loaded into the in-memory store when seeding is enabled.
#[must_use]
pub fn demo_recipes() -> Vec<Recipe> {
    vec![
        Recipe::internal(
            1,
            RecipeDraft {
                title: "Spaghetti Carbonara".to_string(),
                ingredients: strings(&["pasta", "eggs", "bacon", "cheese"]),
                steps: strings(&["Cook pasta", "Mix eggs", "Combine all"]),
                prep_time: "10 minutes".to_string(),
                cook_time: "15 minutes".to_string(),
                difficulty: "Medium".to_string(),
                cuisine: "Italian".to_string(),
            },
        ),
        Recipe::internal(
            2,
            RecipeDraft {
                title: "Chicken Tikka Masala".to_string(),
                ingredients: strings(&["chicken", "tomato", "onion", "garlic"]),
                steps: strings(&["Marinate chicken", "Cook sauce", "Combine and simmer"]),
                prep_time: "20 minutes".to_string(),
                cook_time: "30 minutes".to_string(),
                difficulty: "Medium".to_string(),
                cuisine: "Indian".to_string(),
            },
        ),
    ]
}
