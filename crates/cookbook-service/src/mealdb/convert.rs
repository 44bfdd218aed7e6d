//! Conversion of raw TheMealDB records into canonical recipes.
//!
//! Everything here is pure. Records are handled as loose JSON because the
//! provider's payload is only partially typed: numbered ingredient slots,
//! nullable strings, and ids that are sometimes numbers.

use cookbook_core::{CookbookError, CookbookResult, Recipe, RecipeId, RecipeSource, NOT_SPECIFIED};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use tracing::warn;

/// Number of ingredient/measure slots in a provider record.
pub const INGREDIENT_SLOTS: usize = 20;

const UNKNOWN: &str = "Unknown";
const UNKNOWN_TITLE: &str = "Unknown Recipe";
const UNKNOWN_ID: &str = "unknown";

/// Sentence fragments of this many characters or fewer are dropped.
const MIN_SENTENCE_CHARS: usize = 10;

/// Whitespace run followed by a step number such as `2.`.
static NUMBERED_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(\d+\.)").expect("Invalid step boundary regex"));

static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("Invalid step number regex"));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence end regex"));

/// Converts a batch of provider records, skipping any record that fails.
pub fn convert_meals(meals: &[Value]) -> Vec<Recipe> {
    meals
        .iter()
        .filter_map(|meal| match convert_meal(meal) {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                warn!("Skipping malformed TheMealDB record: {}", e);
                None
            }
        })
        .collect()
}

/// Converts one provider record into a `mealdb` recipe.
pub fn convert_meal(meal: &Value) -> CookbookResult<Recipe> {
    let record = meal
        .as_object()
        .ok_or_else(|| CookbookError::external("mealdb", "meal record is not an object"))?;

    let id = match record.get("idMeal") {
        None | Some(Value::Null) => UNKNOWN_ID.to_string(),
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        Some(other) => {
            return Err(CookbookError::external(
                "mealdb",
                format!("unexpected idMeal value: {other}"),
            ))
        }
    };

    let title = text_field(record, "strMeal")?.unwrap_or(UNKNOWN_TITLE).to_string();
    let category = text_field(record, "strCategory")?.unwrap_or(UNKNOWN);
    let cuisine = match text_field(record, "strArea")? {
        Some(area) if area != UNKNOWN => area,
        _ => category,
    }
    .to_string();

    let steps = text_field(record, "strInstructions")?
        .map(clean_instructions)
        .unwrap_or_default();

    Ok(Recipe {
        id: RecipeId::External(id),
        title,
        ingredients: extract_ingredients(record),
        steps,
        prep_time: NOT_SPECIFIED.to_string(),
        cook_time: NOT_SPECIFIED.to_string(),
        difficulty: NOT_SPECIFIED.to_string(),
        cuisine,
        source: RecipeSource::Mealdb,
    })
}

/// Reads an optional string field. Null counts as absent.
fn text_field<'a>(record: &'a Map<String, Value>, name: &str) -> CookbookResult<Option<&'a str>> {
    match record.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(CookbookError::external(
            "mealdb",
            format!("field {name} is not a string: {other}"),
        )),
    }
}

/// Collects `"<measure> <ingredient>"` entries from the numbered slots, in slot order.
///
/// Slots with a blank ingredient are skipped whatever their measure says.
/// Non-string slot values are treated as blank.
pub fn extract_ingredients(record: &Map<String, Value>) -> Vec<String> {
    let slot = |name: String| record.get(&name).and_then(Value::as_str).unwrap_or("").trim();

    (1..=INGREDIENT_SLOTS)
        .filter_map(|i| {
            let ingredient = slot(format!("strIngredient{i}"));
            if ingredient.is_empty() {
                return None;
            }
            let measure = slot(format!("strMeasure{i}"));
            Some(if measure.is_empty() {
                ingredient.to_string()
            } else {
                format!("{measure} {ingredient}")
            })
        })
        .collect()
}

/// Splits free-text instructions into steps.
///
/// Numbered text ("1. ... 2. ...") is split before each number and the
/// prefixes are stripped. Otherwise the text is split into sentences and
/// fragments of ten characters or fewer are dropped. If neither yields a
/// step, the whole cleaned text becomes the only step.
pub fn clean_instructions(instructions: &str) -> Vec<String> {
    let cleaned = instructions.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        return Vec::new();
    }

    let fragments = split_numbered(&cleaned);
    let steps: Vec<String> = if fragments.len() > 1 {
        fragments
            .into_iter()
            .map(|fragment| NUMBER_PREFIX.replace(fragment, "").trim().to_string())
            .filter(|step| !step.is_empty())
            .collect()
    } else {
        SENTENCE_END
            .split(&cleaned)
            .map(str::trim)
            .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_CHARS)
            .map(ToString::to_string)
            .collect()
    };

    if steps.is_empty() {
        vec![cleaned]
    } else {
        steps
    }
}

/// Cuts `text` at every run of whitespace that is followed by `<digits>.`.
fn split_numbered(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    for caps in NUMBERED_BOUNDARY.captures_iter(text) {
        let (Some(boundary), Some(number)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        fragments.push(&text[start..boundary.start()]);
        start = number.start();
    }
    fragments.push(&text[start..]);
    fragments
}
