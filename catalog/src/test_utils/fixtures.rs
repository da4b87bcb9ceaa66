//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates valid data unless its name says otherwise.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::app::CreateCategoryInput;
use crate::domain::entities::Category;

const CATEGORY_NAMES: &[&str] = &[
    "Movies",
    "Documentaries",
    "Series",
    "Anime",
    "Kids",
    "Stand-up Comedy",
    "Science Fiction",
    "Thrillers",
    "Music Videos",
    "Sports",
];

const DESCRIPTIONS: &[&str] = &[
    "Feature-length films across every genre.",
    "Real stories about real people, places and events.",
    "Episodic shows released season by season.",
    "",
    "Curated picks refreshed every week for the whole family.",
];

/// A name between 3 and 255 characters
pub fn valid_category_name() -> String {
    let mut rng = rand::thread_rng();
    let base = CATEGORY_NAMES.choose(&mut rng).copied().unwrap_or("Movies");
    format!("{} {}", base, rng.gen_range(1..1000))
}

/// A description of at most 10 000 characters
pub fn valid_category_description() -> String {
    let mut rng = rand::thread_rng();
    DESCRIPTIONS
        .choose(&mut rng)
        .copied()
        .unwrap_or_default()
        .to_string()
}

pub fn random_bool() -> bool {
    rand::thread_rng().gen_bool(0.5)
}

/// Create a test category with random valid values
pub fn test_category() -> Category {
    Category::new(
        &valid_category_name(),
        Some(valid_category_description().as_str()),
        random_bool(),
    )
    .expect("fixture category is valid")
}

/// Create an active test category with a specific name
pub fn test_category_named(name: &str) -> Category {
    Category::new(name, Some(valid_category_description().as_str()), true)
        .expect("fixture category name is valid")
}

pub fn valid_create_input() -> CreateCategoryInput {
    CreateCategoryInput::new(valid_category_name(), Some(valid_category_description()))
        .active(random_bool())
}

/// Inputs the entity rejects, paired with the message it reports
pub fn invalid_create_inputs() -> Vec<(CreateCategoryInput, &'static str)> {
    let short_name: String = valid_category_name().chars().take(2).collect();

    let mut long_name = String::new();
    while long_name.chars().count() <= 255 {
        long_name.push_str(&valid_category_name());
        long_name.push(' ');
    }

    vec![
        (
            CreateCategoryInput::new(short_name, Some(valid_category_description())),
            "Name should be at least 3 characters long",
        ),
        (
            CreateCategoryInput::new(long_name, Some(valid_category_description())),
            "Name should be less or equals 255 characters long",
        ),
        (
            CreateCategoryInput::new("   ", Some(valid_category_description())),
            "Name should not be empty or null",
        ),
        (
            CreateCategoryInput::new(valid_category_name(), None),
            "Description should not be null",
        ),
        (
            CreateCategoryInput::new(valid_category_name(), Some("d".repeat(10_001))),
            "Description should be less or equals 10000 characters long",
        ),
    ]
}
