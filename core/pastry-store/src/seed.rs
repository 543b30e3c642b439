use pastry_types::{Allergen, PastryId, PastryRecord, SchemaProfile};

/// The two records a fresh store starts with.
///
/// Prices are only carried under [`SchemaProfile::Full`], since the light
/// profile has no price field.
pub fn seed_records(profile: SchemaProfile) -> Vec<PastryRecord> {
    let price = match profile {
        SchemaProfile::Full => Some(20.0),
        SchemaProfile::Light => None,
    };
    vec![
        PastryRecord {
            id: PastryId::new(1),
            name: "Kanelbulle".into(),
            description: Some("King of pastries.".into()),
            price,
            allergens: Some(vec![Allergen::Gluten, Allergen::Dairy]),
        },
        PastryRecord {
            id: PastryId::new(2),
            name: "Mazarine".into(),
            description: Some("It's good.".into()),
            price,
            allergens: Some(vec![Allergen::Nuts, Allergen::Gluten]),
        },
    ]
}
