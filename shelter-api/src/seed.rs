//! Demo content inserted into empty collections at startup.

use shelter_core::collection::TypedCollection;
use shelter_core::document::Record;
use shelter_core::error::DocumentStoreResult;
use shelter_core::store::DynDocumentStore;

use crate::schema::{Animal, Gender, Size, Species, Story};

/// How many records each collection received.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub animals: usize,
    pub stories: usize,
}

/// Seeds every empty collection; collections that already hold data are left alone.
pub async fn seed_store(store: &DynDocumentStore) -> DocumentStoreResult<SeedReport> {
    let animals = seed_collection(store.typed_collection::<Animal>(), sample_animals()).await?;
    let stories = seed_collection(store.typed_collection::<Story>(), sample_stories()).await?;

    Ok(SeedReport { animals, stories })
}

/// Runs [`seed_store`], logging instead of failing.
pub async fn seed_or_warn(store: &DynDocumentStore) {
    match seed_store(store).await {
        Ok(report) => tracing::info!(animals = report.animals, stories = report.stories, "Seeding finished"),
        Err(e) => tracing::warn!(error = %e, "Seeding skipped"),
    }
}

async fn seed_collection<R: Record>(collection: TypedCollection<'_, R>, records: Vec<R>) -> DocumentStoreResult<usize> {
    if collection.count().await? > 0 {
        tracing::debug!(collection = collection.name(), "Collection not empty, not seeding");
        return Ok(0);
    }

    Ok(collection.insert_many(&records).await?.len())
}

fn sample_animals() -> Vec<Animal> {
    vec![
        Animal {
            name: "Luna".to_string(),
            species: Species::Dog,
            breed: Some("Labrador Mix".to_string()),
            age: 3,
            size: Size::Large,
            gender: Some(Gender::Female),
            description: Some("Playful, gentle, loves long walks and belly rubs.".to_string()),
            photos: vec![
                "https://images.unsplash.com/photo-1543466835-00a7907e9de1?q=80&w=1200&auto=format&fit=crop"
                    .to_string(),
            ],
            featured: true,
            location: Some("Shelter A".to_string()),
            good_with_kids: Some(true),
            good_with_pets: Some(true),
        },
        Animal {
            name: "Milo".to_string(),
            species: Species::Cat,
            breed: Some("Tabby".to_string()),
            age: 2,
            size: Size::Medium,
            gender: Some(Gender::Male),
            description: Some("Calm cuddle buddy who enjoys sunny windows.".to_string()),
            photos: vec![
                "https://images.unsplash.com/photo-1518791841217-8f162f1e1131?q=80&w=1200&auto=format&fit=crop"
                    .to_string(),
            ],
            featured: true,
            location: Some("Shelter B".to_string()),
            good_with_kids: Some(true),
            good_with_pets: Some(false),
        },
        Animal {
            name: "Poppy".to_string(),
            species: Species::Rabbit,
            breed: Some("Mini Rex".to_string()),
            age: 1,
            size: Size::Small,
            gender: Some(Gender::Female),
            description: Some("Curious and gentle, loves greens.".to_string()),
            photos: vec![
                "https://images.unsplash.com/photo-1452857297128-d9c29adba80b?q=80&w=1200&auto=format&fit=crop"
                    .to_string(),
            ],
            featured: false,
            location: Some("Foster Home".to_string()),
            good_with_kids: None,
            good_with_pets: None,
        },
    ]
}

fn sample_stories() -> Vec<Story> {
    vec![
        Story {
            title: "Luna found her forever home".to_string(),
            animal_name: Some("Luna".to_string()),
            content: "After weeks of training and love, Luna is now hiking every weekend with her new family!"
                .to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?q=80&w=1200&auto=format&fit=crop"
                    .to_string(),
            ),
        },
        Story {
            title: "Milo the office cat".to_string(),
            animal_name: Some("Milo".to_string()),
            content: "Milo helps his adopter debug code and nap responsibly.".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1511044568932-338cba0ad803?q=80&w=1200&auto=format&fit=crop"
                    .to_string(),
            ),
        },
    ]
}
