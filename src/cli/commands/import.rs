use anyhow::{Context, Result};
use model::entities::{people, planet, user};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use tracing::{debug, info, trace};

use crate::config::connect_database;

/// Seed document accepted by the `import` command
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub people: Vec<SeedPerson>,
    #[serde(default)]
    pub planets: Vec<SeedPlanet>,
}

#[derive(Debug, Deserialize)]
pub struct SeedUser {
    pub id: Option<i32>,
    pub email: String,
    pub password: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct SeedPerson {
    pub id: Option<i32>,
    pub name: String,
    pub height: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedPlanet {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
}

/// Row counts produced by one import run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub users_inserted: usize,
    pub people_inserted: usize,
    pub planets_inserted: usize,
    pub skipped: usize,
}

fn optional_id(id: Option<i32>) -> ActiveValue<i32> {
    match id {
        Some(id) => Set(id),
        None => ActiveValue::NotSet,
    }
}

pub async fn import(json_path: &str, database_url: &str) -> Result<()> {
    trace!("Entering import function");
    info!("Starting seed data import");
    debug!("JSON path: {}", json_path);

    let file = File::open(json_path).with_context(|| format!("Failed to open file: {}", json_path))?;
    let seed: SeedData = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse seed file: {}", json_path))?;
    info!(
        "Loaded {} users, {} people and {} planets",
        seed.users.len(),
        seed.people.len(),
        seed.planets.len()
    );

    let db = connect_database(database_url).await?;
    let summary = import_seed_data(&db, &seed).await?;

    info!(
        "Import finished: {} users, {} people, {} planets inserted, {} skipped",
        summary.users_inserted, summary.people_inserted, summary.planets_inserted, summary.skipped
    );
    Ok(())
}

/// Insert every seed row that is not already present, in one transaction.
pub async fn import_seed_data<C>(db: &C, seed: &SeedData) -> Result<ImportSummary>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await.context("Failed to start transaction")?;
    let mut summary = ImportSummary::default();

    info!("Importing users...");
    for seed_user in &seed.users {
        let id_taken = match seed_user.id {
            Some(id) => user::Entity::find_by_id(id).one(&txn).await?.is_some(),
            None => false,
        };
        let email_taken = user::Entity::find()
            .filter(user::Column::Email.eq(seed_user.email.as_str()))
            .one(&txn)
            .await?
            .is_some();
        if id_taken || email_taken {
            debug!("Skipping existing user {}", seed_user.email);
            summary.skipped += 1;
            continue;
        }

        user::ActiveModel {
            id: optional_id(seed_user.id),
            email: Set(seed_user.email.clone()),
            password: Set(seed_user.password.clone()),
            is_active: Set(seed_user.is_active),
        }
        .insert(&txn)
        .await
        .with_context(|| format!("Failed to insert user {}", seed_user.email))?;
        summary.users_inserted += 1;
    }

    info!("Importing people...");
    for person in &seed.people {
        if let Some(id) = person.id {
            if people::Entity::find_by_id(id).one(&txn).await?.is_some() {
                debug!("Skipping existing person {}", id);
                summary.skipped += 1;
                continue;
            }
        }

        people::ActiveModel {
            id: optional_id(person.id),
            name: Set(person.name.clone()),
            height: Set(person.height.clone()),
            gender: Set(person.gender.clone()),
        }
        .insert(&txn)
        .await
        .with_context(|| format!("Failed to insert person {}", person.name))?;
        summary.people_inserted += 1;
    }

    info!("Importing planets...");
    for seed_planet in &seed.planets {
        if let Some(id) = seed_planet.id {
            if planet::Entity::find_by_id(id).one(&txn).await?.is_some() {
                debug!("Skipping existing planet {}", id);
                summary.skipped += 1;
                continue;
            }
        }

        planet::ActiveModel {
            id: optional_id(seed_planet.id),
            name: Set(seed_planet.name.clone()),
            terrain: Set(seed_planet.terrain.clone()),
            population: Set(seed_planet.population.clone()),
        }
        .insert(&txn)
        .await
        .with_context(|| format!("Failed to insert planet {:?}", seed_planet.name))?;
        summary.planets_inserted += 1;
    }

    txn.commit().await.context("Failed to commit import")?;
    Ok(summary)
}
