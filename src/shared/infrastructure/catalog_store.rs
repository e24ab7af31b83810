use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::booking::domain::{Screening, Ticket};
use crate::modules::catalog::domain::Item;
use crate::modules::identity::domain::User;
use crate::shared::errors::AppResult;

/// Full contents of the catalog.
///
/// Also the shape of the JSON seed document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogSnapshot {
    pub users: Vec<User>,
    pub items: Vec<Item>,
    pub screenings: Vec<Screening>,
    pub tickets: Vec<Ticket>,
}

impl CatalogSnapshot {
    pub fn item(&self, id: Uuid) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: Uuid) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn screening(&self, id: Uuid) -> Option<&Screening> {
        self.screenings.iter().find(|s| s.id == id)
    }

    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}

/// In-memory catalog store shared by every repository implementation.
///
/// Each `read`/`write` call is one unit of work: a `write` closure runs under
/// the exclusive lock, so a check followed by an insert inside one closure
/// cannot interleave with another writer.
#[derive(Debug, Default)]
pub struct CatalogStore {
    state: RwLock<CatalogSnapshot>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        log::debug!(
            "Catalog store seeded with {} items, {} screenings, {} users",
            snapshot.items.len(),
            snapshot.screenings.len(),
            snapshot.users.len()
        );
        Self {
            state: RwLock::new(snapshot),
        }
    }

    /// Load a JSON seed document
    pub async fn load_seed_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let snapshot: CatalogSnapshot = serde_json::from_str(&raw)?;

        log::info!("Loaded catalog seed from {}", path.display());
        Ok(Self::from_snapshot(snapshot))
    }

    pub async fn read<R>(&self, f: impl FnOnce(&CatalogSnapshot) -> R) -> R {
        let state = self.state.read().await;
        f(&state)
    }

    pub async fn write<R>(&self, f: impl FnOnce(&mut CatalogSnapshot) -> R) -> R {
        let mut state = self.state.write().await;
        f(&mut state)
    }

    /// Copy of the current contents
    pub async fn snapshot(&self) -> CatalogSnapshot {
        self.read(|state| state.clone()).await
    }

    pub async fn add_item(&self, item: Item) -> Uuid {
        let id = item.id;
        self.write(|state| state.items.push(item)).await;
        id
    }

    pub async fn add_screening(&self, screening: Screening) -> Uuid {
        let id = screening.id;
        self.write(|state| state.screenings.push(screening)).await;
        id
    }

    pub async fn add_user(&self, user: User) -> Uuid {
        let id = user.id;
        self.write(|state| state.users.push(user)).await;
        id
    }
}
