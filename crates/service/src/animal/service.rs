use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Animal, AnimalDraft, AnimalInput, AnimalKind};
use super::repository::AnimalRepository;
use super::validator;
use crate::errors::ServiceError;

/// Application service encapsulating the CRUD rules shared by every animal kind.
/// `K` fixes the group label; `R` is the storage backend.
pub struct AnimalService<K: AnimalKind, R: AnimalRepository> {
    repo: Arc<R>,
    kind: PhantomData<fn() -> K>,
}

impl<K: AnimalKind, R: AnimalRepository> AnimalService<K, R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo, kind: PhantomData } }

    pub fn group(&self) -> &'static str { K::GROUP }

    /// Every stored record of this kind.
    #[instrument(skip(self), fields(group = K::GROUP))]
    pub async fn all(&self) -> Result<Vec<Animal>, ServiceError> {
        let list = self.repo.find_all(K::GROUP).await?;
        debug!(count = list.len(), "animals_listed");
        Ok(list)
    }

    /// Validate and insert a new record; the store assigns the id.
    ///
    /// # Examples
    /// ```
    /// use service::animal::{AnimalInput, AnimalService, Cat};
    /// use service::animal::repository::mock::MockAnimalRepository;
    /// use std::sync::Arc;
    /// let svc: AnimalService<Cat, _> = AnimalService::new(Arc::new(MockAnimalRepository::default()));
    /// let cat = tokio_test::block_on(svc.create(AnimalInput::new("Tom", "Bob cat"))).unwrap();
    /// assert!(!cat.id.is_empty());
    /// assert_eq!(cat.group, "cat");
    /// ```
    #[instrument(skip(self, input), fields(group = K::GROUP))]
    pub async fn create(&self, input: AnimalInput) -> Result<Animal, ServiceError> {
        let valid = validator::validate(&input)?;
        let created = self
            .repo
            .save(AnimalDraft {
                id: None,
                name: valid.name,
                description: valid.description,
                group: K::GROUP.to_string(),
            })
            .await?;
        info!(id = %created.id, group = K::GROUP, "animal_created");
        Ok(created)
    }

    /// Fetch one record of this kind.
    ///
    /// # Examples
    /// ```
    /// use service::animal::{AnimalInput, AnimalService, Horse};
    /// use service::animal::repository::mock::MockAnimalRepository;
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let svc: AnimalService<Horse, _> = AnimalService::new(Arc::new(MockAnimalRepository::default()));
    /// let horse = tokio_test::block_on(svc.create(AnimalInput::new("Spirit", "Stallion"))).unwrap();
    /// assert_eq!(tokio_test::block_on(svc.get(&horse.id)).unwrap(), horse);
    /// assert_eq!(tokio_test::block_on(svc.get(" ")).unwrap_err(), ServiceError::id_required());
    /// ```
    #[instrument(skip(self), fields(group = K::GROUP))]
    pub async fn get(&self, id: &str) -> Result<Animal, ServiceError> {
        let key = parse_id(id)?.ok_or(ServiceError::NotFound)?;
        self.repo.find_by_id(K::GROUP, key).await?.ok_or(ServiceError::NotFound)
    }

    /// Overwrite name and description of an existing record. The payload is
    /// validated before the id is looked up.
    #[instrument(skip(self, input), fields(group = K::GROUP, id = ?input.id))]
    pub async fn update(&self, input: AnimalInput) -> Result<(), ServiceError> {
        let valid = validator::validate(&input)?;
        let key = input
            .id
            .as_deref()
            .and_then(parse_key)
            .ok_or(ServiceError::NotFound)?;
        if self.repo.find_by_id(K::GROUP, key).await?.is_none() {
            return Err(ServiceError::NotFound);
        }
        self.repo
            .save(AnimalDraft {
                id: Some(key),
                name: valid.name,
                description: valid.description,
                group: K::GROUP.to_string(),
            })
            .await?;
        info!(id = key, group = K::GROUP, "animal_updated");
        Ok(())
    }

    #[instrument(skip(self), fields(group = K::GROUP))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let key = parse_id(id)?.ok_or(ServiceError::NotFound)?;
        if self.repo.find_by_id(K::GROUP, key).await?.is_none() {
            return Err(ServiceError::NotFound);
        }
        if !self.repo.delete_by_id(key).await? {
            return Err(ServiceError::NotFound);
        }
        info!(id = key, group = K::GROUP, "animal_deleted");
        Ok(())
    }
}

/// Blank ids are rejected; ids that cannot be a store key yield `None`.
fn parse_id(raw: &str) -> Result<Option<i32>, ServiceError> {
    if raw.trim().is_empty() {
        return Err(ServiceError::id_required());
    }
    Ok(parse_key(raw))
}

/// Only the canonical decimal form names a record: no sign, padding or leading zeros.
fn parse_key(raw: &str) -> Option<i32> {
    let canonical = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw == "0" || !raw.starts_with('0'));
    if !canonical {
        return None;
    }
    raw.parse::<i32>().ok()
}
