use async_trait::async_trait;

use super::domain::{Animal, AnimalDraft};
use crate::errors::ServiceError;

/// Repository abstraction for animal persistence.
///
/// Reads are scoped by `group` so one kind never sees another kind's rows.
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// Insert when `draft.id` is `None`, otherwise overwrite the row with that id.
    async fn save(&self, draft: AnimalDraft) -> Result<Animal, ServiceError>;
    async fn find_by_id(&self, group: &str, id: i32) -> Result<Option<Animal>, ServiceError>;
    async fn find_all(&self, group: &str) -> Result<Vec<Animal>, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAnimalRepository {
        rows: Mutex<BTreeMap<i32, AnimalDraft>>, // key: id
        next_id: Mutex<i32>,
        calls: AtomicUsize,
    }

    impl MockAnimalRepository {
        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        /// Number of repository operations served so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn hit(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn to_animal(id: i32, draft: &AnimalDraft) -> Animal {
        Animal {
            id: id.to_string(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            group: draft.group.clone(),
        }
    }

    #[async_trait]
    impl AnimalRepository for MockAnimalRepository {
        async fn save(&self, draft: AnimalDraft) -> Result<Animal, ServiceError> {
            self.hit();
            let mut rows = self.rows.lock().unwrap();
            let id = match draft.id {
                Some(id) if rows.contains_key(&id) => id,
                Some(_) => return Err(ServiceError::NotFound),
                None => {
                    let mut next = self.next_id.lock().unwrap();
                    *next += 1;
                    *next
                }
            };
            let saved = to_animal(id, &draft);
            rows.insert(id, AnimalDraft { id: Some(id), ..draft });
            Ok(saved)
        }

        async fn find_by_id(&self, group: &str, id: i32) -> Result<Option<Animal>, ServiceError> {
            self.hit();
            let rows = self.rows.lock().unwrap();
            Ok(rows.get(&id).filter(|r| r.group == group).map(|r| to_animal(id, r)))
        }

        async fn find_all(&self, group: &str) -> Result<Vec<Animal>, ServiceError> {
            self.hit();
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().filter(|(_, r)| r.group == group).map(|(id, r)| to_animal(*id, r)).collect())
        }

        async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
            self.hit();
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.remove(&id).is_some())
        }
    }
}
