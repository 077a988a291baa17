use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use models::animal;

use crate::animal::domain::{Animal, AnimalDraft};
use crate::animal::repository::AnimalRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmAnimalRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAnimalRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn to_animal(m: animal::Model) -> Animal {
    Animal { id: m.id.to_string(), name: m.name, description: m.description, group: m.group }
}

#[async_trait::async_trait]
impl AnimalRepository for SeaOrmAnimalRepository {
    async fn save(&self, draft: AnimalDraft) -> Result<Animal, ServiceError> {
        let mut am = animal::ActiveModel {
            name: Set(draft.name),
            description: Set(draft.description),
            group: Set(draft.group),
            ..Default::default()
        };
        let saved = match draft.id {
            Some(id) => {
                am.id = Set(id);
                am.update(&self.db).await?
            }
            None => am.insert(&self.db).await?,
        };
        Ok(to_animal(saved))
    }

    async fn find_by_id(&self, group: &str, id: i32) -> Result<Option<Animal>, ServiceError> {
        let res = animal::Entity::find_by_id(id)
            .filter(animal::Column::Group.eq(group))
            .one(&self.db)
            .await?;
        Ok(res.map(to_animal))
    }

    async fn find_all(&self, group: &str) -> Result<Vec<Animal>, ServiceError> {
        let rows = animal::Entity::find()
            .filter(animal::Column::Group.eq(group))
            .order_by_asc(animal::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(to_animal).collect())
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        let res = animal::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
