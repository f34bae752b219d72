use crate::entities::cars;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use uuid::Uuid;

pub struct CarService;

impl CarService {
    pub async fn get_cars(db: &DatabaseConnection) -> Result<Vec<cars::Model>, DbErr> {
        cars::Entity::find().all(db).await
    }

    pub async fn get_car_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<cars::Model>, DbErr> {
        cars::Entity::find_by_id(id).one(db).await
    }

    pub async fn get_cars_by_ids(
        db: &DatabaseConnection,
        ids: Vec<Uuid>,
    ) -> Result<Vec<cars::Model>, DbErr> {
        cars::Entity::find()
            .filter(cars::Column::Id.is_in(ids))
            .all(db)
            .await
    }

    /// Flips the admin availability flag. Returns `None` when the car does
    /// not exist.
    pub async fn update_availability(
        db: &DatabaseConnection,
        id: Uuid,
        availability: bool,
    ) -> Result<Option<cars::Model>, DbErr> {
        let Some(model) = cars::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: cars::ActiveModel = model.into();
        active.availability = Set(availability);
        active.updated_at = Set(chrono::Utc::now().naive_utc());

        Ok(Some(active.update(db).await?))
    }

    pub async fn update_daily_rate(
        db: &DatabaseConnection,
        id: Uuid,
        daily_rate: f64,
    ) -> Result<Option<cars::Model>, DbErr> {
        let Some(model) = cars::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: cars::ActiveModel = model.into();
        active.daily_rate = Set(daily_rate);
        active.updated_at = Set(chrono::Utc::now().naive_utc());

        Ok(Some(active.update(db).await?))
    }
}
