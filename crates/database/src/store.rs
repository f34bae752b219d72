//! Sea-orm implementation of the booking entity-store capabilities.
//!
//! The car's reservation set is derived from the `reservations` table by
//! `car_id` on every read; updating a car therefore only touches the car row
//! itself.

use async_trait::async_trait;
use booking::domain::{Car, NewReservation, Reservation};
use booking::store::{CarStore, ReservationStore, StoreError};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::entities::{cars, reservations};

#[derive(Debug, Clone)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain_reservation(model: reservations::Model) -> Reservation {
    Reservation {
        id: model.id,
        car_id: model.car_id,
        user_id: model.user_id,
        pick_up: model.pick_up_date_time,
        drop_off: model.drop_off_date_time,
        status: model.status,
        total_price: model.total_price,
    }
}

fn to_domain_car(model: cars::Model, reservations: Vec<reservations::Model>) -> Car {
    Car {
        id: model.id,
        availability: model.availability,
        reservations: reservations.into_iter().map(to_domain_reservation).collect(),
    }
}

#[async_trait]
impl CarStore for SeaOrmStore {
    async fn car(&self, id: Uuid) -> Result<Option<Car>, StoreError> {
        let Some(car) = cars::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(StoreError::new)?
        else {
            return Ok(None);
        };

        let reservations = reservations::Entity::find()
            .filter(reservations::Column::CarId.eq(id))
            .all(&self.db)
            .await
            .map_err(StoreError::new)?;

        Ok(Some(to_domain_car(car, reservations)))
    }

    async fn cars(&self) -> Result<Vec<Car>, StoreError> {
        let fleet = cars::Entity::find()
            .find_with_related(reservations::Entity)
            .all(&self.db)
            .await
            .map_err(StoreError::new)?;

        Ok(fleet
            .into_iter()
            .map(|(car, reservations)| to_domain_car(car, reservations))
            .collect())
    }

    async fn update_car(&self, car: Car) -> Result<Car, StoreError> {
        let model = cars::Entity::find_by_id(car.id)
            .one(&self.db)
            .await
            .map_err(StoreError::new)?
            .ok_or_else(|| {
                StoreError::new(DbErr::RecordNotFound(format!("car {}", car.id)))
            })?;

        let mut active: cars::ActiveModel = model.into();
        active.availability = Set(car.availability);
        active.updated_at = Set(chrono::Utc::now().naive_utc());
        active.update(&self.db).await.map_err(StoreError::new)?;

        Ok(car)
    }
}

#[async_trait]
impl ReservationStore for SeaOrmStore {
    async fn reservation(&self, id: Uuid) -> Result<Option<Reservation>, StoreError> {
        let model = reservations::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(StoreError::new)?;

        Ok(model.map(to_domain_reservation))
    }

    async fn reservations(&self) -> Result<Vec<Reservation>, StoreError> {
        let models = reservations::Entity::find()
            .all(&self.db)
            .await
            .map_err(StoreError::new)?;

        Ok(models.into_iter().map(to_domain_reservation).collect())
    }

    async fn add_reservation(&self, draft: NewReservation) -> Result<Reservation, StoreError> {
        let now = chrono::Utc::now().naive_utc();

        let model = reservations::ActiveModel {
            id: Set(Uuid::new_v4()),
            car_id: Set(draft.car_id),
            user_id: Set(draft.user_id),
            pick_up_date_time: Set(draft.pick_up),
            drop_off_date_time: Set(draft.drop_off),
            status: Set(draft.status),
            total_price: Set(draft.total_price),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(StoreError::new)?;

        Ok(to_domain_reservation(model))
    }

    async fn update_reservation(
        &self,
        reservation: Reservation,
    ) -> Result<Reservation, StoreError> {
        let model = reservations::Entity::find_by_id(reservation.id)
            .one(&self.db)
            .await
            .map_err(StoreError::new)?
            .ok_or_else(|| {
                StoreError::new(DbErr::RecordNotFound(format!(
                    "reservation {}",
                    reservation.id
                )))
            })?;

        let mut active: reservations::ActiveModel = model.into();
        active.status = Set(reservation.status);
        active.total_price = Set(reservation.total_price);
        active.updated_at = Set(chrono::Utc::now().naive_utc());
        let updated = active.update(&self.db).await.map_err(StoreError::new)?;

        Ok(to_domain_reservation(updated))
    }
}
