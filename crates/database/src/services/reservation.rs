use crate::entities::reservations;
use models::reservation_status::ReservationStatus;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct ReservationService;

impl ReservationService {
    pub async fn get_reservations(
        db: &DatabaseConnection,
    ) -> Result<Vec<reservations::Model>, DbErr> {
        reservations::Entity::find()
            .order_by_asc(reservations::Column::PickUpDateTime)
            .all(db)
            .await
    }

    pub async fn get_reservation_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<reservations::Model>, DbErr> {
        reservations::Entity::find_by_id(id).one(db).await
    }

    pub async fn get_pending_reservations(
        db: &DatabaseConnection,
    ) -> Result<Vec<reservations::Model>, DbErr> {
        reservations::Entity::find()
            .filter(reservations::Column::Status.eq(ReservationStatus::Pending))
            .order_by_asc(reservations::Column::PickUpDateTime)
            .all(db)
            .await
    }

    pub async fn get_user_reservations(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> Result<Vec<reservations::Model>, DbErr> {
        reservations::Entity::find()
            .filter(reservations::Column::UserId.eq(user_id))
            .order_by_asc(reservations::Column::PickUpDateTime)
            .all(db)
            .await
    }
}
