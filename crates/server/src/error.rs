use axum::http::StatusCode;
use booking::Error;
use log::error;

/// Maps an admission-engine error to the HTTP status it surfaces as.
pub fn into_status(err: Error) -> StatusCode {
    match err {
        Error::CarNotFound(_) | Error::ReservationNotFound(_) => StatusCode::NOT_FOUND,
        Error::CarNotAvailable(_) | Error::ReservationConflict(_) => StatusCode::CONFLICT,
        Error::InvalidDateRange => StatusCode::BAD_REQUEST,
        Error::Store(store_err) => {
            error!("entity store failure: {store_err}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod test {
    use super::into_status;
    use axum::http::StatusCode;
    use booking::Error;
    use uuid::Uuid;

    #[test]
    fn test_error_status_mapping() {
        let id = Uuid::new_v4();

        assert_eq!(into_status(Error::CarNotFound(id)), StatusCode::NOT_FOUND);
        assert_eq!(
            into_status(Error::ReservationNotFound(id)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(into_status(Error::CarNotAvailable(id)), StatusCode::CONFLICT);
        assert_eq!(
            into_status(Error::ReservationConflict(id)),
            StatusCode::CONFLICT
        );
        assert_eq!(into_status(Error::InvalidDateRange), StatusCode::BAD_REQUEST);
    }
}
