use tracing::debug;

use crate::{error::AppError, services::trip_api::TripApi};

/// Finds the id of the trip called `name`, ignoring case. Fetches the full
/// list on every call; the first match in list order wins.
pub async fn resolve_trip_id<A>(api: &A, name: &str) -> Result<Option<String>, AppError>
where
    A: TripApi + ?Sized,
{
    let wanted = name.to_lowercase();
    let trips = api.list_trips().await?;
    let found = trips
        .into_iter()
        .find(|trip| trip.name.to_lowercase() == wanted)
        .map(|trip| trip.id);
    debug!(name, trip_id = ?found, "resolved trip name");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::models::trip::{CancelAck, Trip, TripDetail};

    struct ListOnly(Result<Vec<Trip>, ()>);

    #[async_trait]
    impl TripApi for ListOnly {
        async fn list_trips(&self) -> Result<Vec<Trip>, AppError> {
            self.0
                .clone()
                .map_err(|_| AppError::Decode("list unavailable".into()))
        }

        async fn get_trip_detail(&self, _trip_id: &str) -> Result<TripDetail, AppError> {
            unreachable!("resolver never fetches details")
        }

        async fn cancel_trip(&self, _trip_id: &str) -> Result<CancelAck, AppError> {
            unreachable!("resolver never cancels")
        }
    }

    fn trip(id: &str, name: &str) -> Trip {
        Trip {
            id: id.into(),
            name: name.into(),
            start_date: "2025-03-05T09:00:00".into(),
        }
    }

    #[tokio::test]
    async fn matches_case_insensitively() {
        let api = ListOnly(Ok(vec![trip("7", "Oslo"), trip("42", "Paris")]));
        assert_eq!(resolve_trip_id(&api, "Paris").await.unwrap().as_deref(), Some("42"));
        assert_eq!(resolve_trip_id(&api, "paris").await.unwrap().as_deref(), Some("42"));
        assert_eq!(resolve_trip_id(&api, "PARIS").await.unwrap().as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn first_duplicate_wins() {
        let api = ListOnly(Ok(vec![trip("1", "Berlin"), trip("2", "berlin")]));
        assert_eq!(resolve_trip_id(&api, "BERLIN").await.unwrap().as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn no_match_is_none() {
        let api = ListOnly(Ok(vec![trip("42", "Paris")]));
        assert_eq!(resolve_trip_id(&api, "Rome").await.unwrap(), None);
        assert_eq!(resolve_trip_id(&ListOnly(Ok(vec![])), "Rome").await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_failure_propagates() {
        let api = ListOnly(Err(()));
        assert!(resolve_trip_id(&api, "Paris").await.is_err());
    }
}
