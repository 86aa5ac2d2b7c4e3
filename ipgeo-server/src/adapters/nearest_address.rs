use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde::Serialize;

use super::app_state::AppState;
use crate::domain::{
    errors::AppError,
    models::{AddressRecord, Coordinates},
    ports::geocoding::{AddressProvider, IpLocator, PostalCodeProvider},
};

const MISSING_IP: &str = "IP é necessário";

/// The first `ip` value, unless it is empty. Later repeats are ignored.
fn first_ip(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find(|(key, _)| key == "ip")
        .map(|(_, value)| value)
        .filter(|ip| !ip.is_empty())
}

fn missing_ip() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(MissingIpBody { error: MISSING_IP }),
    )
        .into_response()
}

#[derive(Debug, Serialize)]
struct NearestAddressBody {
    ip: String,
    coordinates: Coordinates,
    address: AddressRecord,
}

#[derive(Debug, Serialize)]
struct PartialCoordinates {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Serialize)]
struct FailureBody {
    ip: String,
    coordinates: PartialCoordinates,
    error: String,
}

#[derive(Debug, Serialize)]
struct MissingIpBody {
    error: &'static str,
}

/// A lookup that failed after the IP was accepted, with whatever was resolved so far.
#[derive(Debug)]
pub struct LookupFailure {
    ip: String,
    coordinates: Option<Coordinates>,
    error: AppError,
}

impl IntoResponse for LookupFailure {
    fn into_response(self) -> Response {
        tracing::error!(ip = %self.ip, error = %self.error, "nearest address lookup failed");
        let body = FailureBody {
            ip: self.ip,
            coordinates: PartialCoordinates {
                latitude: self.coordinates.map(|c| c.latitude),
                longitude: self.coordinates.map(|c| c.longitude),
            },
            error: self.error.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub async fn nearest_address_handler<L, A, F>(
    State(state): State<AppState<L, A, F>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response
where
    L: IpLocator,
    A: AddressProvider,
    F: PostalCodeProvider,
{
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable query string");
            return missing_ip();
        }
    };
    let Some(ip) = first_ip(params) else {
        return missing_ip();
    };

    let coordinates = match state.service.coordinates_for(&ip).await {
        Ok(coordinates) => coordinates,
        Err(error) => {
            return LookupFailure {
                ip,
                coordinates: None,
                error,
            }
            .into_response()
        }
    };

    match state.service.nearest_address(coordinates).await {
        Ok(address) => {
            tracing::info!(%ip, ?coordinates, "resolved nearest address");
            (
                StatusCode::OK,
                Json(NearestAddressBody {
                    ip,
                    coordinates,
                    address,
                }),
            )
                .into_response()
        }
        Err(error) => LookupFailure {
            ip,
            coordinates: Some(coordinates),
            error,
        }
        .into_response(),
    }
}
