use serde::Serialize;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::config::config;
use crate::meteo::Meteo;
use crate::site_data::{self, SiteDataRequest};

pub async fn run(address: std::net::SocketAddr) {
    let meteo = Meteo::new(&config().meteo.base_url);

    let routes = routes(meteo).recover(rejection);

    warp::serve(routes).run(address).await
}

fn routes(meteo: Meteo) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let health_route = warp::path!("health").map(|| StatusCode::OK);

    let site_data_route = warp::path!("api" / "site-data")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_meteo(meteo))
        .and_then(site_report);

    // The browser frontend is served from another origin.
    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET", "POST"]);

    health_route.or(site_data_route).with(cors)
}

fn with_meteo(meteo: Meteo) -> impl Filter<Extract = (Meteo,), Error = Infallible> + Clone {
    warp::any().map(move || meteo.clone())
}

pub async fn site_report(request: SiteDataRequest, meteo: Meteo) -> Result<impl Reply, Rejection> {
    let report = site_data::collect(&meteo, &request)
        .await
        .map_err(|e| warp::reject::custom(Error(e)))?;

    Ok(warp::reply::json(&report))
}

#[derive(Debug)]
struct Error(anyhow::Error);
impl warp::reject::Reject for Error {}

#[derive(Serialize)]
struct ErrorMessage {
    code: u16,
    message: String,
}

pub async fn rejection(err: warp::Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found.")
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        (StatusCode::BAD_REQUEST, "Invalid request body.")
    } else {
        log::error!("Error: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
    };

    let json = warp::reply::json(&ErrorMessage {
        code: code.as_u16(),
        message: message.into(),
    });

    Ok(warp::reply::with_status(json, code))
}
