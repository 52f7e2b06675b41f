use log::error;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, State};

use crate::errors::Error;
use crate::modules::ranking_service::{RankingService, SortOrder};
use crate::{DriverDetail, DriverListing, ReportRow};

#[get("/report?<order>")]
pub fn full_report(order: Option<String>, service: &State<RankingService>) -> Json<Vec<ReportRow>> {
    Json(service.full_report(SortOrder::from_param(order.as_deref())))
}

// an `order` query is accepted for parity with the report page; the listing is always by code
#[get("/report/drivers")]
pub fn all_drivers(service: &State<RankingService>) -> Json<Vec<DriverListing>> {
    Json(service.all_drivers())
}

#[get("/report/drivers/<code>")]
pub fn driver_detail(code: String, service: &State<RankingService>) -> Result<Json<DriverDetail>, Status> {
    match service.driver_detail(&code) {
        Ok(detail) => Ok(Json(detail)),
        Err(Error::NotFoundError { .. }) => Err(Status::NotFound),
        Err(error) => {
            error!(target: "routes/api/report:driver_detail", "Error getting driver {}. (error: {})", code, error);
            Err(Status::InternalServerError)
        }
    }
}
