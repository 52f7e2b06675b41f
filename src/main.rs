use std::sync::Arc;

use rocket::response::Redirect;
use rocket::{get, launch, routes, Build, Rocket};

use qualifying_report::modules::helpers::config::Config;
use qualifying_report::modules::helpers::logging::setup_logging;
use qualifying_report::modules::log_processor::LogProcessor;
use qualifying_report::modules::ranking_service::RankingService;
use qualifying_report::routes::api;

#[get("/")]
fn index() -> Redirect {
    Redirect::to("/report")
}

#[launch]
fn rocket() -> Rocket<Build> {
    let config = Config::init();
    setup_logging(&config).expect("Failed to setup logging");

    // the records are fully loaded before the first request can be served
    let processor = LogProcessor::open(&config).expect("Failed to load qualifying logs");
    let service = RankingService::new(Arc::new(processor));

    rocket::build()
        .manage(service)
        .mount(
            "/",
            routes![
                index,
                api::report::full_report,
                api::report::all_drivers,
                api::report::driver_detail,
            ],
        )
}
