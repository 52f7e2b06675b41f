pub mod log_processor;
pub mod ranking_service;
pub mod models {
    pub mod lap_record;
}

pub mod helpers {
    pub mod lap;
    pub mod math;

    pub mod config;
    pub mod logging;
}
