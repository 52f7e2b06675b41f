use serde::{Serialize, Deserialize};

pub mod errors;
pub mod modules;
pub mod routes {
    pub mod api {
        pub mod report;
    }
}


/// One line of the qualifying report.
#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct ReportRow {
    pub position: usize,
    pub code: String,
    pub name: String,
    pub team: String,
    pub lap_time: String,
    pub lap_seconds: f64,
}

#[derive(Clone, Serialize, PartialEq, Eq, Deserialize, Debug)]
pub struct DriverListing {
    pub code: String,
    pub name: String,
    pub team: String,
}

#[derive(Clone, Copy, Serialize, PartialEq, Eq, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum LapStatus {
    Complete,
    Incomplete,
}

#[derive(Clone, Serialize, PartialEq, Eq, Deserialize, Debug)]
pub struct DriverDetail {
    pub code: String,
    pub name: String,
    pub team: String,
    pub lap_time: Option<String>,
    pub status: LapStatus,
}
