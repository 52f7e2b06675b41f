use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

/// One driver's qualifying lap, keyed by the three letter driver code.
///
/// The start time is fixed at creation. End time and identity are filled in
/// while a load cycle merges the end log and the abbreviations file.
#[derive(Serialize, PartialEq, Eq, Debug, Clone)]
pub struct DriverLapRecord {
    code: String,
    start_time: NaiveDateTime,
    end_time: Option<NaiveDateTime>,
    driver_name: Option<String>,
    team: Option<String>,
}

impl DriverLapRecord {
    pub fn new(code: &str, start_time: NaiveDateTime) -> DriverLapRecord {
        DriverLapRecord {
            code: code.to_string(),
            start_time,
            end_time: None,
            driver_name: None,
            team: None,
        }
    }

    pub fn with_end_time(mut self, end_time: NaiveDateTime) -> DriverLapRecord {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_identity(mut self, driver_name: &str, team: &str) -> DriverLapRecord {
        self.set_identity(driver_name, team);
        self
    }

    pub(crate) fn set_identity(&mut self, driver_name: &str, team: &str) {
        self.driver_name = Some(driver_name.to_string());
        self.team = Some(team.to_string());
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn end_time(&self) -> Option<NaiveDateTime> {
        self.end_time
    }

    pub fn driver_name(&self) -> Option<&str> {
        self.driver_name.as_deref()
    }

    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }

    /// `None` until the end log has been merged in
    pub fn lap_duration(&self) -> Option<Duration> {
        self.end_time.map(|end| end.signed_duration_since(self.start_time))
    }

    pub fn is_complete(&self) -> bool {
        self.end_time.is_some()
    }

    /// the driver name, or the code when no identity was found
    pub fn display_name(&self) -> &str {
        self.driver_name.as_deref().unwrap_or(&self.code)
    }

    pub fn display_team(&self) -> &str {
        self.team.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 5, 24)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    #[test]
    fn lap_duration_is_end_minus_start() {
        let record = DriverLapRecord::new("SVF", at(12, 2, 58, 917)).with_end_time(at(12, 4, 3, 332));

        assert_eq!(record.lap_duration(), Some(Duration::milliseconds(64_415)));
        assert!(record.is_complete());
    }

    #[test]
    fn lap_duration_is_undefined_without_end_time() {
        let record = DriverLapRecord::new("SVF", at(12, 2, 58, 917));

        assert_eq!(record.lap_duration(), None);
        assert!(!record.is_complete());
    }

    #[test]
    fn display_falls_back_to_code_without_identity() {
        let anonymous = DriverLapRecord::new("XYZ", at(12, 0, 0, 0));
        let known = DriverLapRecord::new("SVF", at(12, 0, 0, 0)).with_identity("Sebastian Vettel", "FERRARI");

        assert_eq!(anonymous.display_name(), "XYZ");
        assert_eq!(anonymous.display_team(), "");
        assert_eq!(known.display_name(), "Sebastian Vettel");
        assert_eq!(known.display_team(), "FERRARI");
    }
}
