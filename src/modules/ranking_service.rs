use std::sync::Arc;

use snafu::OptionExt;

use crate::errors::{CustomResult, NotFoundSnafu};
use crate::modules::helpers::lap::LapHelper;
use crate::modules::log_processor::LogProcessor;
use crate::modules::models::lap_record::DriverLapRecord;
use crate::{DriverDetail, DriverListing, LapStatus, ReportRow};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortOrder {
    /// fastest lap first
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// `"desc"` sorts descending, anything else (or nothing) ascending
    pub fn from_param(order: Option<&str>) -> SortOrder {
        match order {
            Some("desc") => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }
}

/// Read-only views over the records of a loaded [`LogProcessor`].
///
/// Equal lap durations are ordered by driver code. A descending ranking is
/// the ascending one reversed, so ties come out in reverse code order there.
#[derive(Debug, Clone)]
pub struct RankingService {
    processor: Arc<LogProcessor>,
}

impl RankingService {
    pub fn new(processor: Arc<LogProcessor>) -> RankingService {
        RankingService { processor }
    }

    /// # Rank the drivers with a complete lap
    ///
    /// ## Arguments
    /// * `order` - Fastest first when ascending
    ///
    /// ## Returns
    /// * `Vec<&DriverLapRecord>` - The complete records, sorted by lap duration
    pub fn rank(&self, order: SortOrder) -> Vec<&DriverLapRecord> {
        let mut ranked: Vec<&DriverLapRecord> = self
            .processor
            .drivers()
            .values()
            .filter(|record| record.is_complete())
            .collect();

        ranked.sort_by(|a, b| {
            a.lap_duration()
                .cmp(&b.lap_duration())
                .then_with(|| a.code().cmp(b.code()))
        });

        if order == SortOrder::Descending {
            ranked.reverse();
        }

        ranked
    }

    pub fn full_report(&self, order: SortOrder) -> Vec<ReportRow> {
        self.rank(order)
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let duration = record.lap_duration()?;
                Some(ReportRow {
                    position: index + 1,
                    code: record.code().to_string(),
                    name: record.display_name().to_string(),
                    team: record.display_team().to_string(),
                    lap_time: LapHelper::format_lap_time(&duration),
                    lap_seconds: LapHelper::lap_seconds(&duration),
                })
            })
            .collect()
    }

    /// every known driver, complete or not, ordered by code
    pub fn all_drivers(&self) -> Vec<DriverListing> {
        let mut drivers: Vec<&DriverLapRecord> = self.processor.drivers().values().collect();
        drivers.sort_by(|a, b| a.code().cmp(b.code()));

        drivers
            .into_iter()
            .map(|record| DriverListing {
                code: record.code().to_string(),
                name: record.display_name().to_string(),
                team: record.display_team().to_string(),
            })
            .collect()
    }

    pub fn driver_detail(&self, code: &str) -> CustomResult<DriverDetail> {
        let record = self.processor.get(code).context(NotFoundSnafu { code })?;

        let (lap_time, status) = match record.lap_duration() {
            Some(duration) => (Some(LapHelper::format_lap_time(&duration)), LapStatus::Complete),
            None => (None, LapStatus::Incomplete),
        };

        Ok(DriverDetail {
            code: record.code().to_string(),
            name: record.display_name().to_string(),
            team: record.display_team().to_string(),
            lap_time,
            status,
        })
    }
}
