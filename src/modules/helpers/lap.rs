use chrono::Duration;

use crate::modules::helpers::math::Math;

pub struct LapHelper {}

impl LapHelper {
    /// # Format a lap duration for display
    /// renders the duration as `M:SS.mmm`, e.g. `1:04.415`
    ///
    /// ## Arguments
    /// * `duration` - The elapsed time of the lap, expected to be non-negative
    ///
    /// ## Returns
    /// * `String` - The formatted lap time
    pub fn format_lap_time(duration: &Duration) -> String {
        let total_millis = duration.num_milliseconds();
        let minutes = total_millis / 60_000;
        let seconds = (total_millis % 60_000) / 1_000;
        let millis = total_millis % 1_000;

        format!("{}:{:02}.{:03}", minutes, seconds, millis)
    }

    /// lap duration in seconds, rounded to the millisecond
    pub fn lap_seconds(duration: &Duration) -> f64 {
        Math::round_float_to_n_decimals(duration.num_milliseconds() as f64 / 1_000.0, 3)
    }
}
