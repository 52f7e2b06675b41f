use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::NaiveDateTime;
use log::{debug, error, info, warn};
use regex::Regex;
use snafu::{ensure, OptionExt, ResultExt};

use crate::errors::{
    CustomResult, EncodingSnafu, IdentityLineSnafu, IoSnafu, MalformedLogLineSnafu, NegativeLapSnafu,
    TimestampSnafu,
};
use crate::modules::helpers::config::Config;
use crate::modules::models::lap_record::DriverLapRecord;

/// Width of the driver code that prefixes every log line. There is no
/// delimiter between the code and the timestamp.
pub const CODE_WIDTH: usize = 3;

/// Timestamp layout of the start and end logs, e.g. `2018-05-24_12:02:58.917`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S%.3f";

/// Length of a timestamp written in [`TIMESTAMP_FORMAT`].
pub const TIMESTAMP_WIDTH: usize = 23;

/// Field separator of the abbreviations file: `CODE_Full Name_TEAM`.
pub const IDENTITY_DELIMITER: char = '_';

fn identity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let d = regex::escape(&IDENTITY_DELIMITER.to_string());
        Regex::new(&format!(r"^([^{d}]+){d}([^{d}]+){d}([^{d}]+)$"))
            .expect("identity pattern is a valid regex")
    })
}

// `BufRead::lines` reports bytes that are not UTF-8 as `InvalidData`
fn checked_line(path: &Path, line_no: usize, line: std::io::Result<String>) -> CustomResult<String> {
    match line {
        Err(source) if source.kind() == ErrorKind::InvalidData => {
            Err(source).context(EncodingSnafu { path, line_no })
        }
        line => line.context(IoSnafu { path }),
    }
}

/// Turns the start log, end log and abbreviations file of a qualifying
/// session into one [`DriverLapRecord`] per driver code.
#[derive(Debug)]
pub struct LogProcessor {
    start_log_path: PathBuf,
    end_log_path: PathBuf,
    abbreviations_path: PathBuf,
    drivers: HashMap<String, DriverLapRecord>,
}

impl LogProcessor {
    /// creates an empty processor for the inputs named in `config`; nothing is read until [`LogProcessor::load`]
    pub fn new(config: &Config) -> LogProcessor {
        LogProcessor {
            start_log_path: config.start_log_path(),
            end_log_path: config.end_log_path(),
            abbreviations_path: config.abbreviations_path(),
            drivers: HashMap::new(),
        }
    }

    /// # Create a processor and load its inputs
    ///
    /// ## Arguments
    /// * `config` - Names the data directory and the three input files
    ///
    /// ## Returns
    /// * `LogProcessor` - A processor holding the fully merged records
    pub fn open(config: &Config) -> CustomResult<LogProcessor> {
        let mut processor = LogProcessor::new(config);
        processor.load()?;
        Ok(processor)
    }

    /// Wraps records that were built elsewhere. The processor has no input
    /// files, so calling [`LogProcessor::load`] on it fails.
    pub fn from_records<I: IntoIterator<Item = DriverLapRecord>>(records: I) -> LogProcessor {
        LogProcessor {
            start_log_path: PathBuf::new(),
            end_log_path: PathBuf::new(),
            abbreviations_path: PathBuf::new(),
            drivers: records
                .into_iter()
                .map(|record| (record.code().to_string(), record))
                .collect(),
        }
    }

    /// # Run a full load cycle
    /// reads the start log, the end log and the abbreviations file, in that
    /// order, and replaces the current records with the result. Nothing is
    /// kept when any step fails.
    pub fn load(&mut self) -> CustomResult<()> {
        self.drivers.clear();
        info!(target: "log_processor:load", "loading qualifying logs from {}", self.start_log_path.display());

        let drivers = match self.build() {
            Ok(drivers) => drivers,
            Err(error) => {
                error!(target: "log_processor:load", "failed to load qualifying logs: {}", error);
                return Err(error);
            }
        };

        let complete = drivers.values().filter(|d| d.is_complete()).count();
        info!(target: "log_processor:load", "loaded {} drivers ({} with a complete lap)", drivers.len(), complete);

        self.drivers = drivers;
        Ok(())
    }

    fn build(&self) -> CustomResult<HashMap<String, DriverLapRecord>> {
        let start_times = LogProcessor::read_event_log(&self.start_log_path)?;
        let end_times = LogProcessor::read_event_log(&self.end_log_path)?;

        let mut drivers = LogProcessor::build_lap_records(&start_times, &end_times)?;
        LogProcessor::integrate_identity(&mut drivers, &self.abbreviations_path)?;

        Ok(drivers)
    }

    /// # Read a start or end log
    /// every non-blank line is a driver code directly followed by a
    /// timestamp, e.g. `SVF2018-05-24_12:02:58.917`. When a code appears more
    /// than once the last line wins.
    ///
    /// ## Arguments
    /// * `path` - The log file to read
    ///
    /// ## Returns
    /// * `HashMap<String, NaiveDateTime>` - The timestamp of every code in the log
    pub fn read_event_log(path: &Path) -> CustomResult<HashMap<String, NaiveDateTime>> {
        let file = File::open(path).context(IoSnafu { path })?;
        let reader = BufReader::new(file);

        let mut times: HashMap<String, NaiveDateTime> = HashMap::new();
        for (index, line) in reader.lines().enumerate() {
            let line = checked_line(path, index + 1, line)?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let line_no = index + 1;
            ensure!(
                line.len() >= CODE_WIDTH + TIMESTAMP_WIDTH,
                MalformedLogLineSnafu { path, line_no, line }
            );

            let code = line
                .get(..CODE_WIDTH)
                .context(MalformedLogLineSnafu { path, line_no, line })?;
            let text = &line[CODE_WIDTH..];
            let time = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
                .context(TimestampSnafu { path, line_no, text })?;

            if times.insert(code.to_string(), time).is_some() {
                debug!(target: "log_processor:read_event_log", "{} appears more than once in {}, keeping the last entry", code, path.display());
            }
        }

        Ok(times)
    }

    /// # Merge start and end times into lap records
    /// the start log decides who took part: codes that only appear in the end
    /// log are dropped. A lap that ends before it starts is rejected.
    pub fn build_lap_records(
        start_times: &HashMap<String, NaiveDateTime>,
        end_times: &HashMap<String, NaiveDateTime>,
    ) -> CustomResult<HashMap<String, DriverLapRecord>> {
        let mut drivers: HashMap<String, DriverLapRecord> = HashMap::with_capacity(start_times.len());

        for (code, start) in start_times {
            let mut record = DriverLapRecord::new(code, *start);
            if let Some(end) = end_times.get(code) {
                ensure!(end >= start, NegativeLapSnafu { code: code.as_str(), start: *start, end: *end });
                record = record.with_end_time(*end);
            }
            drivers.insert(code.clone(), record);
        }

        for code in end_times.keys().filter(|code| !start_times.contains_key(*code)) {
            debug!(target: "log_processor:build_lap_records", "ignoring {}: no start time recorded", code);
        }

        Ok(drivers)
    }

    /// # Attach names and teams to the records
    /// reads `CODE_Full Name_TEAM` lines. Codes without a record are ignored,
    /// records without a line keep no identity.
    ///
    /// ## Arguments
    /// * `drivers` - The records to enrich
    /// * `path` - The abbreviations file
    pub fn integrate_identity(drivers: &mut HashMap<String, DriverLapRecord>, path: &Path) -> CustomResult<()> {
        let file = File::open(path).context(IoSnafu { path })?;
        let reader = BufReader::new(file);

        for (index, line) in reader.lines().enumerate() {
            let line = checked_line(path, index + 1, line)?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let captures = identity_pattern()
                .captures(line)
                .context(IdentityLineSnafu { path, line_no: index + 1, line })?;
            let code = &captures[1];

            match drivers.get_mut(code) {
                Some(record) => record.set_identity(&captures[2], &captures[3]),
                None => {
                    debug!(target: "log_processor:integrate_identity", "ignoring identity of {}: not in the start log", code);
                }
            }
        }

        for record in drivers.values().filter(|record| record.driver_name().is_none()) {
            warn!(target: "log_processor:integrate_identity", "no identity found for {}", record.code());
        }

        Ok(())
    }

    pub fn drivers(&self) -> &HashMap<String, DriverLapRecord> {
        &self.drivers
    }

    pub fn get(&self, code: &str) -> Option<&DriverLapRecord> {
        self.drivers.get(code)
    }
}
