use std::path::PathBuf;

use chrono::NaiveDateTime;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("could not read {}: {}", path.display(), source))]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("{}:{}: malformed log line `{}`", path.display(), line_no, line))]
    MalformedLogLineError {
        path: PathBuf,
        line_no: usize,
        line: String,
    },

    #[snafu(display("{}:{}: invalid timestamp `{}`: {}", path.display(), line_no, text, source))]
    TimestampError {
        path: PathBuf,
        line_no: usize,
        text: String,
        source: chrono::ParseError,
    },

    #[snafu(display("{}:{}: not valid UTF-8: {}", path.display(), line_no, source))]
    EncodingError {
        path: PathBuf,
        line_no: usize,
        source: std::io::Error,
    },

    #[snafu(display("{}:{}: malformed identity line `{}`", path.display(), line_no, line))]
    IdentityLineError {
        path: PathBuf,
        line_no: usize,
        line: String,
    },

    #[snafu(display("lap of {} ends ({}) before it starts ({})", code, end, start))]
    NegativeLapError {
        code: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[snafu(display("no driver with code {}", code))]
    NotFoundError { code: String },
}

impl Error {
    /// True for every variant caused by malformed input data, as opposed to
    /// an unreadable file or an unknown driver.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedLogLineError { .. }
                | Error::TimestampError { .. }
                | Error::EncodingError { .. }
                | Error::IdentityLineError { .. }
                | Error::NegativeLapError { .. }
        )
    }
}

pub type CustomResult<T> = Result<T, Error>;
