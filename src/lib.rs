pub mod analysis;
pub mod error;
pub mod parser;
pub mod record;
pub mod report;

pub use error::{LineError, TrafficError};
pub use parser::{parse_file, parse_reader, ParseOutcome, RejectedLine};
pub use record::{CarCount, DailyTotal, Record};
pub use report::Report;
