use crate::analysis::{self, Window};
use crate::error::TrafficError;
use crate::parser::ParseOutcome;
use crate::record::{CarCount, DailyTotal, Record};
use log::info;
use std::fmt;

/// Everything printed for one input file.
#[derive(Debug)]
pub struct Report {
    pub total: CarCount,
    pub per_day: Vec<DailyTotal>,
    pub top_periods: Vec<Record>,
    pub least_busy: Result<Window, TrafficError>,
    pub records_processed: usize,
    pub lines_rejected: usize,
}

impl Report {
    /// Sorts the parsed records, then runs every analysis over them.
    pub fn build(outcome: ParseOutcome) -> Self {
        let ParseOutcome { mut records, rejected } = outcome;
        analysis::sort_chronologically(&mut records);
        info!("analysing {} records", records.len());

        Report {
            total: analysis::total_cars(&records),
            per_day: analysis::cars_per_day(&records),
            top_periods: analysis::top_three_half_hours(&records),
            least_busy: analysis::least_busy_ninety_minutes(&records),
            records_processed: records.len(),
            lines_rejected: rejected.len(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total cars: {}", self.total)?;

        writeln!(f, "Cars per day:")?;
        for day in &self.per_day {
            writeln!(f, "{day}")?;
        }

        writeln!(f, "Top {} half hours:", analysis::TOP_PERIODS)?;
        for record in &self.top_periods {
            writeln!(f, "{record}")?;
        }

        match &self.least_busy {
            Ok(window) => {
                writeln!(f, "Least busy 1.5 hours ({} cars):", window.total)?;
                for record in &window.records {
                    writeln!(f, "{record}")?;
                }
            }
            Err(e) => writeln!(f, "Least busy 1.5 hours: {e}")?,
        }

        write!(
            f,
            "Records processed: {}, lines rejected: {}",
            self.records_processed, self.lines_rejected
        )
    }
}
