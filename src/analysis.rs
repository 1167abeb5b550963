//! The four summaries computed over a run's records.
//!
//! Everything except [`sort_chronologically`] expects its input already in
//! ascending timestamp order.

use crate::error::TrafficError;
use crate::record::{CarCount, DailyTotal, Record};
use chrono::NaiveDate;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Number of busiest half hours reported.
pub const TOP_PERIODS: usize = 3;
/// Three half-hour records make up 1.5 hours.
pub const WINDOW_LEN: usize = 3;

/// Stable sort by timestamp; records sharing a timestamp keep file order.
pub fn sort_chronologically(records: &mut [Record]) {
    records.sort_by_key(|r| r.timestamp);
}

pub fn total_cars(records: &[Record]) -> CarCount {
    records.iter().map(|r| r.count).sum()
}

/// Per-day totals in ascending date order.
pub fn cars_per_day(records: &[Record]) -> Vec<DailyTotal> {
    let mut days: BTreeMap<NaiveDate, CarCount> = BTreeMap::new();
    for record in records {
        *days.entry(record.date()).or_insert(0) += record.count;
    }
    days.into_iter().map(|(date, count)| DailyTotal { date, count }).collect()
}

/// The `k` busiest records, highest count first. Equal counts are ordered by
/// earlier timestamp, whatever order the input is in.
pub fn busiest_periods(records: &[Record], k: usize) -> Vec<Record> {
    let mut ranked = records.to_vec();
    ranked.sort_by_key(|r| (Reverse(r.count), r.timestamp));
    ranked.truncate(k);
    ranked
}

pub fn top_three_half_hours(records: &[Record]) -> Vec<Record> {
    busiest_periods(records, TOP_PERIODS)
}

/// A run of positionally adjacent records and the sum of their counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub records: Vec<Record>,
    pub total: CarCount,
}

/// Finds the `len`-record run with the smallest total in one pass. When
/// several runs tie, the earliest one wins.
pub fn least_busy_window(records: &[Record], len: usize) -> Result<Window, TrafficError> {
    if len == 0 {
        return Err(TrafficError::EmptyWindow);
    }
    if records.len() < len {
        return Err(TrafficError::InsufficientData {
            required: len,
            found: records.len(),
        });
    }

    let mut current = total_cars(&records[..len]);
    let mut best = (0, current);
    for start in 1..=records.len() - len {
        current = current - records[start - 1].count + records[start + len - 1].count;
        if current < best.1 {
            best = (start, current);
        }
    }

    let (start, total) = best;
    Ok(Window {
        start,
        records: records[start..start + len].to_vec(),
        total,
    })
}

pub fn least_busy_ninety_minutes(records: &[Record]) -> Result<Window, TrafficError> {
    least_busy_window(records, WINDOW_LEN)
}
