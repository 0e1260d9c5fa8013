// File: crates/chart-core/src/series.rs
// Summary: Typed CSV records and helpers for splitting a yearly series at a cutoff.

use serde::{de, Deserialize, Deserializer, Serialize};

/// Numeric fields must be finite; `NaN` and `inf` parse as `f64` but cannot be plotted.
fn finite<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<f64, D::Error> {
    let v = f64::deserialize(d)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(de::Error::custom(format!("non-finite value {v}")))
    }
}

/// Yearly national price (`gasprice_year.csv`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct YearlyPrice {
    pub year: i32,
    #[serde(deserialize_with = "finite")]
    pub price: f64,
}

/// Price for one state in one year (`gasprice_states.csv`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatePrice {
    pub year: i32,
    pub state: String,
    #[serde(deserialize_with = "finite")]
    pub price: f64,
}

/// Yearly consumption and supply in million barrels per day (`gasinv_year.csv`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Inventory {
    pub year: i32,
    #[serde(deserialize_with = "finite")]
    pub consumed: f64,
    #[serde(deserialize_with = "finite")]
    pub gas_supply: f64,
}

/// Labeled callout anchored to the record of `year`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub year: i32,
    pub label: String,
}

impl Annotation {
    pub fn new(year: i32, label: impl Into<String>) -> Self {
        Self { year, label: label.into() }
    }
}

/// Records that sit on a yearly x axis.
pub trait Yearly {
    fn year(&self) -> i32;
}

impl Yearly for YearlyPrice {
    fn year(&self) -> i32 { self.year }
}

impl Yearly for StatePrice {
    fn year(&self) -> i32 { self.year }
}

impl Yearly for Inventory {
    fn year(&self) -> i32 { self.year }
}

/// Solid and projected halves of a series split at `cutoff`.
///
/// `actual` holds records with year <= cutoff, `projected` those with year >= cutoff,
/// so a record at exactly `cutoff` appears in both and the two paths meet.
#[derive(Clone, Debug, PartialEq)]
pub struct Split<'a, T> {
    pub actual: Vec<&'a T>,
    pub projected: Vec<&'a T>,
}

pub fn split_at_year<T: Yearly>(data: &[T], cutoff: i32) -> Split<'_, T> {
    Split {
        actual: data.iter().filter(|d| d.year() <= cutoff).collect(),
        projected: data.iter().filter(|d| d.year() >= cutoff).collect(),
    }
}

/// Record for `year`, if any.
pub fn find_year<T: Yearly>(data: &[T], year: i32) -> Option<&T> {
    data.iter().find(|d| d.year() == year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inv(year: i32) -> Inventory {
        Inventory { year, consumed: year as f64 / 100.0, gas_supply: 1.0 }
    }

    #[test]
    fn split_shares_the_seam_record() {
        let data: Vec<Inventory> = (2019..=2024).map(inv).collect();
        let s = split_at_year(&data, 2022);
        let actual: Vec<i32> = s.actual.iter().map(|d| d.year).collect();
        let projected: Vec<i32> = s.projected.iter().map(|d| d.year).collect();
        assert_eq!(actual, vec![2019, 2020, 2021, 2022]);
        assert_eq!(projected, vec![2022, 2023, 2024]);
    }

    #[test]
    fn split_past_the_end_leaves_projection_empty() {
        let data: Vec<Inventory> = (2019..=2021).map(inv).collect();
        let s = split_at_year(&data, 2030);
        assert_eq!(s.actual.len(), 3);
        assert!(s.projected.is_empty());
    }

    #[test]
    fn find_year_misses_cleanly() {
        let data: Vec<Inventory> = (2019..=2021).map(inv).collect();
        assert_eq!(find_year(&data, 2020).map(|d| d.year), Some(2020));
        assert!(find_year(&data, 1999).is_none());
    }
}
