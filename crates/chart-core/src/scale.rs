// File: crates/chart-core/src/scale.rs
// Summary: Band (categorical X) and linear (value Y) scales mapping domain values to pixels.

use std::fmt::Display;

use crate::error::{ChartError, Result};
use crate::grid::{nice_ticks, precision_for_step, tick_step};

/// Logical value coordinate (e.g., price).
pub type Value = f64;

/// Default tick count requested by value axes.
pub const DEFAULT_TICKS: usize = 10;

/// One tick of an axis: pixel position along the axis plus its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub px: f32,
    pub label: String,
}

/// Operations an axis needs from a scale.
pub trait AxisScale {
    /// Pixel extent `(start, end)` covered by the scale.
    fn range(&self) -> (f32, f32);
    fn ticks(&self) -> Vec<Tick>;
}

/// Discrete scale: categorical keys placed in equal slots with inner padding.
///
/// Keys keep the order they first appear in; duplicates are dropped.
#[derive(Clone, Debug)]
pub struct BandScale<K> {
    domain: Vec<K>,
    start_px: f32,
    end_px: f32,
    padding_inner: f32,
    step: f32,
    bandwidth: f32,
}

impl<K: PartialEq + Clone> BandScale<K> {
    /// Build a band scale over `domain` spanning `[start_px, end_px)`.
    /// Errors with `EmptyDomain` when no keys are supplied.
    pub fn new<I>(domain: I, start_px: f32, end_px: f32, padding_inner: f32) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let mut keys: Vec<K> = Vec::new();
        for k in domain {
            if !keys.contains(&k) {
                keys.push(k);
            }
        }
        if keys.is_empty() {
            return Err(ChartError::EmptyDomain);
        }
        let padding_inner = padding_inner.clamp(0.0, 1.0);
        let n = keys.len() as f32;
        // n slots minus one trailing gutter exactly fill the range.
        let slots = n - padding_inner;
        let step = if slots > 0.0 { (end_px - start_px) / slots } else { end_px - start_px };
        let bandwidth = step * (1.0 - padding_inner);
        tracing::debug!(slots = keys.len(), step, bandwidth, "band scale");
        Ok(Self { domain: keys, start_px, end_px, padding_inner, step, bandwidth })
    }

    /// Slot start for `key`, or `None` when the key is outside the domain.
    pub fn position(&self, key: &K) -> Option<f32> {
        self.index_of(key).map(|i| self.start_px + self.step * i as f32)
    }

    /// Slot midpoint, where line/point marks are anchored.
    pub fn center(&self, key: &K) -> Option<f32> {
        self.position(key).map(|x| x + self.bandwidth * 0.5)
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.domain.iter().position(|k| k == key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index_of(key).is_some()
    }

    pub fn bandwidth(&self) -> f32 { self.bandwidth }
    pub fn step(&self) -> f32 { self.step }
    pub fn padding_inner(&self) -> f32 { self.padding_inner }
    pub fn domain(&self) -> &[K] { &self.domain }
    pub fn len(&self) -> usize { self.domain.len() }
    pub fn is_empty(&self) -> bool { self.domain.is_empty() }
}

impl<K: PartialEq + Clone + Display> AxisScale for BandScale<K> {
    fn range(&self) -> (f32, f32) {
        (self.start_px, self.end_px)
    }

    fn ticks(&self) -> Vec<Tick> {
        self.domain
            .iter()
            .filter_map(|k| self.center(k).map(|px| Tick { px, label: k.to_string() }))
            .collect()
    }
}

/// Continuous affine scale from a value domain to a pixel range.
///
/// Value axes pass `(plot_height, 0.0)` as the range so larger values sit higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: Value,
    d1: Value,
    r0: f32,
    r1: f32,
    tick_count: usize,
}

impl LinearScale {
    pub fn new(d0: Value, d1: Value, r0: f32, r1: f32) -> Self {
        let mut s = Self { d0, d1, r0, r1, tick_count: DEFAULT_TICKS };
        s.set_domain(d0, d1);
        s
    }

    /// `[0, max]` domain mapped onto `[height, 0]`.
    pub fn zero_based(max: Value, plot_height: f32) -> Self {
        Self::new(0.0, max, plot_height, 0.0)
    }

    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    /// Replace the domain, widening a degenerate one so the mapping stays finite.
    pub fn set_domain(&mut self, d0: Value, d1: Value) {
        self.d0 = d0;
        self.d1 = if (d1 - d0).abs() < 1e-12 { d0 + 1.0 } else { d1 };
    }

    pub fn domain(&self) -> (Value, Value) { (self.d0, self.d1) }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let t = (v - self.d0) / (self.d1 - self.d0);
        (self.r0 as f64 * (1.0 - t) + self.r1 as f64 * t) as f32
    }

    #[inline]
    pub fn invert(&self, px: f32) -> Value {
        let span = (self.r1 - self.r0) as f64;
        if span == 0.0 {
            return self.d0;
        }
        let t = (px - self.r0) as f64 / span;
        self.d0 * (1.0 - t) + self.d1 * t
    }

    pub fn tick_values(&self) -> Vec<Value> {
        nice_ticks(self.d0, self.d1, self.tick_count)
    }

    /// Label for `v` using the precision of the current tick step.
    pub fn tick_format(&self, v: Value) -> String {
        let step = tick_step(self.d0, self.d1, self.tick_count);
        format!("{:.*}", precision_for_step(step), v)
    }
}

impl AxisScale for LinearScale {
    fn range(&self) -> (f32, f32) {
        (self.r0, self.r1)
    }

    fn ticks(&self) -> Vec<Tick> {
        self.tick_values()
            .into_iter()
            .map(|v| Tick { px: self.to_px(v), label: self.tick_format(v) })
            .collect()
    }
}

/// Largest finite value produced by `f` over `items`; `None` when there is none.
pub fn max_by<T>(items: &[T], f: impl Fn(&T) -> Value) -> Option<Value> {
    items.iter().map(f).filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
        Some(m) if m >= v => Some(m),
        _ => Some(v),
    })
}
