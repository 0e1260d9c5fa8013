// File: crates/chart-core/tests/scales.rs
// Purpose: Band partitioning and linear interpolation properties.

use chart_core::{BandScale, LinearScale};

#[test]
fn band_slots_partition_the_range() {
    for &n in &[1usize, 2, 5, 12, 51] {
        for &pad in &[0.0f32, 0.1, 0.3] {
            let keys: Vec<usize> = (0..n).collect();
            let s = BandScale::new(keys, 0.0, 720.0, pad).expect("non-empty domain");
            let bw = s.bandwidth();
            let gutters = (n as f32 - 1.0) * s.step() * pad;
            let covered = bw * n as f32 + gutters;
            assert!((covered - 720.0).abs() < 1e-2, "n={n} pad={pad} covered={covered}");

            // slots are contiguous and equal
            for i in 1..n {
                let a = s.position(&(i - 1)).unwrap();
                let b = s.position(&i).unwrap();
                assert!((b - a - s.step()).abs() < 1e-3);
            }
            // last slot ends exactly at the range end
            let last_end = s.position(&(n - 1)).unwrap() + bw;
            assert!((last_end - 720.0).abs() < 1e-2, "n={n} pad={pad} end={last_end}");
        }
    }
}

#[test]
fn band_center_is_half_a_bandwidth_in() {
    let s = BandScale::new(vec![2020, 2021, 2022], 0.0, 300.0, 0.1).unwrap();
    let p = s.position(&2021).unwrap();
    assert_eq!(s.center(&2021), Some(p + s.bandwidth() / 2.0));
    assert_eq!(s.center(&1990), None);
}

#[test]
fn linear_hits_range_endpoints_exactly() {
    let s = LinearScale::new(0.0, 3.01, 430.0, 0.0);
    assert_eq!(s.to_px(0.0), 430.0);
    assert_eq!(s.to_px(3.01), 0.0);

    let up = LinearScale::new(-2.0, 8.0, 10.0, 250.0);
    assert_eq!(up.to_px(-2.0), 10.0);
    assert_eq!(up.to_px(8.0), 250.0);
}

#[test]
fn linear_is_monotonic_in_both_orientations() {
    let inverted = LinearScale::zero_based(5.0, 400.0);
    let normal = LinearScale::new(0.0, 5.0, 0.0, 400.0);
    let mut prev_inv = f32::INFINITY;
    let mut prev_norm = f32::NEG_INFINITY;
    for i in 0..=50 {
        let v = i as f64 * 0.1;
        let yi = inverted.to_px(v);
        let yn = normal.to_px(v);
        assert!(yi < prev_inv, "inverted scale must decrease");
        assert!(yn > prev_norm, "normal scale must increase");
        prev_inv = yi;
        prev_norm = yn;
    }
}

#[test]
fn linear_invert_round_trips_pixels() {
    let s = LinearScale::zero_based(4.0, 200.0);
    assert!((s.invert(100.0) - 2.0).abs() < 1e-9);
    assert!((s.invert(s.to_px(3.5)) - 3.5).abs() < 1e-5);
}

#[test]
fn tick_labels_follow_step_precision() {
    let s = LinearScale::zero_based(3.01, 430.0);
    let labels: Vec<String> = chart_core::AxisScale::ticks(&s).into_iter().map(|t| t.label).collect();
    assert_eq!(labels.first().map(String::as_str), Some("0.0"));
    assert_eq!(labels.last().map(String::as_str), Some("3.0"));
    assert!(labels.contains(&"1.4".to_string()));
}
