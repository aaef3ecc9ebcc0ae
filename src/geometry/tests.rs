//! Unit tests for field geometry

use super::*;

fn c(x: f64, y: f64) -> FieldCoordinates {
    FieldCoordinates::new(x, y)
}

#[test]
fn test_distance_full_length_and_width() {
    assert_eq!(calculate_distance(&c(0.0, 0.0), &c(100.0, 0.0)), 105.0);
    assert_eq!(calculate_distance(&c(0.0, 0.0), &c(0.0, 100.0)), 68.0);
}

#[test]
fn test_distance_zero_and_symmetric() {
    let a = c(12.5, 33.0);
    let b = c(81.0, 7.25);
    assert_eq!(calculate_distance(&a, &a), 0.0);
    assert_eq!(calculate_distance(&a, &b), calculate_distance(&b, &a));
}

#[test]
fn test_distance_rounds_to_tenth() {
    // dx = 10.5 m, dy = 6.8 m -> 12.509...
    assert_eq!(calculate_distance(&c(0.0, 0.0), &c(10.0, 10.0)), 12.5);
    assert_eq!(calculate_distance(&c(30.0, 50.0), &c(70.0, 50.0)), 42.0);
}

#[test]
fn test_direction_axes() {
    assert_eq!(calculate_direction(&c(0.0, 0.0), &c(100.0, 0.0)), 0.0);
    assert_eq!(calculate_direction(&c(0.0, 0.0), &c(0.0, 100.0)), 90.0);
    assert_eq!(calculate_direction(&c(50.0, 50.0), &c(10.0, 50.0)), 180.0);
    assert_eq!(calculate_direction(&c(50.0, 50.0), &c(50.0, 10.0)), 270.0);
}

#[test]
fn test_direction_diagonals_use_percentage_vector() {
    assert_eq!(calculate_direction(&c(0.0, 0.0), &c(10.0, 10.0)), 45.0);
    assert_eq!(calculate_direction(&c(20.0, 50.0), &c(30.0, 40.0)), 315.0);
    assert_eq!(calculate_direction(&c(60.0, 20.0), &c(40.0, 40.0)), 135.0);
    assert_eq!(calculate_direction(&c(60.0, 60.0), &c(40.0, 40.0)), 225.0);
    assert_eq!(compass_direction(calculate_direction(&c(0.0, 0.0), &c(10.0, 10.0))), "SE");
}

#[test]
fn test_direction_same_point_is_zero() {
    assert_eq!(calculate_direction(&c(40.0, 40.0), &c(40.0, 40.0)), 0.0);
}

#[test]
fn test_direction_reverse_differs_by_180() {
    let pairs = [
        (c(10.0, 20.0), c(40.0, 60.0)),
        (c(90.0, 5.0), c(30.0, 70.0)),
        (c(50.0, 50.0), c(55.0, 45.0)),
    ];
    for (a, b) in pairs {
        let forward = calculate_direction(&a, &b);
        let back = calculate_direction(&b, &a);
        let diff = (forward - back).rem_euclid(360.0);
        assert_eq!(diff, 180.0, "{} vs {}", forward, back);
        assert!((0.0..360.0).contains(&forward));
    }
}

#[test]
fn test_pass_type_thresholds() {
    assert_eq!(pass_type_for_distance(0.0), PassLength::Short);
    assert_eq!(pass_type_for_distance(14.9), PassLength::Short);
    assert_eq!(pass_type_for_distance(15.0), PassLength::Long);
    assert_eq!(pass_type_for_distance(29.9), PassLength::Long);
    assert_eq!(pass_type_for_distance(30.0), PassLength::ThroughBall);
    assert_eq!(PassLength::ThroughBall.as_str(), "through_ball");
}

#[test]
fn test_compass_labels() {
    assert_eq!(compass_direction(0.0), "E");
    assert_eq!(compass_direction(44.0), "SE");
    assert_eq!(compass_direction(90.0), "S");
    assert_eq!(compass_direction(180.0), "W");
    assert_eq!(compass_direction(270.0), "N");
    assert_eq!(compass_direction(350.0), "E");
}

#[test]
fn test_format_distance() {
    assert_eq!(format_distance(25.5), "25.5m");
    assert_eq!(format_distance(42.0), "42.0m");
}

#[test]
fn test_coordinates_close() {
    assert!(are_coordinates_close(&c(10.0, 10.0), &c(11.5, 8.5), CLOSE_THRESHOLD));
    assert!(!are_coordinates_close(&c(10.0, 10.0), &c(12.0, 10.0), CLOSE_THRESHOLD));
    assert!(are_coordinates_close(&c(10.0, 10.0), &c(14.0, 10.0), 5.0));
}
