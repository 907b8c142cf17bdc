use super::*;

#[test]
fn interpolate_hits_endpoints_and_midpoint() {
    assert_eq!(interpolate(2.0, 6.0, 0.0), 2.0);
    assert_eq!(interpolate(2.0, 6.0, 1.0), 6.0);
    assert_eq!(interpolate(2.0, 6.0, 0.5), 4.0);
    let p = interpolate_point(Point::new(0.0, 0.0), Point::new(2.0, -4.0), 0.25);
    assert_eq!(p, Point::new(0.5, -1.0));
}

#[test]
fn sigmoid_is_centered() {
    assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
    assert!(sigmoid(10.0) > 0.99);
    assert!(sigmoid(-10.0) < 0.01);
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255(255, 255), 255);
    assert_eq!(mul_div255(0, 255), 0);
    assert_eq!(mul_div255(128, 255), 128);
    assert_eq!(mul_div255(255, 128), 128);
}
