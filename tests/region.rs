use omniscan::region::{CaptureRegion, SharedRegion};

#[test]
fn normalizes_regardless_of_drag_direction() {
    let expected = CaptureRegion::new(10, 20, 40, 60);
    assert_eq!(CaptureRegion::from_points((50, 80), (10, 20)), expected);
    assert_eq!(CaptureRegion::from_points((10, 20), (50, 80)), expected);
    assert_eq!(CaptureRegion::from_points((10, 80), (50, 20)), expected);
    assert_eq!(CaptureRegion::from_points((50, 20), (10, 80)), expected);
}

#[test]
fn zero_area_is_the_cancellation_sentinel() {
    assert!(CaptureRegion::default().is_empty());
    assert!(CaptureRegion::from_points((30, 30), (30, 30)).is_empty());
    // A zero-width drag is still cancellation even with height.
    assert!(CaptureRegion::from_points((30, 10), (30, 90)).is_empty());
    assert!(!CaptureRegion::new(0, 0, 1, 1).is_empty());
}

#[test]
fn edges_follow_origin_and_size() {
    let region = CaptureRegion::new(-100, 50, 300, 200);
    assert_eq!(region.right(), 200);
    assert_eq!(region.bottom(), 250);
}

#[test]
fn shared_region_reports_latest_geometry() {
    let shared = SharedRegion::default();
    assert!(shared.get().is_empty());

    let reader = shared.clone();
    shared.set(CaptureRegion::new(5, 6, 70, 80));
    assert_eq!(reader.get(), CaptureRegion::new(5, 6, 70, 80));

    shared.set(CaptureRegion::new(9, 9, 10, 10));
    assert_eq!(reader.get(), CaptureRegion::new(9, 9, 10, 10));
}
