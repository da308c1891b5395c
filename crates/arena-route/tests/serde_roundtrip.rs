#![cfg(feature = "serde")]

use arena_route::Route;
use glam::Vec3;

#[test]
fn route_serializes_points_and_feasibility() {
    let route = Route::new(
        Vec3::ZERO,
        vec![Vec3::new(300.0, 400.0, 0.0)],
        false,
    );
    let value = serde_json::to_value(&route).expect("serialize");

    assert_eq!(value["feasible"], serde_json::json!(false));
    assert_eq!(value["length"], serde_json::json!(500.0));
    assert_eq!(value["points"], serde_json::json!([[300.0, 400.0, 0.0]]));
}
