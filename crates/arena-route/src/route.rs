#[cfg(feature = "serde")]
use serde::Serialize;

use glam::Vec3;

/// A planned sequence of waypoints toward a target.
///
/// Routes are built fresh whenever a behavior plans, consumed by a maneuver the same tick and
/// dropped; there is no way to mutate one after construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Route {
    points: Vec<Vec3>,
    feasible: bool,
    length: f32,
}

impl Route {
    /// Builds a route from `start` through `waypoints`. `length` is the polyline length
    /// starting at `start`. An empty waypoint list yields the one-point route `[start]`.
    pub fn new(start: Vec3, waypoints: Vec<Vec3>, feasible: bool) -> Self {
        let points = if waypoints.is_empty() {
            vec![start]
        } else {
            waypoints
        };

        let mut length = 0.0;
        let mut prev = start;
        for p in &points {
            length += prev.distance(*p);
            prev = *p;
        }

        Self {
            points,
            feasible,
            length,
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// The next waypoint to drive toward.
    pub fn first(&self) -> Vec3 {
        self.points[0]
    }

    pub fn destination(&self) -> Vec3 {
        self.points[self.points.len() - 1]
    }

    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    /// Any feasible route beats any infeasible one; otherwise the shorter wins.
    /// Equal routes are not better than each other.
    pub fn is_better_than(&self, other: &Route) -> bool {
        match (self.feasible, other.feasible) {
            (true, false) => true,
            (false, true) => false,
            _ => self.length < other.length,
        }
    }
}

/// Picks the preferred route; ties keep the earliest candidate.
pub fn pick_best(routes: impl IntoIterator<Item = Route>) -> Option<Route> {
    routes.into_iter().fold(None, |best, r| match best {
        Some(b) if !r.is_better_than(&b) => Some(b),
        _ => Some(r),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_route_degenerates_to_start() {
        let r = Route::new(Vec3::new(1.0, 2.0, 0.0), Vec::new(), true);
        assert_eq!(r.points(), &[Vec3::new(1.0, 2.0, 0.0)]);
        assert_eq!(r.length(), 0.0);
        assert_eq!(r.first(), r.destination());
    }

    #[test]
    fn length_follows_the_polyline() {
        let r = Route::new(
            Vec3::ZERO,
            vec![Vec3::new(300.0, 0.0, 0.0), Vec3::new(300.0, 400.0, 0.0)],
            true,
        );
        assert!((r.length() - 700.0).abs() < 1e-4);
        assert_eq!(r.first(), Vec3::new(300.0, 0.0, 0.0));
    }
}
