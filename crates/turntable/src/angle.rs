use crate::error::{CarouselError, Result};
use derive_more::Display;
use serde::{Deserialize, Serialize};

pub const FULL_TURN: f64 = 360.0;
pub const HALF_TURN: f64 = 180.0;

/// Distance of every item from the centre of the ring.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)]
#[serde(try_from = "f64", into = "f64")]
pub struct Radius(f64);

impl Radius {
    pub const DEFAULT: Self = Self(300.0);

    pub fn new(radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(CarouselError::InvalidRadius(radius));
        }
        Ok(Self(radius))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Radius {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Radius {
    type Error = CarouselError;

    fn try_from(radius: f64) -> Result<Self> {
        Self::new(radius)
    }
}

impl From<Radius> for f64 {
    fn from(radius: Radius) -> Self {
        radius.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Placement {
    pub x: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub index: usize,
    pub base_angle: f64,
    pub placement: Placement,
}

/// Evenly spaced layout of `count` items on a circle of `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleModel {
    count: usize,
    radius: Radius,
}

impl AngleModel {
    pub fn new(count: usize, radius: Radius) -> Result<Self> {
        if count == 0 {
            return Err(CarouselError::EmptyCarousel);
        }
        Ok(Self { count, radius })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn radius(&self) -> Radius {
        self.radius
    }

    pub fn angular_unit(&self) -> f64 {
        FULL_TURN / self.count as f64
    }

    pub fn check_index(&self, index: usize) -> Result<usize> {
        if index < self.count {
            Ok(index)
        } else {
            Err(CarouselError::InvalidIndex {
                index,
                count: self.count,
            })
        }
    }

    pub fn base_angle(&self, index: usize) -> Result<f64> {
        self.check_index(index)
            .map(|i| self.steps_to_degrees(i as isize))
    }

    pub fn position(&self, index: usize) -> Result<Position> {
        self.check_index(index).map(|i| self.position_unchecked(i))
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.count).map(|i| self.position_unchecked(i))
    }

    fn position_unchecked(&self, index: usize) -> Position {
        let base_angle = self.steps_to_degrees(index as isize);
        let rad = base_angle.to_radians();
        Position {
            index,
            base_angle,
            placement: Placement {
                x: self.radius.get() * rad.sin(),
                z: self.radius.get() * rad.cos(),
            },
        }
    }

    /// Multiplying before dividing keeps half turns exact for even counts.
    pub fn steps_to_degrees(&self, steps: isize) -> f64 {
        steps as f64 * FULL_TURN / self.count as f64
    }

    /// Folds a signed step offset in `(-count, count)` into `(-count/2, count/2]`,
    /// the shortest way around. An exact half turn stays positive.
    pub fn shortest_steps(&self, steps: isize) -> isize {
        let n = self.count as isize;
        if 2 * steps > n {
            steps - n
        } else if 2 * steps <= -n {
            steps + n
        } else {
            steps
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn ring(count: usize, radius: f64) -> Result<AngleModel> {
        AngleModel::new(count, Radius::new(radius).unwrap())
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        assert_eq!(ring(0, 100.0), Err(CarouselError::EmptyCarousel));
    }

    #[test]
    fn test_angular_unit() {
        for (count, unit) in [(1, 360.0), (4, 90.0), (5, 72.0), (8, 45.0), (12, 30.0)] {
            let model = ring(count, 1.0).unwrap();
            assert_eq!(model.angular_unit(), unit);
        }
    }

    #[test]
    fn test_base_angles_are_evenly_spaced() {
        for count in 1..=16 {
            let model = ring(count, 1.0).unwrap();
            let angles: Vec<_> = model.positions().map(|p| p.base_angle).collect();
            assert_eq!(angles.len(), count);
            assert_eq!(angles[0], 0.0);
            for pair in angles.windows(2) {
                assert!((pair[1] - pair[0] - model.angular_unit()).abs() < EPSILON);
            }
            let last = angles[count - 1] + model.angular_unit();
            assert!((last - FULL_TURN).abs() < EPSILON);
        }
    }

    #[test]
    fn test_placement_on_circle() {
        let model = ring(4, 200.0).unwrap();

        let front = model.position(0).unwrap().placement;
        assert!(front.x.abs() < EPSILON);
        assert!((front.z - 200.0).abs() < EPSILON);

        let right = model.position(1).unwrap().placement;
        assert!((right.x - 200.0).abs() < EPSILON);
        assert!(right.z.abs() < EPSILON);

        let back = model.position(2).unwrap().placement;
        assert!((back.z + 200.0).abs() < EPSILON);

        for p in model.positions() {
            assert!((p.placement.x.hypot(p.placement.z) - 200.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_single_item_sits_at_zero() {
        let model = ring(1, 50.0).unwrap();
        let p = model.position(0).unwrap();
        assert_eq!(p.base_angle, 0.0);
        assert_eq!(p.placement.z, 50.0);
    }

    #[test]
    fn test_index_out_of_range() {
        let model = ring(3, 1.0).unwrap();
        assert_eq!(
            model.base_angle(3),
            Err(CarouselError::InvalidIndex { index: 3, count: 3 })
        );
        assert!(model.position(7).is_err());
    }

    #[test]
    fn test_radius_must_be_finite() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0] {
            assert!(Radius::new(bad).is_err(), "radius = {bad}");
        }
        assert_eq!(Radius::new(0.0).unwrap().get(), 0.0);
        assert!(serde_json::from_str::<Radius>("-5.0").is_err());
        assert_eq!(serde_json::from_str::<Radius>("120").unwrap().get(), 120.0);
    }

    #[test]
    fn test_shortest_steps() {
        let model = ring(8, 1.0).unwrap();
        let cases = vec![(0, 0), (1, 1), (-1, -1), (4, 4), (-4, 4), (5, -3), (-6, 2), (7, -1)];
        for (steps, expected) in cases {
            assert_eq!(model.shortest_steps(steps), expected, "steps = {steps}");
        }
    }

    #[test]
    fn test_half_turn_is_exact() {
        for count in (2..=40).step_by(2) {
            let model = ring(count, 1.0).unwrap();
            assert_eq!(model.steps_to_degrees(count as isize / 2), HALF_TURN);
        }
    }
}
