use glam::IVec2;
use rand::Rng;

use crate::types::Step;

/// One tracked light point: an integer position and a constant velocity.
///
/// The velocity never changes over the lifetime of a run; only the
/// position mutates, one velocity-step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub pos: IVec2,
    pub vel: IVec2,
}

impl Point {
    pub fn new(pos: IVec2, vel: IVec2) -> Self {
        Self { pos, vel }
    }

    /// Advances the point by one step (`pos += vel`).
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Undoes exactly one [`Point::advance`] (`pos -= vel`).
    #[inline]
    pub fn rewind(&mut self) {
        self.pos -= self.vel;
    }
}

/// The collection of points a simulation owns and mutates in lock-step.
#[derive(Debug, Clone)]
pub struct PointField {
    pub points: Vec<Point>,
}

impl PointField {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Moves every point by its velocity, once.
    pub fn advance_all(&mut self) {
        for p in &mut self.points {
            p.advance();
        }
    }

    /// Moves every point back by its velocity, once.
    pub fn rewind_all(&mut self) {
        for p in &mut self.points {
            p.rewind();
        }
    }

    /// Builds a field that re-forms `message` after exactly `steps` advances.
    ///
    /// Each message point gets a random velocity with components in
    /// `[-h, h]` (where `h` is the largest absolute message coordinate) and
    /// is displaced backwards `steps` times. Two fast sentinel points with
    /// opposite diagonal velocities of magnitude `2h + 2` converge on the
    /// origin at the same step; they pin the bounding-box envelope, so the
    /// heuristic area shrinks strictly until the message forms and expands
    /// on the very next step.
    ///
    /// ### Parameters
    /// - `message` - Final positions the field should land on.
    /// - `steps` - Number of advances after which the message appears.
    /// - `rng` - Source of the per-point velocities.
    ///
    /// ### Returns
    /// A [`PointField`] of `message.len() + 2` points (message plus the two
    /// sentinels, which end up at the origin).
    pub fn converging(message: &[IVec2], steps: Step, rng: &mut impl Rng) -> Self {
        let h = message
            .iter()
            .map(|p| p.x.abs().max(p.y.abs()))
            .max()
            .unwrap_or(0);
        let k = steps as i32;

        let mut points: Vec<Point> = message
            .iter()
            .map(|&pos| {
                let vel = IVec2::new(rng.random_range(-h..=h), rng.random_range(-h..=h));
                Point::new(pos - vel * k, vel)
            })
            .collect();

        let s = 2 * h + 2;
        for vel in [IVec2::new(s, s), IVec2::new(-s, -s)] {
            points.push(Point::new(-vel * k, vel));
        }

        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn advance_and_rewind_are_inverse() {
        let mut p = Point::new(IVec2::new(3, -1), IVec2::new(-2, 5));
        p.advance();
        assert_eq!(p.pos, IVec2::new(1, 4));
        p.rewind();
        assert_eq!(p.pos, IVec2::new(3, -1));
    }

    #[test]
    fn advance_all_moves_every_point_in_lock_step() {
        let mut field = PointField::from_points(vec![
            Point::new(IVec2::new(0, 0), IVec2::new(1, 0)),
            Point::new(IVec2::new(5, 5), IVec2::new(0, -1)),
        ]);
        field.advance_all();
        assert_eq!(field.points[0].pos, IVec2::new(1, 0));
        assert_eq!(field.points[1].pos, IVec2::new(5, 4));
    }

    #[test]
    fn converging_field_lands_on_the_message() {
        let message = vec![IVec2::new(1, 2), IVec2::new(4, 0), IVec2::new(2, 3)];
        let steps = 11;
        let mut rng = StdRng::seed_from_u64(42);

        let mut field = PointField::converging(&message, steps, &mut rng);
        for _ in 0..steps {
            field.advance_all();
        }

        for (p, &m) in field.points.iter().zip(message.iter()) {
            assert_eq!(p.pos, m);
        }
        // The two sentinels meet at the origin.
        let n = field.len();
        assert_eq!(field.points[n - 2].pos, IVec2::ZERO);
        assert_eq!(field.points[n - 1].pos, IVec2::ZERO);
    }

    #[test]
    fn converging_is_deterministic_for_a_fixed_seed() {
        let message = vec![IVec2::new(0, 1), IVec2::new(3, 2)];
        let a = PointField::converging(&message, 5, &mut StdRng::seed_from_u64(7));
        let b = PointField::converging(&message, 5, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.points, b.points);
    }
}
