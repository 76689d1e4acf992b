use crate::entities::Body;
use crate::error::SimError;
use crate::types::{Vector2D, reflect_coordinate, wrap_coordinate};

// --- Domain: the fixed rectangle points live in ---
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub left: i64,
    pub bottom: i64,
    pub right: i64,
    pub top: i64,
}

impl Domain {
    /// Domain anchored at the origin: `[0, width) x [0, height)`.
    pub fn new(width: i64, height: i64) -> Self {
        Domain { left: 0, bottom: 0, right: width, top: height }
    }

    /// Domain centered on the origin, used by the reflecting scenarios.
    pub fn centered(width: i64, height: i64) -> Self {
        Domain {
            left: -width / 2,
            bottom: -height / 2,
            right: width - width / 2,
            top: height - height / 2,
        }
    }

    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Vector2D {
        Vector2D::new(self.left + self.width() / 2, self.bottom + self.height() / 2)
    }
}

// --- BoundaryPolicy: how a body moves and what happens at the edge ---
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryPolicy {
    /// Toroidal: leaving one edge re-enters from the opposite one.
    Wrap,
    /// Bounces off each edge, inverting that velocity component.
    Reflect,
    /// Circles the domain center; `velocity.x` is the rate in degrees per tick.
    FixedOrbit,
}

impl BoundaryPolicy {
    /// Moves `body` from its position at `tick` to its position at `tick + 1`.
    pub fn advance(&self, body: &mut Body, domain: &Domain, tick: u64) -> Result<(), SimError> {
        match self {
            BoundaryPolicy::Wrap => {
                let moved = body.position.add(body.velocity);
                body.position.x = domain.left + wrap_coordinate(moved.x - domain.left, domain.width());
                body.position.y = domain.bottom + wrap_coordinate(moved.y - domain.bottom, domain.height());
            }
            BoundaryPolicy::Reflect => {
                let moved = body.position.add(body.velocity);
                let (x, vx) = reflect_coordinate(moved.x, body.velocity.x, domain.left, domain.right)
                    .ok_or(SimError::OutOfBounds { label: body.label, tick, axis: 'x', value: moved.x })?;
                let (y, vy) = reflect_coordinate(moved.y, body.velocity.y, domain.bottom, domain.top)
                    .ok_or(SimError::OutOfBounds { label: body.label, tick, axis: 'y', value: moved.y })?;
                body.position = Vector2D::new(x, y);
                body.velocity = Vector2D::new(vx, vy);
            }
            BoundaryPolicy::FixedOrbit => {
                let center = domain.center();
                let offset = body.origin.sub(center);
                let degrees = (body.velocity.x * (tick as i64 + 1)).rem_euclid(360) as f64;
                let (sin, cos) = degrees.to_radians().sin_cos();
                let x = offset.x as f64 * cos - offset.y as f64 * sin;
                let y = offset.x as f64 * sin + offset.y as f64 * cos;
                body.position = center.add(Vector2D::new(x.round() as i64, y.round() as i64));
            }
        }
        Ok(())
    }
}

// --- ProximityHalt: early-termination predicate ---
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityHalt {
    pub center: Vector2D,
    pub radius_sq: i64,
}

impl ProximityHalt {
    pub fn new(center: Vector2D, radius_sq: i64) -> Self {
        ProximityHalt { center, radius_sq }
    }

    /// True when any two distinct bodies are both inside the radius at once.
    pub fn triggered(&self, bodies: &[Body]) -> bool {
        bodies.iter().filter(|body| body.within(self.center, self.radius_sq)).count() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_domain_bounds() {
        let domain = Domain::centered(400, 300);
        assert_eq!((domain.left, domain.right), (-200, 200));
        assert_eq!((domain.bottom, domain.top), (-150, 150));
        assert_eq!(domain.center(), Vector2D::new(0, 0));
    }

    #[test]
    fn test_wrap_crosses_both_edges() {
        let domain = Domain::new(360, 360);
        let mut body = Body::new(1, 358, 1, 5, -3);
        BoundaryPolicy::Wrap.advance(&mut body, &domain, 1).unwrap();
        assert_eq!(body.position, Vector2D::new(3, 358));
        assert_eq!(body.velocity, Vector2D::new(5, -3));
    }

    #[test]
    fn test_reflect_inverts_only_crossing_axis() {
        let domain = Domain::centered(400, 300);
        let mut body = Body::new(-1, 198, 0, 7, 5);
        BoundaryPolicy::Reflect.advance(&mut body, &domain, 1).unwrap();
        assert_eq!(body.position, Vector2D::new(195, 5));
        assert_eq!(body.velocity, Vector2D::new(-7, 5));
    }

    #[test]
    fn test_reflect_fault_names_axis_and_tick() {
        let domain = Domain::centered(400, 300);
        let mut body = Body::new(-1, 0, 150, 0, 400);
        let err = BoundaryPolicy::Reflect.advance(&mut body, &domain, 4).unwrap_err();
        match err {
            SimError::OutOfBounds { label, tick, axis, value } => {
                assert_eq!((label, tick, axis, value), (-1, 4, 'y', 550));
            }
            other => panic!("unexpected error {other:?}"),
        }
        // Position is left untouched when the step is rejected.
        assert_eq!(body.position, Vector2D::new(0, 150));
    }

    #[test]
    fn test_orbit_quarter_turn() {
        let domain = Domain::new(360, 360);
        let mut body = Body::new(1, 280, 180, 90, 0);
        BoundaryPolicy::FixedOrbit.advance(&mut body, &domain, 0).unwrap();
        assert_eq!(body.position, Vector2D::new(180, 280));
        BoundaryPolicy::FixedOrbit.advance(&mut body, &domain, 3).unwrap();
        assert_eq!(body.position, Vector2D::new(280, 180));
    }

    #[test]
    fn test_proximity_needs_two_bodies() {
        let halt = ProximityHalt::new(Vector2D::new(180, 180), 3600);
        let one_inside = [Body::new(1, 180, 180, 0, 0), Body::new(2, 0, 0, 0, 0), Body::new(3, 359, 0, 0, 0)];
        assert!(!halt.triggered(&one_inside));
        let two_inside = [Body::new(1, 180, 180, 0, 0), Body::new(2, 0, 0, 0, 0), Body::new(3, 200, 150, 0, 0)];
        assert!(halt.triggered(&two_inside));
    }
}
