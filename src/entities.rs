use crate::types::Vector2D;

// --- Body: one simulated point ---
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub label: i64,
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub origin: Vector2D, // Starting position, orbits are computed from here
}

impl Body {
    pub fn new(label: i64, x: i64, y: i64, vx: i64, vy: i64) -> Self {
        Body {
            label,
            position: Vector2D::new(x, y),
            velocity: Vector2D::new(vx, vy),
            origin: Vector2D::new(x, y),
        }
    }

    pub fn record(&self) -> String {
        format!("{}, {}, {}", self.label, self.position.x, self.position.y)
    }

    pub fn within(&self, center: Vector2D, radius_sq: i64) -> bool {
        self.position.sub(center).length_sq() < radius_sq
    }
}
