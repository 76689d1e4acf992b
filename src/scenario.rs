use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::boundary::{BoundaryPolicy, Domain, ProximityHalt};
use crate::constants::*;
use crate::entities::Body;
use crate::types::Vector2D;

/// Everything a `Simulation` needs; presets below reproduce the bundled runs.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub domain: Domain,
    pub policy: BoundaryPolicy,
    pub bodies: Vec<Body>,
    pub tick_bound: u64,
    pub marker: Vector2D,
    pub halt: Option<ProximityHalt>,
}

impl SimConfig {
    pub fn with_ticks(mut self, tick_bound: u64) -> Self {
        self.tick_bound = tick_bound;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioKind {
    Torus,
    Bounce,
    Orbit,
    Scatter,
}

impl ScenarioKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "torus" => Some(ScenarioKind::Torus),
            "bounce" => Some(ScenarioKind::Bounce),
            "orbit" => Some(ScenarioKind::Orbit),
            "scatter" => Some(ScenarioKind::Scatter),
            _ => None,
        }
    }
}

/// Three wrapping points that stop once two of them meet near the center.
pub fn torus() -> SimConfig {
    let bodies = TORUS_START
        .iter()
        .enumerate()
        .map(|(i, &(x, y, vx, vy))| Body::new(i as i64 + 1, x, y, vx, vy))
        .collect();
    let center = Vector2D::new(PROXIMITY_CENTER.0, PROXIMITY_CENTER.1);
    SimConfig {
        domain: Domain::new(TORUS_WIDTH, TORUS_HEIGHT),
        policy: BoundaryPolicy::Wrap,
        bodies,
        tick_bound: TORUS_TICKS,
        marker: center,
        halt: Some(ProximityHalt::new(center, PROXIMITY_RADIUS_SQ)),
    }
}

/// A single point bouncing around a domain centered on the origin.
pub fn bounce() -> SimConfig {
    let (x, y, vx, vy) = BOUNCE_START;
    let domain = Domain::centered(BOUNCE_WIDTH, BOUNCE_HEIGHT);
    SimConfig {
        domain,
        policy: BoundaryPolicy::Reflect,
        bodies: vec![Body::new(BOUNCE_LABEL, x, y, vx, vy)],
        tick_bound: BOUNCE_TICKS,
        marker: domain.center(),
        halt: None,
    }
}

pub fn orbit() -> SimConfig {
    let domain = Domain::new(ORBIT_WIDTH, ORBIT_HEIGHT);
    let bodies = ORBIT_START
        .iter()
        .enumerate()
        .map(|(i, &(x, y, rate))| Body::new(i as i64 + 1, x, y, rate, 0))
        .collect();
    SimConfig {
        domain,
        policy: BoundaryPolicy::FixedOrbit,
        bodies,
        tick_bound: ORBIT_TICKS,
        marker: domain.center(),
        halt: None,
    }
}

/// `count` wrapping points with positions and velocities drawn from `seed`.
pub fn scatter(seed: u64, count: usize) -> SimConfig {
    let mut rng = StdRng::seed_from_u64(seed);
    let domain = Domain::new(SCATTER_WIDTH, SCATTER_HEIGHT);
    let bodies = (0..count)
        .map(|i| {
            Body::new(
                i as i64 + 1,
                rng.gen_range(0..SCATTER_WIDTH),
                rng.gen_range(0..SCATTER_HEIGHT),
                rng.gen_range(-SCATTER_MAX_SPEED..=SCATTER_MAX_SPEED),
                rng.gen_range(-SCATTER_MAX_SPEED..=SCATTER_MAX_SPEED),
            )
        })
        .collect();
    SimConfig {
        domain,
        policy: BoundaryPolicy::Wrap,
        bodies,
        tick_bound: SCATTER_TICKS,
        marker: domain.center(),
        halt: None,
    }
}

pub fn build(kind: ScenarioKind, seed: u64, count: usize) -> SimConfig {
    match kind {
        ScenarioKind::Torus => torus(),
        ScenarioKind::Bounce => bounce(),
        ScenarioKind::Orbit => orbit(),
        ScenarioKind::Scatter => scatter(seed, count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torus_initial_conditions() {
        let config = torus();
        let starts: Vec<_> = config.bodies.iter().map(|b| (b.label, b.position, b.velocity)).collect();
        assert_eq!(starts, vec![
            (1, Vector2D::new(90, 10), Vector2D::new(5, 2)),
            (2, Vector2D::new(270, 120), Vector2D::new(-3, -2)),
            (3, Vector2D::new(150, 265), Vector2D::new(1, -3)),
        ]);
        assert_eq!(config.marker, Vector2D::new(180, 180));
        assert_eq!(config.tick_bound, 10_000);
        assert!(config.halt.is_some());
    }

    #[test]
    fn test_bounce_uses_negative_label() {
        let config = bounce();
        assert_eq!(config.bodies.len(), 1);
        assert_eq!(config.bodies[0].label, -1);
        assert_eq!(config.policy, BoundaryPolicy::Reflect);
    }

    #[test]
    fn test_scatter_is_seeded() {
        assert_eq!(scatter(7, 4), scatter(7, 4));
        assert_eq!(scatter(7, 4).bodies.len(), 4);
        for body in &scatter(99, 20).bodies {
            assert!((0..SCATTER_WIDTH).contains(&body.position.x));
            assert!((0..SCATTER_HEIGHT).contains(&body.position.y));
        }
    }

    #[test]
    fn test_scenario_names() {
        assert_eq!(ScenarioKind::from_name("orbit"), Some(ScenarioKind::Orbit));
        assert_eq!(ScenarioKind::from_name("circle"), None);
    }
}
