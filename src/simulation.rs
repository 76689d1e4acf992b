use std::io::Write;
use log::{error, info};

use crate::boundary::{BoundaryPolicy, Domain, ProximityHalt};
use crate::constants::{CENTER_MARKER_LABEL, OUT_OF_BOUNDS_MESSAGE};
use crate::entities::Body;
use crate::error::SimError;
use crate::scenario::SimConfig;
use crate::types::Vector2D;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimState {
    Running,
    Halted,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Every tick up to the bound was emitted.
    Completed { ticks: u64 },
    /// The proximity predicate fired after advancing from `tick`.
    Halted { tick: u64, positions: Vec<Vector2D> },
}

pub struct Simulation {
    domain: Domain,
    policy: BoundaryPolicy,
    bodies: Vec<Body>,
    tick_bound: u64,
    marker: Vector2D,
    halt: Option<ProximityHalt>,
    tick: u64,
    state: SimState,
    halt_matched: bool,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        let state = if config.tick_bound == 0 { SimState::Halted } else { SimState::Running };
        Simulation {
            domain: config.domain,
            policy: config.policy,
            bodies: config.bodies,
            tick_bound: config.tick_bound,
            marker: config.marker,
            halt: config.halt,
            tick: 0,
            state,
            halt_matched: false,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn tick_bound(&self) -> u64 {
        self.tick_bound
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn proximity_hit(&self) -> bool {
        self.halt.is_some_and(|halt| halt.triggered(&self.bodies))
    }

    /// Advances every body one tick. Moves to `Halted` when the bound is
    /// reached or the proximity predicate matches.
    pub fn step(&mut self) -> Result<SimState, SimError> {
        if self.state == SimState::Halted {
            return Ok(self.state);
        }
        for body in &mut self.bodies {
            self.policy.advance(body, &self.domain, self.tick)?;
        }
        self.halt_matched = self.proximity_hit();
        self.tick += 1;
        if self.halt_matched || self.tick >= self.tick_bound {
            self.state = SimState::Halted;
        }
        Ok(self.state)
    }

    /// Runs to completion, writing records to `data` and halt/fault reports
    /// to `diag`.
    pub fn run(&mut self, data: &mut impl Write, diag: &mut impl Write) -> Result<Outcome, SimError> {
        info!(
            "Starting run: {} bodies, {:?}, tick bound {}",
            self.bodies.len(),
            self.policy,
            self.tick_bound
        );
        writeln!(data, "{}, {}, {}", CENTER_MARKER_LABEL, self.marker.x, self.marker.y)?;

        while self.state == SimState::Running {
            for body in &self.bodies {
                writeln!(data, "{}", body.record())?;
            }

            let tick = self.tick;
            if let Err(err) = self.step() {
                error!("Aborting run: {}", err);
                writeln!(diag, "{}", OUT_OF_BOUNDS_MESSAGE)?;
                diag.flush()?;
                data.flush()?;
                return Err(err);
            }

            if self.halt_matched {
                let positions: Vec<Vector2D> = self.bodies.iter().map(|b| b.position).collect();
                let listed: Vec<String> = positions.iter().map(|p| p.to_string()).collect();
                writeln!(diag, "made it to {}", tick)?;
                writeln!(diag, "{}", listed.join(", "))?;
                diag.flush()?;
                data.flush()?;
                info!("Proximity halt at tick {}", tick);
                return Ok(Outcome::Halted { tick, positions });
            }
        }

        data.flush()?;
        info!("Run completed after {} ticks", self.tick);
        Ok(Outcome::Completed { ticks: self.tick })
    }
}
