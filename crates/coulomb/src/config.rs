//! Configuration types for the layout simulation.
//!
//! This module provides the parameter sets that control a simulation run. All
//! types implement [`serde::Deserialize`] for loading from external sources
//! and expose `with_*` builder methods for programmatic use. Every set is
//! validated when the simulation or force that consumes it is constructed.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`SimulationConfig`] - Integration, cooling and stopping parameters.
//! - [`SpringElectricConfig`] - Parameters of the repulsion/attraction force.
//! - [`CentralGravityConfig`] - Parameters of the central gravity force.
//!
//! # Example
//!
//! ```
//! # use coulomb::config::{AppConfig, SimulationConfig};
//! let config = AppConfig::default()
//!     .with_simulation(SimulationConfig::default().with_update_budget(50));
//! assert!(config.validate().is_ok());
//! assert_eq!(config.simulation().update_budget(), 50);
//! ```

use serde::Deserialize;

use coulomb_core::geometry::Vec2;

use crate::error::ConfigError;

/// Scale used by the initializer when no force reports a characteristic scale.
pub const DEFAULT_INITIAL_SCALE: f64 = 10.0;

fn ensure_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

/// Top-level configuration for a layout run.
///
/// The spring-electric force is on by default and is switched off with
/// `enabled = false` in its section; the gravity section is opt-in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    simulation: SimulationConfig,
    spring_electric: Option<SpringElectricConfig>,
    gravity: Option<CentralGravityConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            spring_electric: Some(SpringElectricConfig::default()),
            gravity: None,
        }
    }
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `simulation` - Integration and stopping parameters.
    /// * `spring_electric` - Spring-electric force parameters, or `None` to omit the force.
    /// * `gravity` - Central gravity parameters, or `None` to omit the force.
    pub fn new(
        simulation: SimulationConfig,
        spring_electric: Option<SpringElectricConfig>,
        gravity: Option<CentralGravityConfig>,
    ) -> Self {
        Self {
            simulation,
            spring_electric,
            gravity,
        }
    }

    /// Returns the simulation section.
    pub fn simulation(&self) -> &SimulationConfig {
        &self.simulation
    }

    /// Returns the spring-electric section, if the force is enabled.
    pub fn spring_electric(&self) -> Option<&SpringElectricConfig> {
        self.spring_electric
            .as_ref()
            .filter(|spring_electric| spring_electric.is_enabled())
    }

    /// Returns the central gravity section, if the force is enabled.
    pub fn gravity(&self) -> Option<&CentralGravityConfig> {
        self.gravity.as_ref()
    }

    pub fn with_simulation(mut self, simulation: SimulationConfig) -> Self {
        self.simulation = simulation;
        self
    }

    pub fn with_spring_electric(mut self, spring_electric: Option<SpringElectricConfig>) -> Self {
        self.spring_electric = spring_electric;
        self
    }

    pub fn with_gravity(mut self, gravity: Option<CentralGravityConfig>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        if let Some(spring_electric) = self.spring_electric() {
            spring_electric.validate()?;
        }
        if let Some(gravity) = &self.gravity {
            gravity.validate()?;
        }
        Ok(())
    }
}

/// Integration, cooling and stopping parameters.
///
/// A negative update budget cannot be expressed: the budget is unsigned, so
/// deserializing a negative value fails before validation runs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Initial displacement scale applied to the summed force.
    step_size: f64,

    /// Fraction by which the step size shrinks after every step.
    cooling_rate: f64,

    /// Total displacement at or below which the run is converged.
    stop_threshold: f64,

    /// Maximum number of steps.
    update_budget: u32,

    /// Seed for the randomized initializer.
    random_seed: u64,

    /// Explicit initializer scale, overriding the force-derived default.
    initial_scale: Option<f64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step_size: 0.001,
            cooling_rate: 0.4,
            stop_threshold: 0.2,
            update_budget: 100,
            random_seed: 42,
            initial_scale: None,
        }
    }
}

impl SimulationConfig {
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn cooling_rate(&self) -> f64 {
        self.cooling_rate
    }

    pub fn stop_threshold(&self) -> f64 {
        self.stop_threshold
    }

    pub fn update_budget(&self) -> u32 {
        self.update_budget
    }

    pub fn random_seed(&self) -> u64 {
        self.random_seed
    }

    pub fn initial_scale(&self) -> Option<f64> {
        self.initial_scale
    }

    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_cooling_rate(mut self, cooling_rate: f64) -> Self {
        self.cooling_rate = cooling_rate;
        self
    }

    pub fn with_stop_threshold(mut self, stop_threshold: f64) -> Self {
        self.stop_threshold = stop_threshold;
        self
    }

    pub fn with_update_budget(mut self, update_budget: u32) -> Self {
        self.update_budget = update_budget;
        self
    }

    pub fn with_random_seed(mut self, random_seed: u64) -> Self {
        self.random_seed = random_seed;
        self
    }

    pub fn with_initial_scale(mut self, initial_scale: Option<f64>) -> Self {
        self.initial_scale = initial_scale;
        self
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the step size or stop threshold is
    /// negative or non-finite, the cooling rate lies outside `[0, 1)`, or an
    /// explicit initial scale is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("step_size", self.step_size)?;
        ensure_non_negative("stop_threshold", self.stop_threshold)?;
        if !(0.0..1.0).contains(&self.cooling_rate) {
            return Err(ConfigError::CoolingRate(self.cooling_rate));
        }
        match self.initial_scale {
            Some(scale) if !(scale.is_finite() && scale > 0.0) => {
                Err(ConfigError::InitialScale(scale))
            }
            _ => Ok(()),
        }
    }
}

/// Parameters of the spring-electric force.
///
/// Symbols follow the usual spring-electrical model: `K` is the optimal
/// distance, `C` the repulsion strength and `p` the repulsion exponent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpringElectricConfig {
    /// Whether the force is registered at all.
    enabled: bool,

    /// Target distance between nodes at equilibrium (`K`).
    optimal_distance: f64,

    /// Regularization strength of the repulsive term (`C`).
    repulsion_strength: f64,

    /// Decay exponent of the repulsive term (`p`).
    repulsion_exponent: f64,

    /// Growth exponent of the attractive term.
    attraction_exponent: f64,

    /// Terms with a smaller magnitude are treated as zero.
    epsilon: f64,

    /// Floor applied to pairwise distances before dividing.
    min_distance: f64,
}

impl Default for SpringElectricConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            optimal_distance: 10.0,
            repulsion_strength: 10.0,
            repulsion_exponent: 3.0,
            attraction_exponent: 2.0,
            epsilon: 0.0,
            min_distance: 1e-9,
        }
    }
}

impl SpringElectricConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn optimal_distance(&self) -> f64 {
        self.optimal_distance
    }

    pub fn repulsion_strength(&self) -> f64 {
        self.repulsion_strength
    }

    pub fn repulsion_exponent(&self) -> f64 {
        self.repulsion_exponent
    }

    pub fn attraction_exponent(&self) -> f64 {
        self.attraction_exponent
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_optimal_distance(mut self, optimal_distance: f64) -> Self {
        self.optimal_distance = optimal_distance;
        self
    }

    pub fn with_repulsion_strength(mut self, repulsion_strength: f64) -> Self {
        self.repulsion_strength = repulsion_strength;
        self
    }

    pub fn with_repulsion_exponent(mut self, repulsion_exponent: f64) -> Self {
        self.repulsion_exponent = repulsion_exponent;
        self
    }

    pub fn with_attraction_exponent(mut self, attraction_exponent: f64) -> Self {
        self.attraction_exponent = attraction_exponent;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the optimal or minimum distance is not
    /// positive, or any other parameter is negative or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.optimal_distance.is_finite() && self.optimal_distance > 0.0) {
            return Err(ConfigError::OptimalDistance(self.optimal_distance));
        }
        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            return Err(ConfigError::MinDistance(self.min_distance));
        }
        ensure_non_negative("repulsion_strength", self.repulsion_strength)?;
        ensure_non_negative("repulsion_exponent", self.repulsion_exponent)?;
        ensure_non_negative("attraction_exponent", self.attraction_exponent)?;
        ensure_non_negative("epsilon", self.epsilon)?;
        Ok(())
    }
}

/// Parameters of the central gravity force.
///
/// A positive gravitational constant pulls nodes toward the centre; a negative
/// one pushes them away.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CentralGravityConfig {
    centre: Vec2,
    gravitational_constant: f64,
}

impl Default for CentralGravityConfig {
    fn default() -> Self {
        Self {
            centre: Vec2::zero(),
            gravitational_constant: 10.0,
        }
    }
}

impl CentralGravityConfig {
    /// Creates a gravity section with the given centre and constant.
    pub fn new(centre: Vec2, gravitational_constant: f64) -> Self {
        Self {
            centre,
            gravitational_constant,
        }
    }

    pub fn centre(&self) -> Vec2 {
        self.centre
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the centre or the constant is non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("centre.x", self.centre.x())?;
        ensure_finite("centre.y", self.centre.y())?;
        ensure_finite("gravitational_constant", self.gravitational_constant)?;
        Ok(())
    }
}
