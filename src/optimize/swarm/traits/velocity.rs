//! Velocity update policies.
//!
//! The policy is a closed set: the inertia-weight and constriction-factor
//! variants of the canonical velocity equation. The tensor arithmetic lives
//! in `impl_generic::velocity`; this module holds the per-policy state.

use serde::{Deserialize, Serialize};

use crate::optimize::error::{OptimizeError, OptimizeResult};

/// Inertia-weight velocity update.
///
/// ```text
/// v(t+1) = w * v(t) + c1 * r1 (pbest - x) + c2 * r2 (gbest - x)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InertiaWeight;

/// Constriction-factor velocity update (Clerc & Kennedy, 2002).
///
/// ```text
/// v(t+1) = chi * (v(t) + c1 * r1 (pbest - x) + c2 * r2 (gbest - x))
/// ```
///
/// `chi` is derived from the accelerations on [`VelocityPolicy::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstrictionFactor {
    #[serde(skip)]
    chi: Option<f64>,
}

impl ConstrictionFactor {
    /// Constriction coefficient computed by the last `initialize`, if any.
    pub fn chi(&self) -> Option<f64> {
        self.chi
    }

    /// chi = 2 / |2 - phi - sqrt(phi^2 - 4 phi)| with phi = c1 + c2 > 4.
    pub fn coefficient(
        cognitive_acceleration: f64,
        social_acceleration: f64,
    ) -> OptimizeResult<f64> {
        let phi = cognitive_acceleration + social_acceleration;
        if !phi.is_finite() || phi <= 4.0 {
            return Err(OptimizeError::configuration(
                "cognitive_acceleration + social_acceleration",
                format!("constriction factor requires c1 + c2 > 4, got {}", phi),
            ));
        }
        Ok(2.0 / (2.0 - phi - (phi * phi - 4.0 * phi).sqrt()).abs())
    }
}

/// Strategy producing new particle velocities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VelocityPolicy {
    InertiaWeight(InertiaWeight),
    ConstrictionFactor(ConstrictionFactor),
}

impl Default for VelocityPolicy {
    fn default() -> Self {
        Self::inertia_weight()
    }
}

impl VelocityPolicy {
    pub fn inertia_weight() -> Self {
        Self::InertiaWeight(InertiaWeight)
    }

    pub fn constriction_factor() -> Self {
        Self::ConstrictionFactor(ConstrictionFactor::default())
    }

    /// Prepare derived constants before a run.
    pub fn initialize(
        &mut self,
        cognitive_acceleration: f64,
        social_acceleration: f64,
    ) -> OptimizeResult<()> {
        match self {
            Self::InertiaWeight(_) => Ok(()),
            Self::ConstrictionFactor(policy) => {
                policy.chi = Some(ConstrictionFactor::coefficient(
                    cognitive_acceleration,
                    social_acceleration,
                )?);
                Ok(())
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::InertiaWeight(_) => "inertia_weight",
            Self::ConstrictionFactor(_) => "constriction_factor",
        }
    }
}
