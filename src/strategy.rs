//! Tagged outcomes of the per-model dispatch.
//!
//! Every model maps its parameters to one of these before computing a
//! distance or a time. The mapping is a pure function of the parameter set
//! (see `distance_strategy`/`time_strategy` on each model); evaluation lives
//! here so all four models share it.

use log::trace;

use crate::analytic::{
    age_flat_lcdm, age_ol, age_om, comoving_distance_om_z1z2, lookback_time_flat_lcdm,
    lookback_time_ol, lookback_time_om,
};
use crate::cosmology::Cosmology;
use crate::elliptic::comoving_distance_flat_lcdm_z1z2;
use crate::flrw::Flrw;

/// How to compute the radial comoving distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DistanceStrategy {
    /// Mattig closed form for matter + curvature.
    MatterCurvature,
    /// Carlson elliptic integral for flat matter + Lambda.
    FlatElliptic,
    /// Hand over to a simpler model with identical E(z).
    Reduce(Cosmology),
    /// 1000-point Gauss-Legendre integral of 1/E(z).
    Quadrature,
}

/// How to compute ages and look-back times.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimeStrategy {
    /// Closed form for matter + curvature, Einstein-de Sitter included.
    MatterCurvature,
    /// Closed form for a cosmological constant + curvature.
    DarkEnergyCurvature,
    /// asinh closed form for flat matter + Lambda.
    FlatLambda,
    Reduce(Cosmology),
    /// Gauss-Legendre integral, with an infinite upper bound for ages.
    Quadrature,
}

impl DistanceStrategy {
    pub fn comoving_distance_z1z2<C: Flrw + ?Sized>(self, cos: &C, z1: f64, z2: f64) -> f64 {
        trace!("comoving distance [{z1}, {z2}] via {self:?}");
        match self {
            DistanceStrategy::MatterCurvature => {
                comoving_distance_om_z1z2(z1, z2, cos.om0(), cos.h0())
            }
            DistanceStrategy::FlatElliptic => {
                comoving_distance_flat_lcdm_z1z2(z1, z2, cos.om0(), cos.h0())
            }
            DistanceStrategy::Reduce(simpler) => simpler.comoving_distance_z1z2(z1, z2),
            DistanceStrategy::Quadrature => cos.comoving_distance_z1z2_integrate(z1, z2),
        }
    }
}

impl TimeStrategy {
    pub fn age<C: Flrw + ?Sized>(self, cos: &C, z: f64) -> f64 {
        trace!("age at {z} via {self:?}");
        match self {
            TimeStrategy::MatterCurvature => age_om(z, cos.om0(), cos.h0()),
            TimeStrategy::DarkEnergyCurvature => age_ol(z, cos.ol0(), cos.h0()),
            TimeStrategy::FlatLambda => age_flat_lcdm(z, cos.om0(), cos.h0()),
            TimeStrategy::Reduce(simpler) => simpler.age(z),
            TimeStrategy::Quadrature => cos.age_integrate(z),
        }
    }

    pub fn lookback_time<C: Flrw + ?Sized>(self, cos: &C, z: f64) -> f64 {
        trace!("lookback time at {z} via {self:?}");
        match self {
            TimeStrategy::MatterCurvature => lookback_time_om(z, cos.om0(), cos.h0()),
            TimeStrategy::DarkEnergyCurvature => lookback_time_ol(z, cos.ol0(), cos.h0()),
            TimeStrategy::FlatLambda => lookback_time_flat_lcdm(z, cos.om0(), cos.h0()),
            TimeStrategy::Reduce(simpler) => simpler.lookback_time(z),
            TimeStrategy::Quadrature => cos.lookback_time_integrate(z),
        }
    }
}
