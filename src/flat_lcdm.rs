use std::fmt;

use crate::flrw::Flrw;
use crate::strategy::{DistanceStrategy, TimeStrategy};

/// Flat universe of matter and a cosmological constant, Ol0 = 1 - Om0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlatLCDM {
    pub h0: f64,      // Hubble constant at z=0 [km/s/Mpc]
    pub om0: f64,     // Matter density at z=0
    pub ogamma0: f64, // Photon density
    pub onu0: f64,    // Neutrino density
}

impl FlatLCDM {
    pub fn new(h0: f64, om0: f64) -> Self {
        Self { h0, om0, ..Default::default() }
    }

    fn radiation(&self) -> f64 {
        self.ogamma0 + self.onu0
    }
}

impl fmt::Display for FlatLCDM {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FlatLCDM{{H0: {}, Om0: {}}}", self.h0, self.om0)
    }
}

impl Flrw for FlatLCDM {
    fn h0(&self) -> f64 {
        self.h0
    }

    fn om0(&self) -> f64 {
        self.om0
    }

    fn ol0(&self) -> f64 {
        1. - self.om0
    }

    fn ok0(&self) -> f64 {
        0.
    }

    // Hogg arXiv:astro-ph/9905116, Eq. 14 with Ok0 = 0
    fn e(&self, z: f64) -> f64 {
        let zp1 = 1. + z;
        (zp1 * zp1 * zp1 * (self.radiation() * zp1 + self.om0) + self.ol0()).sqrt()
    }

    fn distance_strategy(&self) -> DistanceStrategy {
        let closed_form = self.radiation() == 0.;
        match self.om0 {
            om0 if om0 == 1. && closed_form => DistanceStrategy::MatterCurvature,
            om0 if 0. < om0 && om0 < 1. && closed_form => DistanceStrategy::FlatElliptic,
            _ => DistanceStrategy::Quadrature,
        }
    }

    fn time_strategy(&self) -> TimeStrategy {
        let closed_form = self.radiation() == 0.;
        match self.om0 {
            om0 if om0 == 1. && closed_form => TimeStrategy::MatterCurvature,
            om0 if 0. < om0 && om0 < 1. && closed_form => TimeStrategy::FlatLambda,
            _ => TimeStrategy::Quadrature,
        }
    }
}
