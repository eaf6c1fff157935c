use std::fmt;

use crate::cosmology::Cosmology;
use crate::flat_lcdm::FlatLCDM;
use crate::flrw::Flrw;
use crate::strategy::{DistanceStrategy, TimeStrategy};

/// Matter, a cosmological constant (w = -1) and curvature.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LambdaCDM {
    pub h0: f64,      // Hubble constant at z=0 [km/s/Mpc]
    pub om0: f64,     // Matter density at z=0
    pub ol0: f64,     // Vacuum energy density at z=0
    pub ogamma0: f64, // Photon density
    pub onu0: f64,    // Neutrino density
}

impl LambdaCDM {
    pub fn new(h0: f64, om0: f64, ol0: f64) -> Self {
        Self { h0, om0, ol0, ..Default::default() }
    }

    /// The same universe as a `FlatLCDM`. Only meaningful when `ok0() == 0`.
    pub fn flat(&self) -> FlatLCDM {
        FlatLCDM { h0: self.h0, om0: self.om0, ogamma0: self.ogamma0, onu0: self.onu0 }
    }

    fn radiation(&self) -> f64 {
        self.ogamma0 + self.onu0
    }
}

impl From<FlatLCDM> for LambdaCDM {
    fn from(cos: FlatLCDM) -> Self {
        LambdaCDM {
            h0: cos.h0,
            om0: cos.om0,
            ol0: 1. - cos.om0,
            ogamma0: cos.ogamma0,
            onu0: cos.onu0,
        }
    }
}

impl fmt::Display for LambdaCDM {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LambdaCDM{{H0: {}, Om0: {}, Ol0: {}}}", self.h0, self.om0, self.ol0)
    }
}

impl Flrw for LambdaCDM {
    fn h0(&self) -> f64 {
        self.h0
    }

    fn om0(&self) -> f64 {
        self.om0
    }

    fn ol0(&self) -> f64 {
        self.ol0
    }

    // Hogg arXiv:astro-ph/9905116, Eq. 14
    fn e(&self, z: f64) -> f64 {
        let zp1 = 1. + z;
        let ok0 = 1. - (self.om0 + self.ol0);
        (zp1 * zp1 * ((self.radiation() * zp1 + self.om0) * zp1 + ok0) + self.ol0).sqrt()
    }

    fn distance_strategy(&self) -> DistanceStrategy {
        let closed_form = self.radiation() == 0.;
        match self {
            cos if cos.ok0() == 0. && cos.om0 < 1. => {
                DistanceStrategy::Reduce(Cosmology::FlatLCDM(cos.flat()))
            }
            cos if cos.ol0 == 0. && closed_form => DistanceStrategy::MatterCurvature,
            _ => DistanceStrategy::Quadrature,
        }
    }

    fn time_strategy(&self) -> TimeStrategy {
        let closed_form = self.radiation() == 0.;
        match self {
            cos if cos.ok0() == 0. && cos.om0 < 1. => {
                TimeStrategy::Reduce(Cosmology::FlatLCDM(cos.flat()))
            }
            cos if cos.ol0 == 0. && 0. < cos.om0 && closed_form => TimeStrategy::MatterCurvature,
            cos if cos.om0 == 0. && 0. < cos.ol0 && cos.ol0 < 1. && closed_form => {
                TimeStrategy::DarkEnergyCurvature
            }
            _ => TimeStrategy::Quadrature,
        }
    }
}
