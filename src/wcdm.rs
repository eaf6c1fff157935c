use std::fmt;

use libm::pow;

use crate::cosmology::Cosmology;
use crate::flrw::Flrw;
use crate::lambda_cdm::LambdaCDM;
use crate::strategy::{DistanceStrategy, TimeStrategy};

/// Matter, curvature and dark energy with a constant equation of state w0.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WCDM {
    pub h0: f64,      // Hubble constant at z=0 [km/s/Mpc]
    pub om0: f64,     // Matter density at z=0
    pub ol0: f64,     // Dark energy density at z=0
    pub w0: f64,      // Dark energy equation of state, p/rho
    pub ogamma0: f64, // Photon density
    pub onu0: f64,    // Neutrino density
}

impl WCDM {
    pub fn new(h0: f64, om0: f64, ol0: f64, w0: f64) -> Self {
        Self { h0, om0, ol0, w0, ..Default::default() }
    }

    /// The same universe as a `LambdaCDM`. Only meaningful when `w0 == -1`.
    pub fn lambda(&self) -> LambdaCDM {
        LambdaCDM {
            h0: self.h0,
            om0: self.om0,
            ol0: self.ol0,
            ogamma0: self.ogamma0,
            onu0: self.onu0,
        }
    }

    fn radiation(&self) -> f64 {
        self.ogamma0 + self.onu0
    }
}

impl From<LambdaCDM> for WCDM {
    fn from(cos: LambdaCDM) -> Self {
        WCDM {
            h0: cos.h0,
            om0: cos.om0,
            ol0: cos.ol0,
            w0: -1.,
            ogamma0: cos.ogamma0,
            onu0: cos.onu0,
        }
    }
}

impl fmt::Display for WCDM {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "WCDM{{H0: {}, Om0: {}, Ol0: {}, W0: {}}}",
            self.h0, self.om0, self.ol0, self.w0
        )
    }
}

impl Flrw for WCDM {
    fn h0(&self) -> f64 {
        self.h0
    }

    fn om0(&self) -> f64 {
        self.om0
    }

    fn ol0(&self) -> f64 {
        self.ol0
    }

    fn e(&self, z: f64) -> f64 {
        let zp1 = 1. + z;
        let de_scale = if self.w0 == -1. { 1. } else { pow(zp1, 3. * (1. + self.w0)) };
        let ok0 = 1. - (self.om0 + self.ol0);
        (zp1 * zp1 * zp1 * zp1 * self.radiation()
            + zp1 * zp1 * zp1 * self.om0
            + zp1 * zp1 * ok0
            + self.ol0 * de_scale)
            .sqrt()
    }

    // Ol0 == 0 comes first so that (Om0, Ol0) = (1, 0) stays analytic.
    fn distance_strategy(&self) -> DistanceStrategy {
        let closed_form = self.radiation() == 0.;
        match self {
            cos if cos.ol0 == 0. && closed_form => DistanceStrategy::MatterCurvature,
            cos if cos.w0 == -1. => DistanceStrategy::Reduce(Cosmology::LambdaCDM(cos.lambda())),
            _ => DistanceStrategy::Quadrature,
        }
    }

    fn time_strategy(&self) -> TimeStrategy {
        let closed_form = self.radiation() == 0.;
        match self {
            cos if cos.ol0 == 0. && 0. < cos.om0 && closed_form => TimeStrategy::MatterCurvature,
            cos if cos.w0 == -1. => TimeStrategy::Reduce(Cosmology::LambdaCDM(cos.lambda())),
            _ => TimeStrategy::Quadrature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn e_with_lambda_equation_of_state() {
        let cos = WCDM::new(70., 0.27, 0.73, -1.);
        assert!((cos.e(1.) - 1.7).abs() < 1e-9);
    }

    #[test]
    fn e_scales_dark_energy_density() {
        // w0 = 0 makes dark energy dilute like matter.
        let cos = WCDM::new(70., 0.3, 0.7, 0.);
        for z in [0.5, 2., 9.] {
            assert!((cos.e(z) - (1. + z).powf(1.5)).abs() < 1e-12 * cos.e(z));
        }
    }

    #[test]
    fn einv_is_reciprocal() {
        let cos = WCDM::new(70., 0.2, 0.7, -1.2);
        for z in [0., 0.5, 7.] {
            assert_eq!(cos.einv(z), 1. / cos.e(z));
        }
    }

    #[test]
    fn distance_decision_table() {
        let lcdm = LambdaCDM::new(70., 0.3, 0.9);
        let cases = [
            (WCDM::new(70., 0.3, 0., -1.2), DistanceStrategy::MatterCurvature),
            (WCDM::new(70., 1., 0., -1.), DistanceStrategy::MatterCurvature),
            (WCDM::new(70., 0.3, 0.9, -1.), DistanceStrategy::Reduce(Cosmology::LambdaCDM(lcdm))),
            (WCDM::new(70., 0.3, 0.7, -0.9), DistanceStrategy::Quadrature),
            (WCDM::new(70., 0.2, 0.7, -1.2), DistanceStrategy::Quadrature),
            (WCDM { ogamma0: 1e-4, ..WCDM::new(70., 0.3, 0., -1.2) }, DistanceStrategy::Quadrature),
        ];
        for (cos, expected) in cases {
            assert_eq!(cos.distance_strategy(), expected, "{cos}");
        }
    }

    #[test]
    fn time_decision_table() {
        let lcdm = LambdaCDM::new(70., 0.3, 0.9);
        let cases = [
            (WCDM::new(70., 0.3, 0., -1.2), TimeStrategy::MatterCurvature),
            (WCDM::new(70., 0.3, 0.9, -1.), TimeStrategy::Reduce(Cosmology::LambdaCDM(lcdm))),
            (WCDM::new(70., 0., 0., -1.2), TimeStrategy::Quadrature),
            (WCDM::new(70., 0.3, 0.7, -0.9), TimeStrategy::Quadrature),
        ];
        for (cos, expected) in cases {
            assert_eq!(cos.time_strategy(), expected, "{cos}");
        }
    }

    #[test]
    fn embedding_lambda_cdm_round_trips() {
        let lcdm = LambdaCDM::new(70., 0.3, 0.6);
        assert_eq!(WCDM::from(lcdm).lambda(), lcdm);
    }

    #[test]
    fn display() {
        let cos = WCDM::new(70., 0.3, 0.7, -0.9);
        assert_eq!(cos.to_string(), "WCDM{H0: 70, Om0: 0.3, Ol0: 0.7, W0: -0.9}");
    }
}
