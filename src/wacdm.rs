use std::fmt;

use libm::{exp, pow};

use crate::cosmology::Cosmology;
use crate::flrw::Flrw;
use crate::strategy::{DistanceStrategy, TimeStrategy};
use crate::wcdm::WCDM;

/// Matter, curvature and dark energy with w(a) = w0 + wa * (1 - a).
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WACDM {
    pub h0: f64,      // Hubble constant at z=0 [km/s/Mpc]
    pub om0: f64,     // Matter density at z=0
    pub ol0: f64,     // Dark energy density at z=0
    pub w0: f64,      // Equation of state today
    pub wa: f64,      // Linear change of the equation of state with 1 - a
    pub ogamma0: f64, // Photon density
    pub onu0: f64,    // Neutrino density
}

impl WACDM {
    pub fn new(h0: f64, om0: f64, ol0: f64, w0: f64, wa: f64) -> Self {
        Self { h0, om0, ol0, w0, wa, ..Default::default() }
    }

    /// The same universe as a `WCDM`. Only meaningful when `wa == 0`.
    pub fn constant_w(&self) -> WCDM {
        WCDM {
            h0: self.h0,
            om0: self.om0,
            ol0: self.ol0,
            w0: self.w0,
            ogamma0: self.ogamma0,
            onu0: self.onu0,
        }
    }

    fn radiation(&self) -> f64 {
        self.ogamma0 + self.onu0
    }
}

impl From<WCDM> for WACDM {
    fn from(cos: WCDM) -> Self {
        WACDM {
            h0: cos.h0,
            om0: cos.om0,
            ol0: cos.ol0,
            w0: cos.w0,
            wa: 0.,
            ogamma0: cos.ogamma0,
            onu0: cos.onu0,
        }
    }
}

impl fmt::Display for WACDM {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "WACDM{{H0: {}, Om0: {}, Ol0: {}, W0: {}, WA: {}}}",
            self.h0, self.om0, self.ol0, self.w0, self.wa
        )
    }
}

impl Flrw for WACDM {
    fn h0(&self) -> f64 {
        self.h0
    }

    fn om0(&self) -> f64 {
        self.om0
    }

    fn ol0(&self) -> f64 {
        self.ol0
    }

    // Linder 2003, PhRvL 90, 091301, Eq. 5 and 7
    fn e(&self, z: f64) -> f64 {
        let zp1 = 1. + z;
        let de_scale = match (self.w0, self.wa) {
            (w0, wa) if w0 == -1. && wa == 0. => 1.,
            (w0, wa) if wa == 0. => pow(zp1, 3. * (1. + w0)),
            (w0, wa) => pow(zp1, 3. * (1. + w0 + wa)) * exp(-3. * wa * z / zp1),
        };
        let ok0 = 1. - (self.om0 + self.ol0);
        (zp1 * zp1 * zp1 * zp1 * self.radiation()
            + zp1 * zp1 * zp1 * self.om0
            + zp1 * zp1 * ok0
            + self.ol0 * de_scale)
            .sqrt()
    }

    fn distance_strategy(&self) -> DistanceStrategy {
        let closed_form = self.radiation() == 0.;
        match self {
            cos if cos.ol0 == 0. && closed_form => DistanceStrategy::MatterCurvature,
            cos if cos.wa == 0. => DistanceStrategy::Reduce(Cosmology::WCDM(cos.constant_w())),
            _ => DistanceStrategy::Quadrature,
        }
    }

    fn time_strategy(&self) -> TimeStrategy {
        let closed_form = self.radiation() == 0.;
        match self {
            cos if cos.ol0 == 0. && 0. < cos.om0 && closed_form => TimeStrategy::MatterCurvature,
            cos if cos.wa == 0. => TimeStrategy::Reduce(Cosmology::WCDM(cos.constant_w())),
            _ => TimeStrategy::Quadrature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn e_reduces_to_constant_w() {
        let wacdm = WACDM::new(70., 0.2, 0.7, -1.2, 0.);
        let wcdm = WCDM::new(70., 0.2, 0.7, -1.2);
        for z in [0., 0.5, 3.] {
            assert_eq!(wacdm.e(z), wcdm.e(z));
        }
    }

    #[test]
    fn e_today_is_one_without_radiation() {
        let cos = WACDM::new(70., 0.2, 0.7, -1.2, 2.);
        assert!((cos.e(0.) - 1.).abs() < 1e-15);
    }

    #[test]
    fn einv_is_reciprocal() {
        let cos = WACDM::new(70., 0.2, 0.7, -1.2, 2.);
        for z in [0., 0.5, 7.] {
            assert_eq!(cos.einv(z), 1. / cos.e(z));
        }
    }

    #[test]
    fn distance_decision_table() {
        let wcdm = WCDM::new(70., 0.3, 0.7, -1.);
        let cases = [
            (WACDM::new(70., 0.3, 0., -1.2, 2.), DistanceStrategy::MatterCurvature),
            (WACDM::new(70., 0.3, 0.7, -1., 0.), DistanceStrategy::Reduce(Cosmology::WCDM(wcdm))),
            (WACDM::new(70., 0.3, 0.9, -1., 2.), DistanceStrategy::Quadrature),
            (WACDM::new(70., 0.2, 0.7, -1.2, 2.), DistanceStrategy::Quadrature),
        ];
        for (cos, expected) in cases {
            assert_eq!(cos.distance_strategy(), expected, "{cos}");
        }
    }

    #[test]
    fn time_decision_table() {
        let wcdm = WCDM::new(70., 0.3, 0.7, -1.);
        let cases = [
            (WACDM::new(70., 0.3, 0., -1.2, 2.), TimeStrategy::MatterCurvature),
            (WACDM::new(70., 0., 0., -1.2, 2.), TimeStrategy::Quadrature),
            (WACDM::new(70., 0.3, 0.7, -1., 0.), TimeStrategy::Reduce(Cosmology::WCDM(wcdm))),
            (WACDM::new(70., 0.2, 0.7, -1.2, 2.), TimeStrategy::Quadrature),
        ];
        for (cos, expected) in cases {
            assert_eq!(cos.time_strategy(), expected, "{cos}");
        }
    }

    #[test]
    fn reduction_chain_reaches_flat_model() {
        let cos = WACDM::new(70., 0.3, 0.7, -1., 0.);
        let DistanceStrategy::Reduce(wcdm) = cos.distance_strategy() else {
            panic!("expected reduction to WCDM");
        };
        let DistanceStrategy::Reduce(lcdm) = wcdm.distance_strategy() else {
            panic!("expected reduction to LambdaCDM");
        };
        let DistanceStrategy::Reduce(flat) = lcdm.distance_strategy() else {
            panic!("expected reduction to FlatLCDM");
        };
        assert_eq!(flat.distance_strategy(), DistanceStrategy::FlatElliptic);
    }

    #[test]
    fn display() {
        let cos = WACDM::new(70., 0.3, 0.7, -0.9, 0.2);
        assert_eq!(cos.to_string(), "WACDM{H0: 70, Om0: 0.3, Ol0: 0.7, W0: -0.9, WA: 0.2}");
    }
}
