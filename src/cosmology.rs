use std::fmt;

use crate::flrw::Flrw;
use crate::strategy::{DistanceStrategy, TimeStrategy};
use crate::{FlatLCDM, LambdaCDM, WACDM, WCDM};

/// Any of the supported models, chosen at runtime.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cosmology {
    FlatLCDM(FlatLCDM),
    LambdaCDM(LambdaCDM),
    WCDM(WCDM),
    WACDM(WACDM),
}

impl Cosmology {
    fn model(&self) -> &dyn Flrw {
        match self {
            Cosmology::FlatLCDM(cos) => cos,
            Cosmology::LambdaCDM(cos) => cos,
            Cosmology::WCDM(cos) => cos,
            Cosmology::WACDM(cos) => cos,
        }
    }
}

impl Flrw for Cosmology {
    fn h0(&self) -> f64 {
        self.model().h0()
    }

    fn om0(&self) -> f64 {
        self.model().om0()
    }

    fn ol0(&self) -> f64 {
        self.model().ol0()
    }

    fn ok0(&self) -> f64 {
        self.model().ok0()
    }

    fn e(&self, z: f64) -> f64 {
        self.model().e(z)
    }

    fn distance_strategy(&self) -> DistanceStrategy {
        self.model().distance_strategy()
    }

    fn time_strategy(&self) -> TimeStrategy {
        self.model().time_strategy()
    }
}

impl fmt::Display for Cosmology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cosmology::FlatLCDM(cos) => fmt::Display::fmt(cos, f),
            Cosmology::LambdaCDM(cos) => fmt::Display::fmt(cos, f),
            Cosmology::WCDM(cos) => fmt::Display::fmt(cos, f),
            Cosmology::WACDM(cos) => fmt::Display::fmt(cos, f),
        }
    }
}

impl From<FlatLCDM> for Cosmology {
    fn from(cos: FlatLCDM) -> Self {
        Cosmology::FlatLCDM(cos)
    }
}

impl From<LambdaCDM> for Cosmology {
    fn from(cos: LambdaCDM) -> Self {
        Cosmology::LambdaCDM(cos)
    }
}

impl From<WCDM> for Cosmology {
    fn from(cos: WCDM) -> Self {
        Cosmology::WCDM(cos)
    }
}

impl From<WACDM> for Cosmology {
    fn from(cos: WACDM) -> Self {
        Cosmology::WACDM(cos)
    }
}
