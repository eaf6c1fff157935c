//! Closed form solutions for single component universes.
//!
//! Matter + curvature and dark energy (w = -1) + curvature both have exact
//! expressions for distances and ages. These are bare functions of
//! `(z, density, h0)` so every model can share them.
//!
//! References: Thomas & Kantowski 2000, PRD 62, 103507 (Eq. 2-4),
//! Mattig 1958, Hogg arXiv:astro-ph/9905116.

use libm::{asinh, pow};

use crate::constants::{MPC_TO_KM, SEC_PER_GYR, SPEED_OF_LIGHT};

/// Hubble distance c/H0 in Mpc.
pub fn hubble_distance(h0: f64) -> f64 {
    SPEED_OF_LIGHT / h0
}

/// Hubble time 1/H0 in Gyr.
pub fn hubble_time(h0: f64) -> f64 {
    let mut hubble_time = 1. / h0; // Mpc s / km
    hubble_time *= MPC_TO_KM; // s
    hubble_time / SEC_PER_GYR
}

/// Comoving transverse distance for a matter + curvature universe (Mattig's formula).
pub fn comoving_transverse_distance_om(z: f64, om0: f64, h0: f64) -> f64 {
    hubble_distance(h0) * 2. * (2. - om0 * (1. - z) - (2. - om0) * (1. + om0 * z).sqrt())
        / ((1. + z) * om0 * om0)
}

/// Radial comoving distance for a matter + curvature universe.
///
/// Equal to the transverse distance when `om0 == 1`.
pub fn comoving_distance_om(z: f64, om0: f64, h0: f64) -> f64 {
    let transverse = comoving_transverse_distance_om(z, om0, h0);
    let ok0 = 1. - om0;
    if ok0 == 0. {
        return transverse;
    }
    let hdk = hubble_distance(h0) / ok0.sqrt();
    hdk * asinh(transverse / hdk)
}

pub fn comoving_distance_om_z1z2(z1: f64, z2: f64, om0: f64, h0: f64) -> f64 {
    comoving_distance_om(z2, om0, h0) - comoving_distance_om(z1, om0, h0)
}

/// Age at `z` in Gyr of a matter + curvature universe.
///
/// Einstein-de Sitter (`om0 == 1`) is its own power law since the general
/// expression divides by `1 - om0`.
pub fn age_om(z: f64, om0: f64, h0: f64) -> f64 {
    if om0 == 1. {
        return (2. / 3.) * hubble_time(h0) * pow(1. + z, -1.5);
    }
    hubble_time(h0)
        * ((1. + om0 * z).sqrt() / ((1. - om0) * (1. + z))
            - om0 * pow(1. - om0, -1.5) * asinh(((1. / om0 - 1.) / (1. + z)).sqrt()))
}

pub fn lookback_time_om(z: f64, om0: f64, h0: f64) -> f64 {
    age_om(0., om0, h0) - age_om(z, om0, h0)
}

/// Age at `z` in Gyr of a dark energy (w = -1) + curvature universe.
pub fn age_ol(z: f64, ol0: f64, h0: f64) -> f64 {
    hubble_time(h0) * (1. / ol0.sqrt()) * asinh(1. / ((1. + z) * (1. / ol0 - 1.).sqrt()))
}

pub fn lookback_time_ol(z: f64, ol0: f64, h0: f64) -> f64 {
    age_ol(0., ol0, h0) - age_ol(z, ol0, h0)
}

/// Age at `z` in Gyr of a flat matter + Lambda universe. Requires `0 < om0 < 1`.
pub fn age_flat_lcdm(z: f64, om0: f64, h0: f64) -> f64 {
    hubble_time(h0) * (2. / 3.) / (1. - om0).sqrt()
        * asinh(((1. / om0 - 1.) / pow(1. + z, 3.)).sqrt())
}

pub fn lookback_time_flat_lcdm(z: f64, om0: f64, h0: f64) -> f64 {
    age_flat_lcdm(0., om0, h0) - age_flat_lcdm(z, om0, h0)
}
