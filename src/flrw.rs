use std::f64::consts::PI;

use libm::log10;
use rayon::prelude::*;
use roots::{find_root_brent, SimpleConvergency};

use crate::analytic::{hubble_distance, hubble_time};
use crate::constants::{G, KM_TO_METERS, MPC_TO_METERS, MSOL_TO_KG};
use crate::curvature::transverse_distance;
use crate::quadrature::{integrate, QUADRATURE_POINTS};
use crate::strategy::{DistanceStrategy, TimeStrategy};

/// Distances, ages and look-back times of an FLRW universe.
///
/// A model supplies its densities, its expansion rate `e` and the choice of
/// computation method. Everything else is derived from those. Distances are
/// in Mpc, times in Gyr. No inputs are validated: unphysical parameters give
/// NaN or infinities.
///
/// Models are plain values and are evaluated from several threads by the
/// batch methods, hence `Sync`.
pub trait Flrw: Sync {
    /// Hubble constant at z=0 [km/s/Mpc].
    fn h0(&self) -> f64;
    /// Matter density at z=0.
    fn om0(&self) -> f64;
    /// Dark energy density at z=0.
    fn ol0(&self) -> f64;

    /// Hubble parameter as a fraction of its present value, H(z)/H0.
    fn e(&self, z: f64) -> f64;

    fn distance_strategy(&self) -> DistanceStrategy;
    fn time_strategy(&self) -> TimeStrategy;

    fn einv(&self, z: f64) -> f64 {
        1. / self.e(z)
    }

    /// Curvature density at z=0.
    fn ok0(&self) -> f64 {
        1. - (self.om0() + self.ol0())
    }

    fn hubble_distance(&self) -> f64 {
        hubble_distance(self.h0())
    }

    fn hubble_time(&self) -> f64 {
        hubble_time(self.h0())
    }

    /// H(z) in km/s/Mpc.
    fn h(&self, z: f64) -> f64 {
        self.h0() * self.e(z)
    }

    /// Critical density at z in solar masses per cubic Mpc.
    fn critical_density(&self, z: f64) -> f64 {
        let hub_square = self.h(z).powi(2);
        let rho_crit =
            ((3. * hub_square) / (8. * PI * G)) * (KM_TO_METERS.powi(2) / MPC_TO_METERS.powi(2));
        rho_crit / MSOL_TO_KG * MPC_TO_METERS.powi(3)
    }

    /// Comoving distance from z=0 to `z`.
    ///
    /// As the scale factor goes from 0.5 to 1, two objects a proper 10 Mpc
    /// apart at z=1 end up a proper 20 Mpc apart today; their comoving
    /// separation is 20 Mpc.
    fn comoving_distance(&self, z: f64) -> f64 {
        self.comoving_distance_z1z2(0., z)
    }

    fn comoving_distance_z1z2(&self, z1: f64, z2: f64) -> f64 {
        self.distance_strategy().comoving_distance_z1z2(self, z1, z2)
    }

    fn comoving_distance_z1z2_integrate(&self, z1: f64, z2: f64) -> f64 {
        self.hubble_distance() * integrate(|z| self.einv(z), z1, z2, QUADRATURE_POINTS)
    }

    fn comoving_transverse_distance(&self, z: f64) -> f64 {
        self.comoving_transverse_distance_z1z2(0., z)
    }

    /// Comoving distance at `z2` as seen from `z1`, corrected for curvature.
    fn comoving_transverse_distance_z1z2(&self, z1: f64, z2: f64) -> f64 {
        transverse_distance(self.comoving_distance_z1z2(z1, z2), self.ok0(), self.hubble_distance())
    }

    /// Ratio of physical transverse size to angular size.
    fn angular_diameter_distance(&self, z: f64) -> f64 {
        self.comoving_transverse_distance(z) / (1. + z)
    }

    fn luminosity_distance(&self, z: f64) -> f64 {
        (1. + z) * self.comoving_transverse_distance(z)
    }

    /// Magnitude difference between 1 Mpc and the luminosity distance.
    fn distance_modulus(&self, z: f64) -> f64 {
        5. * log10(self.luminosity_distance(z)) + 25.
    }

    /// Time from `z` to today.
    fn lookback_time(&self, z: f64) -> f64 {
        self.time_strategy().lookback_time(self, z)
    }

    fn lookback_time_integrate(&self, z: f64) -> f64 {
        let integrand = |z: f64| self.einv(z) / (1. + z);
        self.hubble_time() * integrate(integrand, 0., z, QUADRATURE_POINTS)
    }

    /// Time from the big bang (z = infinity) to `z`.
    fn age(&self, z: f64) -> f64 {
        self.time_strategy().age(self, z)
    }

    fn age_integrate(&self, z: f64) -> f64 {
        let integrand = |z: f64| 1. / ((1. + z) * self.e(z));
        self.hubble_time() * integrate(integrand, z, f64::INFINITY, QUADRATURE_POINTS)
    }

    /// Redshift at which the comoving distance equals `distance` [Mpc].
    ///
    /// Searches z in [0, 1200]. NaN when no root is bracketed.
    fn redshift_at_comoving_distance(&self, distance: f64) -> f64 {
        let f = |z: f64| self.comoving_distance(z) - distance;
        let mut convergency = SimpleConvergency { eps: 1e-10f64, max_iter: 100 };
        match find_root_brent(0., 1200., &f, &mut convergency) {
            Ok(z) => z,
            Err(_error) => f64::NAN,
        }
    }

    /// Comoving distances to many redshifts, choosing the method once.
    fn comoving_distances(&self, redshifts: &[f64]) -> Vec<f64> {
        let strategy = self.distance_strategy();
        redshifts
            .par_iter()
            .map(|&z| strategy.comoving_distance_z1z2(self, 0., z))
            .collect()
    }

    fn comoving_transverse_distances(&self, redshifts: &[f64]) -> Vec<f64> {
        let ok0 = self.ok0();
        let h_dist = self.hubble_distance();
        self.comoving_distances(redshifts)
            .into_iter()
            .map(|co_dist| transverse_distance(co_dist, ok0, h_dist))
            .collect()
    }

    fn luminosity_distances(&self, redshifts: &[f64]) -> Vec<f64> {
        self.comoving_transverse_distances(redshifts)
            .into_iter()
            .zip(redshifts)
            .map(|(dm, z)| (1. + z) * dm)
            .collect()
    }

    fn distance_moduli(&self, redshifts: &[f64]) -> Vec<f64> {
        self.luminosity_distances(redshifts)
            .into_iter()
            .map(|dl| 5. * log10(dl) + 25.)
            .collect()
    }

    fn ages(&self, redshifts: &[f64]) -> Vec<f64> {
        let strategy = self.time_strategy();
        redshifts.par_iter().map(|&z| strategy.age(self, z)).collect()
    }

    fn lookback_times(&self, redshifts: &[f64]) -> Vec<f64> {
        let strategy = self.time_strategy();
        redshifts.par_iter().map(|&z| strategy.lookback_time(self, z)).collect()
    }
}
