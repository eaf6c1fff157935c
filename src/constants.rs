pub const SPEED_OF_LIGHT: f64 = 299_792.458; // km/s
pub const MPC_TO_KM: f64 = 3.085_677_581_491_367_3e19;
pub const SEC_PER_GYR: f64 = 3.15576e16; // Julian year
pub const G: f64 = 6.67384e-11; // m^3 kg^-1 s^-2
pub const KM_TO_METERS: f64 = 1000.;
pub const MPC_TO_METERS: f64 = 3.085_677_581_491_367_3e22;
pub const MSOL_TO_KG: f64 = 1.9891e30;
