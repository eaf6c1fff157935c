pub mod analytic;
pub mod constants;
pub mod cosmology;
pub mod curvature;
pub mod elliptic;
pub mod flat_lcdm;
pub mod flrw;
pub mod lambda_cdm;
pub mod quadrature;
pub mod strategy;
pub mod wacdm;
pub mod wcdm;

pub use cosmology::Cosmology;
pub use flat_lcdm::FlatLCDM;
pub use flrw::Flrw;
pub use lambda_cdm::LambdaCDM;
pub use strategy::{DistanceStrategy, TimeStrategy};
pub use wacdm::WACDM;
pub use wcdm::WCDM;
