//! Material tags and the steel/concrete modular ratio

use serde::{Deserialize, Serialize};

/// Default Young's modulus for structural steel in MPa.
/// Use 200000 or 210000 depending on the applicable code.
pub const DEFAULT_E_STEEL: f64 = 210_000.0;

/// Material of a cross-section shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Steel,
    Concrete,
}

/// Secant modulus of elasticity of concrete per EC2, in MPa.
///
/// `Ecm = 22000 * (fcm / 10)^0.3` with `fcm = fck + 8`. A non-positive
/// `fck` is invalid input and short-circuits to 0.
pub fn concrete_secant_modulus(fck: f64) -> f64 {
    if fck <= 0.0 {
        return 0.0;
    }
    let fcm = fck + 8.0;
    22_000.0 * (fcm / 10.0).powf(0.3)
}

/// Modular ratio `n = Es / Ecm` used to homogenize concrete to
/// equivalent steel.
///
/// When the computed `Ecm` is effectively zero (e.g. `fck <= -8`) the
/// ratio is unbounded; a warning is logged and `+inf` is returned so the
/// caller can decide how to proceed.
pub fn modular_ratio(fck: f64, e_steel: f64) -> f64 {
    let ecm = concrete_secant_modulus(fck);
    if ecm <= 1e-9 {
        log::warn!(
            "computed Ecm is practically zero ({ecm:.2}) for fck={fck}; modular ratio is unbounded"
        );
        return f64::INFINITY;
    }
    e_steel / ecm
}
