//! Material and site properties

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{StabilityError, StabilityResult};

/// Unit weights, seismic coefficient and retained-soil geometry for one analysis.
///
/// Units follow the catalog: with dimensions in feet, unit weights are in
/// pcf and the resulting moments in lb-ft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteProperties {
    /// Concrete unit weight
    pub g_conc: f64,
    /// Effective peak ground acceleration coefficient
    pub pga_eff: f64,
    /// Equivalent fluid unit weight for active pressure
    pub g_active: f64,
    /// Equivalent fluid unit weight for the seismic increment
    pub g_eq: f64,
    /// Equivalent fluid unit weight for passive pressure
    pub g_passive: f64,
    /// Retained height for active pressure
    pub g_active_height: f64,
    /// Retained height for the seismic increment
    pub g_eq_height: f64,
    /// Embedment height for passive pressure
    pub g_passive_height: f64,
    /// Soil contact width
    pub soil_width: f64,
}

impl SiteProperties {
    /// Property keys, in input-file order
    pub const KEYS: [&'static str; 9] = [
        "g_conc",
        "pga_eff",
        "g_active",
        "g_eq",
        "g_passive",
        "g_active_height",
        "g_eq_height",
        "g_passive_height",
        "soil_width",
    ];

    /// Generic 150 pcf concrete box with 5 ft of retained soil and no passive embedment
    pub fn reference() -> Self {
        Self {
            g_conc: 150.0,
            pga_eff: 2.0 / 3.0 * 1.56,
            g_active: 46.0,
            g_eq: 82.0,
            g_passive: 350.0,
            g_active_height: 5.0,
            g_eq_height: 5.0,
            g_passive_height: 0.0,
            soil_width: 5.0,
        }
    }

    /// Camanche valve house site (PGA 0.3 g, 9 ft retained, 4 ft embedment)
    pub fn camanche() -> Self {
        Self {
            g_conc: 150.0,
            pga_eff: 2.0 / 3.0 * 0.3,
            g_active: 40.56,
            g_eq: 92.04,
            g_passive: 786.24,
            g_active_height: 9.0,
            g_eq_height: 9.0,
            g_passive_height: 4.0,
            soil_width: 16.67,
        }
    }

    /// Build from a key/value map, failing on the first missing key
    pub fn from_map(map: &HashMap<String, f64>) -> StabilityResult<Self> {
        let get = |key: &str| {
            map.get(key)
                .copied()
                .ok_or_else(|| StabilityError::MissingProperty(key.to_string()))
        };
        let props = Self {
            g_conc: get("g_conc")?,
            pga_eff: get("pga_eff")?,
            g_active: get("g_active")?,
            g_eq: get("g_eq")?,
            g_passive: get("g_passive")?,
            g_active_height: get("g_active_height")?,
            g_eq_height: get("g_eq_height")?,
            g_passive_height: get("g_passive_height")?,
            soil_width: get("soil_width")?,
        };
        props.validate()?;
        Ok(props)
    }

    /// Key/value view, inverse of [`SiteProperties::from_map`]
    pub fn to_map(&self) -> HashMap<String, f64> {
        Self::KEYS
            .iter()
            .zip(self.values())
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    fn values(&self) -> [f64; 9] {
        [
            self.g_conc,
            self.pga_eff,
            self.g_active,
            self.g_eq,
            self.g_passive,
            self.g_active_height,
            self.g_eq_height,
            self.g_passive_height,
            self.soil_width,
        ]
    }

    /// Every value must be finite and non-negative; concrete must have weight
    pub fn validate(&self) -> StabilityResult<()> {
        for (key, value) in Self::KEYS.iter().zip(self.values()) {
            if !value.is_finite() || value < 0.0 {
                return Err(StabilityError::InvalidProperty {
                    key: key.to_string(),
                    value,
                });
            }
        }
        if self.g_conc == 0.0 {
            return Err(StabilityError::InvalidProperty {
                key: "g_conc".to_string(),
                value: self.g_conc,
            });
        }
        Ok(())
    }

    /// Copy with a different seismic coefficient
    pub fn with_pga_eff(mut self, pga_eff: f64) -> Self {
        self.pga_eff = pga_eff;
        self
    }
}

impl Default for SiteProperties {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_round_trip() {
        let props = SiteProperties::camanche();
        assert_eq!(SiteProperties::from_map(&props.to_map()).unwrap(), props);
    }

    #[test]
    fn test_missing_key() {
        let mut map = SiteProperties::reference().to_map();
        map.remove("g_eq_height");
        let err = SiteProperties::from_map(&map).unwrap_err();
        assert!(matches!(err, StabilityError::MissingProperty(ref key) if key == "g_eq_height"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_negative_value_rejected() {
        let mut map = SiteProperties::reference().to_map();
        map.insert("soil_width".to_string(), -1.0);
        assert!(matches!(
            SiteProperties::from_map(&map),
            Err(StabilityError::InvalidProperty { .. })
        ));
    }

    #[test]
    fn test_reference_pga() {
        assert!((SiteProperties::reference().pga_eff - 1.04).abs() < 1e-12);
    }
}
