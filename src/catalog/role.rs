//! Component role tags

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StabilityError;

/// Role of a rigid sub-volume within the structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "bs")]
    BaseSlab,
    #[serde(rename = "ts")]
    TopSlab,
    #[serde(rename = "lw")]
    LeftWall,
    #[serde(rename = "rw")]
    RightWall,
    #[serde(rename = "fw")]
    FrontWall,
    #[serde(rename = "bw")]
    BackWall,
    #[serde(rename = "wed_fw")]
    FrontWedge,
    #[serde(rename = "wed_bw")]
    BackWedge,
    #[serde(rename = "int_beam_1")]
    InteriorBeam1,
    #[serde(rename = "int_beam_2")]
    InteriorBeam2,
    #[serde(rename = "leg1")]
    SupportLeg1,
    #[serde(rename = "leg2")]
    SupportLeg2,
}

impl Role {
    /// Every role, in construction tie-break order
    pub const ALL: [Role; 12] = [
        Role::BaseSlab,
        Role::TopSlab,
        Role::LeftWall,
        Role::RightWall,
        Role::FrontWall,
        Role::BackWall,
        Role::FrontWedge,
        Role::BackWedge,
        Role::InteriorBeam1,
        Role::InteriorBeam2,
        Role::SupportLeg1,
        Role::SupportLeg2,
    ];

    /// Short tag used in analysis input files
    pub fn tag(&self) -> &'static str {
        match self {
            Role::BaseSlab => "bs",
            Role::TopSlab => "ts",
            Role::LeftWall => "lw",
            Role::RightWall => "rw",
            Role::FrontWall => "fw",
            Role::BackWall => "bw",
            Role::FrontWedge => "wed_fw",
            Role::BackWedge => "wed_bw",
            Role::InteriorBeam1 => "int_beam_1",
            Role::InteriorBeam2 => "int_beam_2",
            Role::SupportLeg1 => "leg1",
            Role::SupportLeg2 => "leg2",
        }
    }

    /// Human-readable identifier used when the catalog gives none
    pub fn default_id(&self) -> &'static str {
        match self {
            Role::BaseSlab => "base slab",
            Role::TopSlab => "top slab",
            Role::LeftWall => "left wall",
            Role::RightWall => "right wall",
            Role::FrontWall => "front wall",
            Role::BackWall => "back wall",
            Role::FrontWedge => "wedge front wall",
            Role::BackWedge => "wedge back wall",
            Role::InteriorBeam1 => "int beam 1",
            Role::InteriorBeam2 => "int beam 2",
            Role::SupportLeg1 => "leg 1",
            Role::SupportLeg2 => "leg 2",
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(
            self,
            Role::LeftWall | Role::RightWall | Role::FrontWall | Role::BackWall
        )
    }

    pub fn is_support_leg(&self) -> bool {
        matches!(self, Role::SupportLeg1 | Role::SupportLeg2)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_id())
    }
}

impl FromStr for Role {
    type Err = StabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.tag() == s)
            .ok_or_else(|| StabilityError::UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.tag().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert!(matches!(
            "chimney".parse::<Role>(),
            Err(StabilityError::UnknownRole(_))
        ));
    }

    #[test]
    fn test_serde_uses_tag() {
        let json = serde_json::to_string(&Role::FrontWedge).unwrap();
        assert_eq!(json, "\"wed_fw\"");
    }

    #[test]
    fn test_role_groups() {
        assert!(Role::BackWall.is_wall());
        assert!(!Role::BackWedge.is_wall());
        assert!(Role::SupportLeg2.is_support_leg());
    }
}
