use serde::{Deserialize, Serialize};

/// Number of product columns on wide screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GridDensity {
    #[default]
    Three,
    Four,
}

impl GridDensity {
    pub fn columns(&self) -> u8 {
        match self {
            GridDensity::Three => 3,
            GridDensity::Four => 4,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            GridDensity::Three => "3",
            GridDensity::Four => "4",
        }
    }

    /// Anything other than `"4"` is the three-column default.
    pub fn from_token(token: &str) -> Self {
        if token.trim() == "4" {
            GridDensity::Four
        } else {
            GridDensity::Three
        }
    }
}
