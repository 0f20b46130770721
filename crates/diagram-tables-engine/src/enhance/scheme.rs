use serde::{Deserialize, Serialize};

/// Colour palette for styled diagrams
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Blue,
    Purple,
    Green,
    Orange,
    Pink,
}

impl ColorScheme {
    /// CSS background of the outer panel
    pub fn gradient(self) -> &'static str {
        match self {
            ColorScheme::Blue => "linear-gradient(135deg, #74b9ff 0%, #0984e3 100%)",
            ColorScheme::Purple => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            ColorScheme::Green => "linear-gradient(135deg, #00b894 0%, #00cec9 100%)",
            ColorScheme::Orange => "linear-gradient(135deg, #fdcb6e 0%, #e17055 100%)",
            ColorScheme::Pink => "linear-gradient(135deg, #fd79a8 0%, #e84393 100%)",
        }
    }

    /// Background for node data badges and step numbers
    pub fn accent(self) -> &'static str {
        match self {
            ColorScheme::Blue => "#00b894",
            ColorScheme::Purple => "#fd79a8",
            ColorScheme::Green => "#74b9ff",
            ColorScheme::Orange | ColorScheme::Pink => "#6c5ce7",
        }
    }
}
