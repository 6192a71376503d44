use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub node_fill: String,
    pub node_outline: String,
    pub line_color: String,
}

impl Theme {
    /// The reference style: black canvas, slate nodes, pale blue edges.
    pub fn dark() -> Self {
        Self {
            background: "#000000".to_string(),
            node_fill: "#596475".to_string(),
            node_outline: "#8cb6fa".to_string(),
            line_color: "#8cb6fa".to_string(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            node_fill: "#C7D2E5".to_string(),
            node_outline: "#41588C".to_string(),
            line_color: "#41588C".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
