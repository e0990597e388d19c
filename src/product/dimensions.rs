use serde::Deserialize;

#[cfg_attr(feature = "serde_io", derive(serde::Serialize))]
#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
/// Physical size of a Product, in centimetres.
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} × {} × {} cm", self.width, self.height, self.depth)
    }
}
