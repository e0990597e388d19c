use serde::Deserialize;

#[cfg_attr(feature = "serde_io", derive(serde::Serialize))]
#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// A customer review left on a Product.
pub struct Review {
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
    /// Display name of the reviewer.
    pub reviewer_name: String,
    /// Timestamp as sent by the service, kept verbatim.
    pub date: String,
}
