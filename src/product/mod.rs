mod dimensions;
mod product;
mod review;

pub use dimensions::Dimensions;
pub use product::{Product, ProductList};
pub use review::Review;
