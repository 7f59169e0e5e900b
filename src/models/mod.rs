pub mod annotation;
pub mod price_bar;
