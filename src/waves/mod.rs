/**
* filename : mod
* author : HAMA
* date: 2025. 6. 5.
* description:
**/
pub mod detector;
pub mod labeler;
pub mod projector;

pub use detector::*;
pub use labeler::*;
pub use projector::*;
