/**
* filename : mod
* author : HAMA
* date: 2025. 6. 3.
* description:
**/
pub mod bollinger;
pub mod frame;
pub mod moving_averages;
pub mod stochastic;

pub use bollinger::*;
pub use frame::*;
pub use moving_averages::*;
pub use stochastic::*;
