pub mod dispatch;
pub mod dynamic;
pub mod fleet;

pub use crate::domain::model::{Bike, Station};
pub use crate::domain::ports::{Reporter, Working};
pub use crate::utils::error::Result;
