pub mod actor;
pub mod catalog;
pub mod movie;
pub mod relay;

pub use actor::*;
pub use catalog::*;
pub use movie::*;
pub use relay::*;
