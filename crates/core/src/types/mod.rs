//! Domain primitive types.

mod email;
mod id;
mod status;

pub use email::{Email, EmailError};
pub use id::{AdminId, ShipmentId, UserId};
pub use status::UserStatus;
