pub mod error;
pub mod listing;
pub mod owner;
mod util;

pub use error::{Error, Result};
pub use listing::{FieldValue, Listing};
pub use owner::OwnerProfile;
pub use util::*;
