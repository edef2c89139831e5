//! Player profile state and its persistence seam.
//!
//! `PlayerState` is the snapshot every resolver consumes. The store is a
//! repository trait the caller injects wherever persistence is needed; no
//! engine module ever touches it.

mod state;
pub mod store;

pub use state::{PlayerState, STARTING_CURRENCY};
pub use store::{JsonProfileStore, ProfileData, ProfileStore};
