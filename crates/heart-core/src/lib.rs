pub mod animator;
pub mod clock;
pub mod constants;
pub mod error;
pub mod params;
pub mod picking;
pub mod scene;
pub mod state;

pub use animator::advance;
pub use clock::*;
pub use error::*;
pub use params::*;
pub use scene::*;
pub use state::*;
