pub mod adaptive;
pub mod bus;
pub mod config;
pub mod constants;
pub mod density;
pub mod error;
pub mod events;
pub mod gaze;
pub mod history;
pub mod keys;
pub mod observed;
pub mod scene;
pub mod state;

pub use adaptive::*;
pub use bus::*;
pub use config::*;
pub use error::*;
pub use events::*;
pub use gaze::*;
pub use state::*;
