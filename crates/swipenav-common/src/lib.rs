pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, DomError, MediaError, SwipeNavError};
pub use events::NavEvent;
pub use types::{PanelCoord, Side, Translation, ViewportSize};

pub type Result<T> = std::result::Result<T, SwipeNavError>;
