pub mod clock;
pub mod error;
pub mod panel;
pub mod transport;

pub use clock::{ClockSession, ClockState, LivePreview};
pub use error::ClientError;
pub use panel::CyclePanel;
pub use transport::{ApiError, ApiResult, DeviceApi, HttpDevice};
