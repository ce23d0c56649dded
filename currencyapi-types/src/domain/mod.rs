//! Domain models shared by the service and its callers.

pub mod request;
pub mod response;
pub mod subscription;

pub use request::{Request, RequestKind};
pub use response::{ConversionResponse, ErrorResponse, ExchangeRateResponse, Response};
pub use subscription::Subscription;
