mod media_request;

pub use media_request::*;
