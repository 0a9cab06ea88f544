mod media_service;

pub use media_service::MediaService;
#[cfg(test)]
pub use media_service::MockMediaService;
