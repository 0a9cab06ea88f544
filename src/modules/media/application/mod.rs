pub mod dto;
pub mod ports;
pub mod repository;

pub use ports::MediaService;
pub use repository::MediaRepository;
