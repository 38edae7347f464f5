// src/domain/post/mod.rs
pub mod entity;
pub mod repository;
pub mod status;
pub mod value_objects;

pub use entity::{AVERAGE_WORDS_PER_MINUTE, NewPostParams, Post};
pub use repository::{
    PostReadRepository, PostScheduleRepository, PostValidationRepository, PostWriteRepository,
};
pub use status::Status;
pub use value_objects::{PostContent, PostId, SchemaType};
