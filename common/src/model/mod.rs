pub mod category;
pub mod contribution;
pub mod event;
pub mod location;
pub mod media;
pub mod stats;
pub mod temple;
pub mod view;
