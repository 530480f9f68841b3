// Domain modules, leaves first

pub mod identity;
pub mod posts;

pub mod feed;
pub mod moderation;
pub mod stats;
