pub mod compare;
pub mod export;
pub mod filters;
pub mod listing;
pub mod overview;
