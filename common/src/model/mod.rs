pub mod cleaned;
pub mod country;
pub mod favorite;
