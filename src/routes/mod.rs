pub mod fred;
pub mod health;
pub mod movies;
