pub mod fred;
pub mod tmdb;
pub mod upstream;
