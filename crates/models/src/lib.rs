pub mod errors;
pub mod db;
pub mod location;
pub mod user;
pub mod user_credentials;
pub mod favorite;

#[cfg(test)]
mod tests;
