pub mod admin;
pub mod health;
pub mod helpers;
pub mod layout;
pub mod site;
