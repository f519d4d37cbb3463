pub mod main;
pub mod routes;
