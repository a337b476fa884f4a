pub mod players_endpoints;
