mod ai_interaction;
mod auth;
mod program;
mod reservation;
mod seed;
mod storage;
mod user;
mod venue;
