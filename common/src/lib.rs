//! Wire models shared by the InfoMundi client.
//!
//! `model` holds what the country lookup API and the local backend return;
//! `requests` holds what the client sends back.

pub mod model;
pub mod requests;
