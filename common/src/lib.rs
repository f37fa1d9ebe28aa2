//! Types shared between the heritage backend and its clients: the stored
//! entities, the location value objects, and the JSON requests and responses
//! of the HTTP API.

pub mod model;
pub mod requests;
pub mod responses;
