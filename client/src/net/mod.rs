//! Network layer: endpoint construction and the POST transport.

pub mod api;
pub mod transport;
