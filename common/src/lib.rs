//! Types shared between the Lens API and its consumers.

pub mod views;
