//! Domain models for the DineSpot backend

pub mod entities;
pub mod value_objects;
