//! Models module for alltz
//!
//! Contains the data model: the static city registry and the zone
//! display wrapper with its formatting enums.

pub mod city;
pub mod zone;
