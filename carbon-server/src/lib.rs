//! Travel carbon estimator server.
//!
//! A web application that takes a multi-segment travel itinerary, works out
//! the great-circle distance of each leg and estimates its CO2 emissions
//! from the transport mode.

pub mod cache;
pub mod config;
pub mod domain;
pub mod emissions;
pub mod geocode;
pub mod itinerary;
pub mod store;
pub mod web;
