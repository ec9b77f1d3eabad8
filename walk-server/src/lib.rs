//! Oedo Line walking-itinerary planner server.
//!
//! A web application that plans on-foot itineraries along the Toei Oedo
//! Line: given two stations, a walking speed, a start time, and a rest
//! policy, it computes every station passed with arrival and departure
//! timestamps and the total distance walked.

pub mod domain;
pub mod planner;
pub mod storage;
pub mod topology;
pub mod web;
