//! Tram route planner.
//!
//! Answers "how do I get from this stop to that one, as cheaply as
//! possible?" for a small tram network where every line charges a flat
//! boarding fare and travel times come from a GTFS timetable.

pub mod cache;
pub mod domain;
pub mod dto;
pub mod network;
pub mod planner;
pub mod timetable;
