//! Tubecap locates the planar end caps of tubular B-rep features.
//!
//! A tube extruded along some path ends in two annular planar faces. Each
//! cap is a plane bounded by exactly two wires, and each wire is a single
//! full-circle edge. [`operations::query::DetectEndFaces`] scans a solid
//! for faces matching that signature and returns up to two
//! [`operations::query::EndFaceMatch`] descriptors carrying the bounding
//! circles.
//!
//! Topology lives in a [`topology::TopologyStore`] arena; the detector
//! only sees it through the [`query::SolidQuery`] trait, so alternative
//! kernels (or instrumented wrappers) can back the traversal.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod query;
pub mod topology;

pub use error::{Result, TubecapError};
