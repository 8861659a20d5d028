//! # singleton-detector
//!
//! Driver for a singleton-pattern static-analysis tool: enumerate every class
//! under a package prefix in a directory or jar, hand the set to a pluggable
//! detection engine, and write the resulting GraphML document to a file.
//!
//! ## Architecture
//!
//! - **classpath**: uniform resource listing over directory and jar roots
//! - **enumerate**: recursive resource-to-class-name discovery
//! - **cli**: clap argument surface and the `Flags` configuration record
//! - **detector**: engine boundary (`Detector` trait, analysis report types)
//! - **engine**: baseline engine rendering the class set as a GraphML graph
//! - **output**: atomic overwrite of the output graph file
//! - **error**: pipeline error kinds

pub mod classpath;
pub mod cli;
pub mod detector;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod output;
