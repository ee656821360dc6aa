//! Core library for classplit
//!
//! This crate implements the **Functional Core** of the classplit application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`classplit_core`** (this crate): Pure transformation functions with zero I/O
//! - **`classplit`**: File reads, the HTTP call and file writes (the Imperative Shell)
//!
//! Everything here takes strings and returns strings or typed values, so the
//! whole request → response → files pipeline can be tested with fixture text
//! and no network.
//!
//! # Module Organization
//!
//! - [`completion`]: Chat-completion request and response shapes
//! - [`split`]: Prompt building and splitting a model response into files
//!
//! # Example Usage
//!
//! ```rust
//! use classplit_core::split::split_response;
//!
//! let response = "reasoning...</think>\n// foo.hh\n#pragma once\n---\n// foo.cc\n#include \"foo.hh\"\n";
//! let files = split_response(response).unwrap();
//!
//! assert_eq!(files.len(), 2);
//! assert_eq!(files[0].name, "foo.hh");
//! assert_eq!(files[0].content, "// foo.hh\n#pragma once");
//! ```

pub mod completion;
pub mod split;
