//! Batch and student dashboards built from student survey spreadsheets.
//!
//! The pipeline is: [`loader`] reads both spreadsheets into a
//! [`loader::Dataset`], [`analysis`] turns it into batch or student reports
//! using [`skills`] and [`wordcloud`], and [`report`] renders them.

pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod skills;
pub mod wordcloud;
