//! Readiness Coach - Stage-of-change assessment with a scripted coaching chat
//!
//! A short questionnaire places a patient in one of five motivational stages;
//! a follow-on chat replies with stage-specific motivational-interviewing
//! scripts chosen by keyword rules.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
