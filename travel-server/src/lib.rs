//! Travel recommendation server.
//!
//! A web application that answers: "Where can my budget take me, and
//! what else is worth seeing nearby?"

pub mod cache;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod web;
