//! Core library exports for the storefront service.
//!
//! This crate exposes the domain view models, the GROQ query builder, the
//! content store repository and the route/service layers used by the
//! storefront web application.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod groq;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
