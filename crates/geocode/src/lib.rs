//! Postal-code resolution for the premiere signup pipeline.
//!
//! [`GeocodeClient`] turns a postal code into a place name, region, and
//! coordinates. A static seed table answers common codes without any
//! network dependency; everything else goes to a zippopotam-style HTTP
//! lookup bounded by a timeout.
//!
//! Two resolution modes with deliberately different failure behaviour:
//!
//! - [`GeocodeClient::resolve`]: the interactive submission path.
//!   Any miss (transport failure, non-2xx status, empty place list)
//!   fails with [`GeocodeError::Unresolvable`].
//! - [`GeocodeClient::resolve_relaxed`]: the batch/export enrichment
//!   path. Honors a `CC-` country prefix, falls back through a
//!   prioritized country list, and reports a total miss as `None`
//!   instead of an error.

pub mod client;
pub mod seed;

pub use client::{GeocodeClient, GeocodeError, ResolvedPlace};
