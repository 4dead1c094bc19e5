// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request marshalling for the ACC Account Admin client
//!
//! Converts typed, possibly-absent call arguments into what goes on the
//! wire:
//!
//! - query-string pairs ([`add_query_parameter`], [`QueryParams`])
//! - headers ([`add_header`]), with `Content-Range` routed to the body's
//!   header collection
//! - route templates with `{name}` placeholders ([`build_request_uri`])
//!
//! Absent values are omitted rather than rejected. The only failures are
//! programming errors: an enum member without a wire string, or a route
//! placeholder without a value (see [`MarshalError`]).
//!
//! Everything here is pure and synchronous; each call builds its own
//! collections.
//!
//! # Example
//!
//! ```
//! use acc_marshal::{OutgoingRequest, QueryParams, add_header, build_request_uri};
//!
//! let mut query = QueryParams::new();
//! query.add("limit", Some(20))?.add("offset", Some(0))?;
//!
//! let uri = build_request_uri(
//!     "/hq/v1/accounts/{account_id}/users",
//!     &[("account_id", "A1")],
//!     &query,
//! )?;
//! assert_eq!(uri, "/hq/v1/accounts/A1/users?limit=20");
//!
//! let mut req = OutgoingRequest::new(http::Method::GET, "/projects/{projectId}");
//! req.route_param("projectId", "P1");
//! add_header("Region", Some("EMEA"), &mut req)?;
//! assert_eq!(req.headers.get("region"), Some("EMEA"));
//! assert_eq!(req.uri()?, "/projects/P1");
//! # Ok::<(), acc_marshal::MarshalError>(())
//! ```

pub mod error;
pub mod header;
pub mod query;
pub mod request;
pub mod route;
pub mod wire;

pub use error::MarshalError;
pub use header::{CONTENT_RANGE, HeaderValue, add_header, encode_header};
pub use query::{QueryParams, QueryValue, add_query_parameter, encode_query_parameter};
pub use request::{Body, Headers, OutgoingRequest};
pub use route::{build_request_uri, substitute_route};
pub use wire::{EnumValue, WireEnum, wire_name};
