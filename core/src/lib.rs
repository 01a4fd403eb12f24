//! Todo list client core: observable state kept in sync with a REST backend.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `TodoStore` drives a
//! host-supplied `Transport` through those requests and keeps the todo list
//! and the active filter in `Signal`s that hosts can subscribe to.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `TodoStore` changes local state only after the server confirms a
//!   mutation. Failures are logged with `tracing` and leave state untouched.
//! - The visible list is derived on every read by the pure functions in
//!   `filter`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod filter;
pub mod http;
pub mod signal;
pub mod store;
pub mod types;

pub use client::TodoClient;
pub use error::{ApiError, StoreError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use signal::{Signal, SubscriptionId};
pub use store::TodoStore;
pub use types::{CreateTodo, Filter, TodoCounts, TodoItem, UpdateTodo};
