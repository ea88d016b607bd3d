//! # nestegg
//!
//! A stateless computation engine for a round-up retirement savings
//! challenge, with a small HTTP surface on top.
//!
//! Clients submit an unordered batch of dated monetary transactions together
//! with three families of time-interval rules — `q` (override windows), `p`
//! (bonus windows), and `k` (evaluation windows) — and ask the service to:
//!
//! * **Parse**: canonicalize each transaction, synthesizing its `ceiling`
//!   (next multiple of 100) and `remanent` (ceiling − amount).
//! * **Validate**: check client-supplied ceilings/remanents, flag duplicates,
//!   and enforce a cumulative investment cap.
//! * **Filter**: compute each transaction's adjusted remanent under the
//!   temporal rules and keep those inside a `k` evaluation window.
//! * **Project returns**: aggregate adjusted remanents per `k` window and
//!   project nominal and inflation-adjusted returns for the NPS or an index
//!   instrument, including the NPS tax benefit.
//!
//! The hard part is the [temporal adjustment engine](engine): for every
//! transaction it resolves the winning `q` override (latest-started interval
//! wins, insertion order breaks ties) and the sum of all containing `p`
//! extras. Q resolution ships two interchangeable strategies — a priority
//! queue sweep and a union-find over sorted positions — behind a cost-model
//! selector; both produce identical results on every input.
//!
//! All money is exact [`rust_decimal::Decimal`] arithmetic, rounded half-even
//! to two places; binary floats appear only in the serde wire layer. The
//! core is pure and request-scoped: no caches, no shared state, no
//! suspension points.
//!
//! ## Running the server
//!
//! ```bash
//! NESTEGG_ADDR=127.0.0.1:8000 cargo run
//! ```
//!
//! ## Using the library
//!
//! ```
//! use nestegg::engine;
//! use nestegg::periods::{PeriodKind, RawPeriod, build_periods};
//! use nestegg::transactions::{RawTransaction, build_transactions};
//!
//! # fn main() -> Result<(), nestegg::Error> {
//! let expenses = vec![RawTransaction {
//!     date: Some("2023-10-12 20:15:00".into()),
//!     amount: Some(250.0),
//!     ..Default::default()
//! }];
//! let mut batch = build_transactions(&expenses)?.transactions;
//!
//! let q = build_periods(
//!     &[RawPeriod {
//!         start: Some("2023-10-01 00:00".into()),
//!         end: Some("2023-10-31 23:59".into()),
//!         fixed: Some(10.0),
//!         ..Default::default()
//!     }],
//!     PeriodKind::Q,
//! )?;
//! engine::apply_temporal_rules(&mut batch, &q, &[]);
//! assert_eq!(batch[0].effective_remanent().to_string(), "10.00");
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

/// Shared error type, money arithmetic, and the timestamp codec.
pub mod core;

// --- pipeline modules ---
/// Temporal adjustment engine: q overrides, p extras, k aggregation.
pub mod engine;
/// Filter pipeline: adjusted remanents restricted to k windows.
pub mod filter;
/// Validation and materialization of q/p/k interval lists.
pub mod periods;
/// Returns pipeline: per-window projections and the tax schedule.
pub mod returns;
/// HTTP surface: router, handlers, and wire types.
pub mod server;
/// Transaction canonicalization and the parse pipeline.
pub mod transactions;
/// Validator pipeline: structural checks and the investment cap.
pub mod validator;

// --- re-exports ---
pub use crate::core::Error;
pub use crate::engine::QStrategy;
pub use crate::periods::{Period, PeriodKind};
pub use crate::returns::Instrument;
pub use crate::transactions::{RawTransaction, Transaction};
