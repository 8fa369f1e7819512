//! In-memory resource stores over the engage REST backend.
//!
//! Implements the list synchronization pattern the dashboard repeats for
//! every resource: fetch pages into a collection, mutate on the server, then
//! resynchronize with a full refetch rather than patching locally. The
//! [`ListController`] layers the filter engine and selection tracker from
//! `engage-core` on top of a [`Store`], mirroring what each page component
//! wires together by hand.

mod backends;
mod controller;
mod metadata;
mod seq;
mod store;

pub use backends::{EngagementBackend, LeadBackend, MetadataApi};
pub use controller::ListController;
pub use metadata::{MetadataBackend, MetadataCache};
pub use seq::{SeqGuard, Ticket};
pub use store::{Entity, ListBackend, Store, StoreError};
