//! Invitation confirmation: identifiers in, one backend call, a page state out.
//!
//! The two page flavours (role id as a path segment, role id as a query
//! parameter) share one `InvitationConfirmer`; the difference lives in
//! `RoleSource`.

pub mod client;
pub mod confirmer;
pub mod request;
pub mod role_source;
pub mod state;

pub use client::{HttpInvitationClient, InvitationClient};
pub use confirmer::InvitationConfirmer;
pub use request::InvitationRequest;
pub use role_source::{DEVELOPER_ROLE_ID, RoleSource};
pub use state::PageState;
