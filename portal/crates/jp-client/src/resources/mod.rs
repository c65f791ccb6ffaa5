//! Typed backend calls, one file per screen group.
//!
//! Each call validates its form first, so rejected input never reaches the
//! network, then goes through [`SessionStore::dispatch`](crate::SessionStore::dispatch).

mod account;
mod chat;
mod jobs;
mod student;
mod teacher;
