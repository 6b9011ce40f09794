//! This module defines the macros that ship with this crate.
//!
//! While it's possible to use [`TraceWriter`](crate::writer::TraceWriter) and
//! [`ScopedTimer`](crate::timer::ScopedTimer) directly, the macros provide a nicer experience
//! and disappear entirely when the `enabled` feature is off.
//!
//! * [`start_session!`](crate::start_session) / [`end_session!`](crate::end_session) - Open and close a session on the global writer.
//! * [`profile_scope!`](crate::profile_scope) - Time the rest of the enclosing block.
//! * [`profile_function!`](crate::profile_function) - Time the rest of the enclosing function, named after it.
//! * [`profile_measure!`](crate::profile_measure) - Time a block expression and keep its value.

pub mod profile_function;
mod profile_measure;
mod profile_scope;
mod session;
