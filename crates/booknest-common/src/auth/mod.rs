//! Authentication utilities
//!
//! Sign-up and sign-in are handled by Supabase; this module only verifies the
//! access tokens it issues.

mod jwt;

pub use jwt::{Claims, JwtService};
