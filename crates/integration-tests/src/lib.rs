//! Integration tests for Shipdesk.
//!
//! Tests here exercise the seams between `shipdesk-core` and `shipdesk-api`
//! without a database: permission document lifecycles end-to-end through the
//! wire format, the token issue/verify/authorize path, ingestion row
//! normalization, and the error response contract.
//!
//! Anything that needs a live Postgres (repositories, the full router) runs
//! against a deployed instance instead; see the repository README.
