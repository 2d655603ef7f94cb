//! Public ports for the crowdfunding core.

pub mod api;
