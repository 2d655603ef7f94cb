//! Domain logic for the crowdfunding core.

pub mod campaigns;
pub mod feed;
pub mod graph;
pub mod insights;
pub mod ledger;
pub mod registry;

pub use campaigns::CampaignStore;
pub use feed::ActivityFeed;
pub use ledger::Ledger;
pub use registry::IdentityRegistry;
