//! Deployment fixtures and event helpers for running the lottery against a
//! simulated chain.
//!
//! `deploy` mirrors the deployment pipeline: mocks first on development
//! chains, then the lottery wired to a funded subscription. `listener`
//! collects the events a client would observe and waits for a specific one
//! with an explicit timeout.

pub mod deploy;

pub use deploy::{deploy_all, deploy_lottery, deploy_mocks, Deployment, Mocks};
pub use listener::{wait_for_event, EventLog, WaitError};
