//! Lead Capture & Notification API Library
//!
//! This library provides the core functionality for the lead capture API:
//! the submission endpoint, the data-store client, the email provider
//! client, and the notification template.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `email_client`: Transactional-email provider client.
//! - `email_template`: Lead-notification email rendering.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers and router.
//! - `models`: Request and store data models.
//! - `store_client`: Data store REST client.

pub mod config;
pub mod email_client;
pub mod email_template;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod store_client;
