//! Skillpath Core Types and Definitions
//!
//! This crate provides the foundational types for the Skillpath build-order
//! engine. It includes:
//!
//! - **Slots**: the four upgradeable skill slots ([`slot::SlotType`])
//! - **Events**: parsed and leveled build events ([`event`] module)
//! - **Groups**: diagram groups and connector classification ([`group`] module)
//! - **Identifiers**: string-interned identifiers ([`identifier::Id`])
//! - **Icons**: the slot icon lookup capability ([`icon`] module)

pub mod event;
pub mod group;
pub mod icon;
pub mod identifier;
pub mod slot;
