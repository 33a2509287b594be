//! # Event Bus Module
//!
//! Change notification for workspace state. The bus is an explicit value
//! owned (or shared through an `Arc`) by whoever needs it; there is no
//! global instance.
//!
//! ## Overview
//!
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - Supports both sync handlers and async receivers
//!
//! ## Usage
//!
//! ```rust
//! use deskplan_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, LayoutEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Layout]),
//!     |event| println!("{}", event.description()),
//! );
//!
//! bus.publish(AppEvent::Layout(LayoutEvent::Cleared)).ok();
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
