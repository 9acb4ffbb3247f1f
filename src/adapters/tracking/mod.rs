//! Tracking Adapters - Position source implementations.

mod channel_source;

pub use channel_source::ChannelPositionSource;
