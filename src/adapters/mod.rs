// Adapters layer: concrete outbound actions and notification sinks.

pub mod notify;
pub mod outbound;

pub use notify::{ChannelNotifier, TracingNotifier};
pub use outbound::{ConfiguredOutbound, HttpOutbound, SimulatedOutbound};
