//! Order execution value objects.

mod order_side;
mod order_type;
mod session;
mod time_in_force;

pub use order_side::OrderSide;
pub use order_type::OrderType;
pub use session::Session;
pub use time_in_force::TimeInForce;
