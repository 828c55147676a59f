mod order;
mod order_type;
mod side;
mod spot;
mod time_in_force;

pub use order::{OrderAck, OrderRequest};
pub use order_type::OrderType;
pub use side::Side;
pub use spot::SpotPair;
pub use time_in_force::TimeInForce;
