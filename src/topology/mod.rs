pub mod ring;
pub mod side;
pub mod wire;

pub use ring::Ring;
pub use side::Side;
pub use wire::Wire;
