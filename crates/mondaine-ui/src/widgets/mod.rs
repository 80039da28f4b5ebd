pub mod clock_face;
pub mod second_hand;

pub use clock_face::{ClockFace, ClockState};
pub use second_hand::SecondHand;
