pub mod anim;
pub mod session;

pub use anim::{Counter, Scheduler, Typewriter};
pub use session::{ChartResource, ModalSession};
