pub mod random;
pub mod renderer;
pub mod scheduler;
pub mod timers;
pub mod tracker;

pub use random::{JsRandom, RandomSource, SeededRandom};
pub use renderer::Renderer;
pub use scheduler::Scheduler;
pub use tracker::Tracker;
