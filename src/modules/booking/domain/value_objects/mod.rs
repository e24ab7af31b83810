pub mod screening_state;

pub use screening_state::ScreeningState;
