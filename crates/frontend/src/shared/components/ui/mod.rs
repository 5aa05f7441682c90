mod button;
mod input;

pub use button::Button;
pub use input::Input;
