mod activation;
mod identity;
mod step;

pub use activation::Activation;
pub use identity::Identity;
pub use step::Step;
