mod adaline;

pub use adaline::Adaline;
