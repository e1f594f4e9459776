pub mod guess_mapper;

pub use guess_mapper::GuessMapper;
