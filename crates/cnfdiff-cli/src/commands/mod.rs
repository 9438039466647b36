pub mod compare;
pub mod normalize;
