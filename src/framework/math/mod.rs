mod transform;
pub use transform::*;

mod ray;
pub use ray::*;
