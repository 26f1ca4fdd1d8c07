pub mod colour;
pub mod modulus;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
