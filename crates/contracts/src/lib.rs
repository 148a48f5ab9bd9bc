//! Wire types shared between the image recognition client and its backend.

pub mod domain;
pub mod shared;
pub mod system;
