pub mod a001_image;
