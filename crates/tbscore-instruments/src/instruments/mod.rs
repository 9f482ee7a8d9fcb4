pub mod idai;
