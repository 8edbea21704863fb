pub mod date;

pub use date::mins2readable;
