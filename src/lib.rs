pub mod engine;

#[cfg(feature = "glib-loop")]
pub mod driver;
