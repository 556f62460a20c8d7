mod app;
mod dom;
mod fonts;
mod surface;

pub use app::run;
