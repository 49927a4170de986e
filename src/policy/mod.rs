pub(crate) mod config;
pub(crate) mod decide;
pub(crate) mod switch;
