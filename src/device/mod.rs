pub(crate) mod capabilities;
pub(crate) mod engine_state;
