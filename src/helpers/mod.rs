pub(crate) mod aggregate;
pub(crate) mod common;
pub(crate) mod joins;
pub(crate) mod keyed;
pub(crate) mod set_ops;
pub(crate) mod zip;
