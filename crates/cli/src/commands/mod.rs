pub(crate) mod locations;
pub(crate) mod serve;
pub(crate) mod sync;
