pub(crate) mod check;
pub(crate) mod decode;
pub(crate) mod extract;
pub(crate) mod stats;
