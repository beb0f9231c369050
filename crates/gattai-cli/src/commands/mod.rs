pub(crate) mod check;
pub(crate) mod generate;
pub(crate) mod helpers;
pub(crate) mod problems;
pub(crate) mod validate;
