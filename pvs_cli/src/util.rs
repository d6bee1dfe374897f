pub(crate) mod dyn_error;
