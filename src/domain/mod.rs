pub(crate) mod mood;
