pub(crate) mod offset;
