pub(crate) mod square;
pub(crate) mod view;
