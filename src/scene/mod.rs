pub(crate) mod config;
pub(crate) mod layout;
pub(crate) mod palette;
pub(crate) mod storyboard;
