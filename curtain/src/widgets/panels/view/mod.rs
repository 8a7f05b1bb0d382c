pub(crate) mod backdrop;
pub(crate) mod modal;
pub(crate) mod nav_drawer;
