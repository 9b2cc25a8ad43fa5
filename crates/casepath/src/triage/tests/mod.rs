mod common;

mod merit;
mod routing;
