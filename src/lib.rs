//! A small text adventure: a fixed world of seven locations, an item-and-
//! inventory model, and a command processor shared by the browser, console
//! and demo front-ends.

pub mod adventure;
