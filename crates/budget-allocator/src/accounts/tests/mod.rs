mod common;
mod defaults;
