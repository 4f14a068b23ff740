pub mod fixtures;

mod actor_tests;
mod credits_tests;
