mod blocking_tests;
mod delay_tests;
mod handoff_tests;
