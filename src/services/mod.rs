pub mod poller;
pub mod reporting;

#[cfg(test)]
mod poller_tests;
